pub mod app_config;
pub mod file_repo;

pub use app_config::{AppConfig, CURRENT_SCHEMA_VERSION};
pub use file_repo::FileConfigRepository;
