//! Default on-disk locations for the session store and configuration.

use std::path::PathBuf;

const APP_DIR: &str = "printstop";

pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

pub fn default_session_store_path() -> Option<PathBuf> {
    default_data_dir().map(|d| d.join("session.json"))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.json"))
}
