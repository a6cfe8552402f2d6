use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::app_config::AppConfig;

/// Loads and saves [`AppConfig`] as pretty-printed JSON.
///
/// A missing file yields the defaults; unknown future fields fall back
/// field by field through `serde(default)`.
pub struct FileConfigRepository {
    path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create config dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    pub async fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(AppConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read config failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("decode config failed: {}", self.path.display()))
    }

    pub async fn save(&self, config: &AppConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config).context("serialize config failed")?;

        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &content)
            .await
            .with_context(|| format!("write temp config failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp config to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
