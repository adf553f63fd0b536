use crate::config::schema::SetupConfig;
use crate::config::validate_setup_config;
use crate::core::error::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub struct GlobalConfigManager {
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Result<Self> {
        Ok(Self::with_config_dir(Self::get_config_dir()))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join(GLOBAL_CONFIG_FILE),
        }
    }

    fn get_config_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "wheel-setup", "wheel-setup") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wheel-setup")
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Returns `None` when no global config has been written.
    pub async fn load(&self) -> Result<Option<SetupConfig>> {
        if !self.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: SetupConfig = toml::from_str(&content)?;
        validate_setup_config(&config)?;
        Ok(Some(config))
    }
}
