use crate::config::schema::SetupConfig;
use crate::config::validate_setup_config;
use crate::core::error::{Result, WheelSetupError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const PROJECT_CONFIG_FILE: &str = "wheel-setup.toml";

pub struct ProjectConfigManager {
    config_path: PathBuf,
}

impl ProjectConfigManager {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            config_path: working_dir.join(PROJECT_CONFIG_FILE),
        }
    }

    pub fn from_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub async fn load(&self) -> Result<SetupConfig> {
        if !self.exists() {
            return Err(WheelSetupError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: SetupConfig = toml::from_str(&content)?;
        validate_setup_config(&config)?;
        Ok(config)
    }
}
