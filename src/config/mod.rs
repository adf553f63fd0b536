pub mod global;
pub mod project;
pub mod schema;
pub mod validation;

use crate::core::error::{Result, WheelSetupError};
use std::path::{Path, PathBuf};

pub use global::GlobalConfigManager;
pub use project::{ProjectConfigManager, PROJECT_CONFIG_FILE};
pub use schema::{PackagesConfig, SetupConfig, ShellConfig, VenvConfig};
pub use validation::{validate_package_name, validate_setup_config};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SetupConfig,
    /// File the config came from; `None` means built-in defaults.
    pub source: Option<PathBuf>,
}

/// Resolves the active configuration.
///
/// An explicit path must exist. Otherwise `wheel-setup.toml` in the working
/// directory wins over the global config, which wins over the defaults.
pub async fn load_config(
    working_dir: &Path,
    explicit: Option<&Path>,
    global: Option<&GlobalConfigManager>,
) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let mgr = ProjectConfigManager::from_path(path.to_path_buf());
        if !mgr.exists() {
            return Err(WheelSetupError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        return Ok(LoadedConfig {
            config: mgr.load().await?,
            source: Some(path.to_path_buf()),
        });
    }

    let project = ProjectConfigManager::new(working_dir);
    if project.exists() {
        return Ok(LoadedConfig {
            config: project.load().await?,
            source: Some(project.config_path().to_path_buf()),
        });
    }

    if let Some(global) = global {
        if let Some(config) = global.load().await? {
            return Ok(LoadedConfig {
                config,
                source: Some(global.config_path().to_path_buf()),
            });
        }
    }

    Ok(LoadedConfig {
        config: SetupConfig::default(),
        source: None,
    })
}
