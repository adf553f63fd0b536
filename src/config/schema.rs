use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_VENV_DIR: &str = "env";
pub const DEFAULT_WHEEL_PATTERN: &str = "*.whl";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupConfig {
    #[serde(default)]
    pub venv: VenvConfig,
    #[serde(default)]
    pub packages: PackagesConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    /// Extra variables for every child process, applied after activation.
    #[serde(default)]
    pub environment: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenvConfig {
    #[serde(default = "default_venv_dir")]
    pub dir: String,
    /// Prompt label; defaults to the venv directory name.
    #[serde(default)]
    pub prompt: Option<String>,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            dir: default_venv_dir(),
            prompt: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackagesConfig {
    #[serde(default = "default_upgrade")]
    pub upgrade: Vec<String>,
    #[serde(default = "default_wheel_pattern")]
    pub wheel_pattern: String,
    /// Treat a non-zero pip exit as an error instead of carrying on.
    #[serde(default)]
    pub strict: bool,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            upgrade: default_upgrade(),
            wheel_pattern: default_wheel_pattern(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub program: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: None,
        }
    }
}

fn default_venv_dir() -> String {
    DEFAULT_VENV_DIR.to_string()
}

fn default_upgrade() -> Vec<String> {
    vec!["pip".to_string(), "setuptools".to_string()]
}

fn default_wheel_pattern() -> String {
    DEFAULT_WHEEL_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}
