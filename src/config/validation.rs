use crate::config::schema::SetupConfig;
use crate::core::error::{Result, WheelSetupError};

pub fn validate_package_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WheelSetupError::Config(
            "packages.upgrade cannot contain empty entries".to_string(),
        ));
    }

    if name.starts_with('-') {
        return Err(WheelSetupError::Config(format!(
            "packages.upgrade entry '{}' looks like a pip option",
            name
        )));
    }

    Ok(())
}

pub fn validate_setup_config(config: &SetupConfig) -> Result<()> {
    if config.venv.dir.trim().is_empty() {
        return Err(WheelSetupError::Config(
            "venv.dir cannot be empty".to_string(),
        ));
    }

    if let Some(prompt) = config.venv.prompt.as_deref() {
        if prompt.trim().is_empty() {
            return Err(WheelSetupError::Config(
                "venv.prompt cannot be empty".to_string(),
            ));
        }
    }

    if config.packages.upgrade.is_empty() {
        return Err(WheelSetupError::Config(
            "packages.upgrade must name at least one package".to_string(),
        ));
    }

    for name in &config.packages.upgrade {
        validate_package_name(name)?;
    }

    let pattern = config.packages.wheel_pattern.as_str();
    if pattern.trim().is_empty() {
        return Err(WheelSetupError::Config(
            "packages.wheel_pattern cannot be empty".to_string(),
        ));
    }

    if pattern != pattern.trim() {
        return Err(WheelSetupError::Config(format!(
            "packages.wheel_pattern '{}' has leading or trailing whitespace",
            pattern
        )));
    }

    if pattern.contains('/') || pattern.contains('\\') {
        return Err(WheelSetupError::Config(
            "packages.wheel_pattern must match file names (no path separators)".to_string(),
        ));
    }

    glob::Pattern::new(pattern)?;

    if let Some(program) = config.shell.program.as_deref() {
        if program.trim().is_empty() {
            return Err(WheelSetupError::Config(
                "shell.program cannot be empty".to_string(),
            ));
        }
    }

    if config.environment.keys().any(|k| k.is_empty() || k.contains('=')) {
        return Err(WheelSetupError::Config(
            "environment keys must be non-empty and must not contain '='".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        validate_setup_config(&SetupConfig::default()).unwrap();
    }

    #[test]
    fn empty_venv_dir_is_rejected() {
        let mut config = SetupConfig::default();
        config.venv.dir = "  ".to_string();

        let msg = validate_setup_config(&config).unwrap_err().to_string();
        assert!(msg.contains("venv.dir"), "unexpected error: {}", msg);
    }

    #[test]
    fn empty_upgrade_entry_is_rejected() {
        let mut config = SetupConfig::default();
        config.packages.upgrade.push(String::new());

        let msg = validate_setup_config(&config).unwrap_err().to_string();
        assert!(msg.contains("packages.upgrade"), "unexpected error: {}", msg);
    }

    #[test]
    fn empty_upgrade_list_is_rejected() {
        let mut config = SetupConfig::default();
        config.packages.upgrade.clear();

        let msg = validate_setup_config(&config).unwrap_err().to_string();
        assert!(msg.contains("packages.upgrade"), "unexpected error: {}", msg);
    }

    #[test]
    fn option_like_upgrade_entry_is_rejected() {
        assert!(validate_package_name("--pre").is_err());
        assert!(validate_package_name("wheel").is_ok());
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let mut config = SetupConfig::default();
        config.packages.wheel_pattern = "[*.whl".to_string();

        let err = validate_setup_config(&config).unwrap_err();
        assert!(
            matches!(err, WheelSetupError::Pattern(_)),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn pattern_with_surrounding_whitespace_is_rejected() {
        let mut config = SetupConfig::default();
        config.packages.wheel_pattern = " *.whl".to_string();

        let msg = validate_setup_config(&config).unwrap_err().to_string();
        assert!(msg.contains("whitespace"), "unexpected error: {}", msg);

        config.packages.wheel_pattern = "*.whl\n".to_string();
        assert!(validate_setup_config(&config).is_err());
    }

    #[test]
    fn pattern_with_separator_is_rejected() {
        let mut config = SetupConfig::default();
        config.packages.wheel_pattern = "dist/*.whl".to_string();

        let msg = validate_setup_config(&config).unwrap_err().to_string();
        assert!(msg.contains("path separators"), "unexpected error: {}", msg);
    }
}
