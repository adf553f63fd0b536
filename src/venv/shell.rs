/// Picks the interactive shell to hand off to: the configured program,
/// else `COMSPEC` on Windows or `SHELL` elsewhere.
pub fn resolve_shell(configured: Option<&str>) -> String {
    if let Some(program) = configured {
        return program.to_string();
    }

    if cfg!(windows) {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_program_wins() {
        assert_eq!(resolve_shell(Some("/usr/bin/zsh")), "/usr/bin/zsh");
    }

    #[test]
    fn falls_back_to_a_platform_shell() {
        assert!(!resolve_shell(None).is_empty());
    }
}
