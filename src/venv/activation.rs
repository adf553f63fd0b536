use crate::core::error::{Result, WheelSetupError};
use crate::core::Invocation;
use crate::venv::layout::VenvLayout;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The environment an activation script would leave behind, applied to
/// each child process instead of to our own.
#[derive(Debug, Clone)]
pub struct ActivatedEnv {
    venv_root: PathBuf,
    vars: Vec<(String, OsString)>,
    removed: Vec<String>,
}

impl ActivatedEnv {
    pub fn activate(layout: &VenvLayout, prompt: Option<&str>) -> Result<Self> {
        if !layout.has_activation_script() {
            return Err(WheelSetupError::MissingActivationScript(
                layout.activation_script(),
            ));
        }

        let original_path = std::env::var_os("PATH").unwrap_or_default();
        Self::with_base_path(layout, prompt, original_path)
    }

    fn with_base_path(
        layout: &VenvLayout,
        prompt: Option<&str>,
        original_path: OsString,
    ) -> Result<Self> {
        let mut entries = vec![layout.bin_dir()];
        entries.extend(std::env::split_paths(&original_path));
        let new_path = std::env::join_paths(entries).map_err(|e| {
            WheelSetupError::Venv(format!("Cannot prepend venv to PATH: {}", e))
        })?;

        let label = prompt
            .map(str::to_string)
            .unwrap_or_else(|| layout.default_prompt());

        let mut vars = vec![
            (
                "VIRTUAL_ENV".to_string(),
                layout.root().as_os_str().to_os_string(),
            ),
            ("PATH".to_string(), new_path),
        ];

        // Same prompt shapes activate.bat and bin/activate produce.
        if cfg!(windows) {
            vars.push(("PROMPT".to_string(), format!("({}) $P$G", label).into()));
        } else {
            vars.push(("PS1".to_string(), format!("({}) $ ", label).into()));
        }

        Ok(Self {
            venv_root: layout.root().to_path_buf(),
            vars,
            removed: vec!["PYTHONHOME".to_string()],
        })
    }

    /// Layers user-provided variables over the activated ones.
    pub fn with_extra(mut self, extra: &HashMap<String, String>) -> Self {
        let mut keys: Vec<&String> = extra.keys().collect();
        keys.sort();

        for key in keys {
            self.vars.retain(|(k, _)| k != key);
            self.removed.retain(|k| k != key);
            self.vars.push((key.clone(), OsString::from(&extra[key])));
        }
        self
    }

    pub fn venv_root(&self) -> &Path {
        &self.venv_root
    }

    pub fn apply(&self, invocation: Invocation) -> Invocation {
        let invocation = self
            .removed
            .iter()
            .fold(invocation, |inv, key| inv.remove_env(key.clone()));

        self.vars
            .iter()
            .fold(invocation, |inv, (k, v)| inv.env(k.clone(), v.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn layout_with_script(dir: &Path) -> VenvLayout {
        let layout = VenvLayout::new(dir, "env");
        std::fs::create_dir_all(layout.bin_dir()).unwrap();
        std::fs::write(layout.activation_script(), "").unwrap();
        layout
    }

    #[test]
    fn missing_script_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let layout = VenvLayout::new(dir.path(), "env");

        let err = ActivatedEnv::activate(&layout, None).unwrap_err();
        match err {
            WheelSetupError::MissingActivationScript(path) => {
                assert_eq!(path, layout.activation_script())
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn path_starts_with_bin_dir() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(dir.path());

        let base =
            std::env::join_paths([PathBuf::from("first"), PathBuf::from("second")]).unwrap();
        let env = ActivatedEnv::with_base_path(&layout, None, base).unwrap();
        let inv = env.apply(Invocation::new(layout.python(), dir.path()));

        let entries: Vec<PathBuf> = std::env::split_paths(inv.get_env("PATH").unwrap()).collect();
        assert_eq!(entries[0], layout.bin_dir());
        assert_eq!(entries[1], PathBuf::from("first"));
        assert_eq!(entries[2], PathBuf::from("second"));
        assert_eq!(inv.get_env("VIRTUAL_ENV"), Some(layout.root().as_os_str()));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_entries_survive_activation() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(dir.path());
        let odd = OsStr::from_bytes(b"/opt/\xffbin");

        let env = ActivatedEnv::with_base_path(&layout, None, odd.to_os_string()).unwrap();
        let inv = env.apply(Invocation::new(layout.python(), dir.path()));

        let entries: Vec<PathBuf> = std::env::split_paths(inv.get_env("PATH").unwrap()).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].as_os_str().as_bytes(), b"/opt/\xffbin");
    }

    #[cfg(unix)]
    #[test]
    fn unjoinable_path_is_a_venv_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(&dir.path().join("a:b"));

        let err = ActivatedEnv::activate(&layout, None).unwrap_err();
        assert!(
            matches!(err, WheelSetupError::Venv(_)),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn prompt_uses_configured_label() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(dir.path());
        let env = ActivatedEnv::activate(&layout, Some("paper")).unwrap();
        let inv = env.apply(Invocation::new(layout.python(), dir.path()));

        #[cfg(unix)]
        assert_eq!(inv.get_env("PS1"), Some(OsStr::new("(paper) $ ")));

        #[cfg(windows)]
        assert_eq!(inv.get_env("PROMPT"), Some(OsStr::new("(paper) $P$G")));
    }

    #[test]
    fn applied_invocation_drops_pythonhome() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(dir.path());
        let env = ActivatedEnv::activate(&layout, None).unwrap();

        let inv = env.apply(Invocation::new(layout.python(), dir.path()));
        assert!(inv.env_remove.contains(&"PYTHONHOME".to_string()));
        assert!(inv.get_env("VIRTUAL_ENV").is_some());
    }

    #[test]
    fn extra_variables_override_activation() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_script(dir.path());

        let mut extra = HashMap::new();
        extra.insert("PIP_NO_INPUT".to_string(), "1".to_string());
        extra.insert("PYTHONHOME".to_string(), "/opt/py".to_string());
        let env = ActivatedEnv::activate(&layout, None)
            .unwrap()
            .with_extra(&extra);

        let inv = env.apply(Invocation::new(layout.python(), dir.path()));
        assert_eq!(inv.get_env("PIP_NO_INPUT"), Some(OsStr::new("1")));
        assert_eq!(inv.get_env("PYTHONHOME"), Some(OsStr::new("/opt/py")));
        assert!(inv.env_remove.is_empty());
    }
}
