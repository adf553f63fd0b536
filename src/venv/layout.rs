use crate::core::resolve_path;
use std::path::{Path, PathBuf};

/// On-disk shape of a virtual environment created by `python -m venv`.
#[derive(Debug, Clone)]
pub struct VenvLayout {
    root: PathBuf,
}

impl VenvLayout {
    pub fn new(working_dir: &Path, configured_dir: &str) -> Self {
        Self {
            root: resolve_path(working_dir, configured_dir),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    pub fn activation_script(&self) -> PathBuf {
        if cfg!(windows) {
            self.bin_dir().join("activate.bat")
        } else {
            self.bin_dir().join("activate")
        }
    }

    pub fn has_activation_script(&self) -> bool {
        self.activation_script().is_file()
    }

    pub fn python(&self) -> PathBuf {
        self.executable("python")
    }

    pub fn executable(&self, command: &str) -> PathBuf {
        let bin_dir = self.bin_dir();
        if cfg!(windows) {
            bin_dir.join(format!("{}.exe", command))
        } else {
            bin_dir.join(command)
        }
    }

    /// Label shown in the shell prompt when none is configured.
    pub fn default_prompt(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "venv".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_relative_to_working_dir() {
        let layout = VenvLayout::new(Path::new("/tmp/project"), "env");
        assert_eq!(layout.root(), Path::new("/tmp/project").join("env"));
        assert_eq!(layout.default_prompt(), "env");
    }

    #[test]
    fn activation_script_path() {
        let layout = VenvLayout::new(Path::new("/tmp/project"), "env");
        let script = layout.activation_script();

        #[cfg(unix)]
        assert!(script.ends_with("env/bin/activate"));

        #[cfg(windows)]
        assert!(script.ends_with("env\\Scripts\\activate.bat"));
    }

    #[test]
    fn python_path() {
        let layout = VenvLayout::new(Path::new("/tmp/project"), "env");
        let python = layout.python();

        #[cfg(unix)]
        assert!(python.ends_with("env/bin/python"));

        #[cfg(windows)]
        assert!(python.ends_with("env\\Scripts\\python.exe"));
    }

    #[test]
    fn activation_script_must_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = VenvLayout::new(dir.path(), "env");
        assert!(!layout.has_activation_script());

        std::fs::create_dir_all(layout.activation_script()).unwrap();
        assert!(!layout.has_activation_script());
    }
}
