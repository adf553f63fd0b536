use crate::core::error::Result;
use crate::wheel::name::WheelName;
use glob::{MatchOptions, Pattern};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct WheelFile {
    #[serde(skip)]
    pub path: PathBuf,
    /// Exact name handed to pip, even when it is not valid UTF-8.
    #[serde(skip)]
    pub file_name: OsString,
    /// Lossy form of `file_name` for output.
    #[serde(rename = "file_name")]
    pub display_name: String,
    pub name: Option<WheelName>,
}

impl WheelFile {
    fn new(path: PathBuf, file_name: OsString) -> Self {
        let display_name = file_name.to_string_lossy().to_string();
        let name = WheelName::parse(&display_name);
        Self {
            path,
            file_name,
            display_name,
            name,
        }
    }

    /// Distribution and version when known, otherwise the bare file name.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => self.display_name.clone(),
        }
    }
}

// cmd.exe globbing is case-insensitive, so `*.whl` also matches `.WHL`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Lists regular files directly inside `dir` whose names match `pattern`.
/// Results are sorted by file name so repeated runs install in the same order.
pub fn discover_wheels(dir: &Path, pattern: &str) -> Result<Vec<WheelFile>> {
    let pattern = Pattern::new(pattern)?;
    let mut wheels = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().map(|n| n.to_os_string()) else {
            continue;
        };

        // Undecodable bytes become U+FFFD, which `*` still matches.
        if pattern.matches_with(&file_name.to_string_lossy(), MATCH_OPTIONS) {
            wheels.push(WheelFile::new(path, file_name));
        }
    }

    wheels.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!("found {} wheel(s) in {}", wheels.len(), dir.display());
    Ok(wheels)
}
