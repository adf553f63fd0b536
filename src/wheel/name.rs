use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// {distribution}-{version}(-{build tag})?-{python tag}-{abi tag}-{platform tag}.whl
static WHEEL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<distribution>[^-]+)-(?P<version>[^-]+)(?:-(?P<build>\d[^-]*))?-(?P<python>[^-]+)-(?P<abi>[^-]+)-(?P<platform>[^-]+)(?i:\.whl)$",
    )
    .expect("Invalid wheel filename regex")
});

/// The tags encoded in a conventionally named wheel file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WheelName {
    pub distribution: String,
    pub version: String,
    pub build: Option<String>,
    pub python_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

impl WheelName {
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = WHEEL_NAME_RE.captures(file_name)?;

        Some(Self {
            distribution: caps["distribution"].to_string(),
            version: caps["version"].to_string(),
            build: caps.name("build").map(|m| m.as_str().to_string()),
            python_tag: caps["python"].to_string(),
            abi_tag: caps["abi"].to_string(),
            platform_tag: caps["platform"].to_string(),
        })
    }
}

impl fmt::Display for WheelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.distribution, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pure_python_wheel() {
        let name = WheelName::parse("paper_analyst-0.1.0-py3-none-any.whl").unwrap();

        assert_eq!(name.distribution, "paper_analyst");
        assert_eq!(name.version, "0.1.0");
        assert_eq!(name.build, None);
        assert_eq!(name.abi_tag, "none");
        assert_eq!(name.platform_tag, "any");
        assert_eq!(name.to_string(), "paper_analyst 0.1.0");
    }

    #[test]
    fn parses_build_tag_and_platform() {
        let name =
            WheelName::parse("numpy-1.26.4-1b-cp311-cp311-win_amd64.whl").unwrap();

        assert_eq!(name.build.as_deref(), Some("1b"));
        assert_eq!(name.python_tag, "cp311");
        assert_eq!(name.abi_tag, "cp311");
        assert_eq!(name.platform_tag, "win_amd64");
    }

    #[test]
    fn extension_case_is_ignored() {
        assert!(WheelName::parse("demo-1.0-py3-none-any.WHL").is_some());
    }

    #[test]
    fn unconventional_names_do_not_parse() {
        assert!(WheelName::parse("a.whl").is_none());
        assert!(WheelName::parse("demo-1.0.whl").is_none());
        assert!(WheelName::parse("demo-1.0-py3-none-any.zip").is_none());
    }
}
