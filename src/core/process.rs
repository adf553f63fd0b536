use crate::core::error::{Result, WheelSetupError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// A single external command, fully described before it is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub envs: Vec<(String, OsString)>,
    pub env_remove: Vec<String>,
    pub current_dir: PathBuf,
}

pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, current_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            env_remove: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        let key = key.into();
        self.env_remove.retain(|k| k != &key);
        self.envs.retain(|(k, _)| k != &key);
        self.envs.push((key, value.into()));
        self
    }

    pub fn remove_env(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.envs.retain(|(k, _)| k != &key);
        self.env_remove.push(key);
        self
    }

    #[cfg(test)]
    pub(crate) fn get_env(&self, key: &str) -> Option<&OsStr> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Human-readable command line, used for logs only.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.current_dir);

        for key in &self.env_remove {
            command.env_remove(key);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }

        command
    }
}

/// Seam between the installer steps and the operating system.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run to completion with the terminal attached and return the exit code.
    /// Failing to start the process is an error; a non-zero exit is not.
    async fn run_interactive(&mut self, invocation: &Invocation) -> Result<i32>;
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    pub async fn capture(invocation: &Invocation) -> Result<CapturedOutput> {
        tracing::debug!("capturing: {}", invocation.display());

        let output = invocation
            .command()
            .output()
            .await
            .map_err(|e| spawn_error(invocation, e))?;

        Ok(CapturedOutput {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

impl CommandRunner for ProcessExecutor {
    async fn run_interactive(&mut self, invocation: &Invocation) -> Result<i32> {
        tracing::debug!("running: {}", invocation.display());

        let status = invocation
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| spawn_error(invocation, e))?;

        Ok(status.code().unwrap_or(1))
    }
}

fn spawn_error(invocation: &Invocation, e: std::io::Error) -> WheelSetupError {
    WheelSetupError::CommandFailed(format!(
        "Failed to execute {}: {}",
        invocation.program.display(),
        e
    ))
}
