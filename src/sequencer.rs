//! The install sequence: activate, upgrade the packaging tools, install
//! every local wheel, print the banner, then hand over to a shell.
//!
//! Exit codes from pip are reported but not acted on unless
//! `packages.strict` is set. Only a missing activation script stops the
//! run early.

use crate::config::SetupConfig;
use crate::core::error::{Result, WheelSetupError};
use crate::core::{CommandRunner, Invocation, Pause};
use crate::venv::{resolve_shell, ActivatedEnv, VenvLayout};
use crate::wheel::{discover_wheels, WheelFile};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const COMPLETION_BANNER: &str = "All packages installed.";
pub const PAUSE_PROMPT: &str = "Press any key to continue . . . ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub wheel: String,
    pub exit_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    MissingActivation {
        script: PathBuf,
    },
    Completed {
        upgrade_exit: i32,
        installs: Vec<InstallOutcome>,
        /// `None` when the shell handoff is disabled.
        shell_exit: Option<i32>,
    },
}

impl RunReport {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunReport::MissingActivation { .. } => 1,
            RunReport::Completed { shell_exit, .. } => shell_exit.unwrap_or(0),
        }
    }

    pub fn failed_installs(&self) -> Vec<&InstallOutcome> {
        match self {
            RunReport::MissingActivation { .. } => Vec::new(),
            RunReport::Completed { installs, .. } => {
                installs.iter().filter(|i| i.exit_code != 0).collect()
            }
        }
    }
}

pub struct Sequencer {
    working_dir: PathBuf,
    layout: VenvLayout,
    config: SetupConfig,
}

impl Sequencer {
    pub fn new(working_dir: PathBuf, config: SetupConfig) -> Self {
        let layout = VenvLayout::new(&working_dir, &config.venv.dir);
        Self {
            working_dir,
            layout,
            config,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn layout(&self) -> &VenvLayout {
        &self.layout
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    pub fn activate(&self) -> Result<ActivatedEnv> {
        let env = ActivatedEnv::activate(&self.layout, self.config.venv.prompt.as_deref())?;
        Ok(env.with_extra(&self.config.environment))
    }

    pub fn wheels(&self) -> Result<Vec<WheelFile>> {
        discover_wheels(&self.working_dir, &self.config.packages.wheel_pattern)
    }

    fn pip(&self, env: &ActivatedEnv) -> Invocation {
        env.apply(Invocation::new(self.layout.python(), &self.working_dir))
            .args(["-m", "pip"])
    }

    pub fn upgrade_invocation(&self, env: &ActivatedEnv) -> Invocation {
        self.pip(env)
            .args(["install", "--upgrade"])
            .args(self.config.packages.upgrade.iter().cloned())
    }

    /// The wheel is passed by bare file name; pip runs in the working dir.
    pub fn install_invocation(&self, env: &ActivatedEnv, wheel: &WheelFile) -> Invocation {
        self.pip(env).arg("install").arg(wheel.file_name.clone())
    }

    pub fn pip_version_invocation(&self, env: &ActivatedEnv) -> Invocation {
        self.pip(env).arg("--version")
    }

    pub fn shell_invocation(&self, env: &ActivatedEnv) -> Invocation {
        let shell = resolve_shell(self.config.shell.program.as_deref());
        env.apply(Invocation::new(shell, &self.working_dir))
    }

    pub async fn run<R, P, W>(
        &self,
        runner: &mut R,
        pause: &mut P,
        out: &mut W,
    ) -> Result<RunReport>
    where
        R: CommandRunner,
        P: Pause + ?Sized,
        W: Write,
    {
        let env = match self.activate() {
            Ok(env) => env,
            Err(WheelSetupError::MissingActivationScript(script)) => {
                writeln!(
                    out,
                    "{} {}",
                    "✗".red().bold(),
                    format!("Activation script not found: {}", script.display()).red()
                )?;
                out.flush()?;
                pause.pause(PAUSE_PROMPT)?;
                return Ok(RunReport::MissingActivation { script });
            }
            Err(e) => return Err(e),
        };
        tracing::info!("activated {}", env.venv_root().display());

        writeln!(
            out,
            "{} Upgrading {}...",
            "⚙".blue().bold(),
            self.config.packages.upgrade.join(" ").cyan()
        )?;
        out.flush()?;
        let upgrade_exit = runner
            .run_interactive(&self.upgrade_invocation(&env))
            .await?;
        self.check_exit("pip upgrade", upgrade_exit)?;

        let wheels = self.wheels()?;
        let mut installs = Vec::with_capacity(wheels.len());
        for wheel in &wheels {
            writeln!(
                out,
                "{} Installing {}...",
                "→".blue().bold(),
                wheel.display_name.yellow()
            )?;
            out.flush()?;

            let exit_code = runner
                .run_interactive(&self.install_invocation(&env, wheel))
                .await?;
            self.check_exit(&format!("install of {}", wheel.display_name), exit_code)?;

            installs.push(InstallOutcome {
                wheel: wheel.display_name.clone(),
                exit_code,
            });
        }

        writeln!(out)?;
        writeln!(out, "{} {}", "✓".green().bold(), COMPLETION_BANNER.green().bold())?;
        out.flush()?;

        let shell_exit = if self.config.shell.enabled {
            Some(self.enter_shell(runner, &env, out).await?)
        } else {
            None
        };

        Ok(RunReport::Completed {
            upgrade_exit,
            installs,
            shell_exit,
        })
    }

    /// Activates and hands off to the shell without installing anything.
    /// A missing activation script is an error here, not a pause.
    pub async fn run_shell<R, W>(&self, runner: &mut R, out: &mut W) -> Result<i32>
    where
        R: CommandRunner,
        W: Write,
    {
        let env = self.activate()?;
        self.enter_shell(runner, &env, out).await
    }

    pub async fn enter_shell<R, W>(
        &self,
        runner: &mut R,
        env: &ActivatedEnv,
        out: &mut W,
    ) -> Result<i32>
    where
        R: CommandRunner,
        W: Write,
    {
        let invocation = self.shell_invocation(env);

        writeln!(out, "{} Entering virtual environment shell", "→".blue().bold())?;
        writeln!(out, "  Type {} to exit", "exit".yellow())?;
        writeln!(out)?;
        out.flush()?;

        runner.run_interactive(&invocation).await
    }

    fn check_exit(&self, what: &str, exit_code: i32) -> Result<()> {
        if exit_code == 0 {
            return Ok(());
        }

        if self.config.packages.strict {
            return Err(WheelSetupError::CommandFailed(format!(
                "{} exited with status {}",
                what, exit_code
            )));
        }

        tracing::warn!("{} exited with status {}; continuing", what, exit_code);
        Ok(())
    }
}
