pub mod commands;

use crate::config::{load_config, validate_setup_config, GlobalConfigManager, SetupConfig};
use crate::core::error::{Result, WheelSetupError};
use crate::core::resolve_path;
use clap::{Args, Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wheel-setup",
    version,
    about = "Activate a Python virtual environment, install local wheels, and drop into a shell",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Without a subcommand, runs the full install sequence
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Working directory to install from (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<String>,

    /// Virtual environment directory, relative to the working directory
    #[arg(long, global = true, value_name = "DIR")]
    pub venv: Option<String>,

    /// Config file (default: ./wheel-setup.toml, then the global config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Finish after the banner instead of opening a shell
    #[arg(long, global = true)]
    pub no_shell: bool,

    /// Do not wait for a key press when the activation script is missing
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Fail on the first non-zero pip exit
    #[arg(long, global = true)]
    pub strict: bool,
}

impl GlobalArgs {
    pub fn apply(&self, config: &mut SetupConfig) {
        if let Some(venv) = &self.venv {
            config.venv.dir = venv.clone();
        }
        if self.no_shell {
            config.shell.enabled = false;
        }
        if self.strict {
            config.packages.strict = true;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the wheel files that would be installed
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Include the SHA-256 of each wheel
        #[arg(long)]
        hashes: bool,
    },

    /// Check the virtual environment and local wheels
    Doctor,

    /// Enter the activated shell without installing anything
    Shell,
}

pub struct Context {
    pub working_dir: PathBuf,
    pub config: SetupConfig,
    pub config_source: Option<PathBuf>,
    pub no_pause: bool,
}

impl Context {
    pub async fn from_args(args: &GlobalArgs) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let working_dir = match args.directory.as_deref() {
            Some(dir) => resolve_path(&current_dir, dir),
            None => current_dir.clone(),
        };

        if !working_dir.is_dir() {
            return Err(WheelSetupError::FileNotFound(
                working_dir.display().to_string(),
            ));
        }

        let explicit = args.config.as_ref().map(|p| current_dir.join(p));
        let global = GlobalConfigManager::new()?;
        let loaded = load_config(&working_dir, explicit.as_deref(), Some(&global)).await?;

        let mut config = loaded.config;
        args.apply(&mut config);
        validate_setup_config(&config)?;

        match &loaded.source {
            Some(path) => tracing::debug!("using config {}", path.display()),
            None => tracing::debug!("using built-in defaults"),
        }

        Ok(Self {
            working_dir,
            config,
            config_source: loaded.source,
            no_pause: args.no_pause,
        })
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_args(&cli.global).await?;

    match cli.command {
        None => commands::run::execute(ctx).await,

        Some(Commands::List { json, hashes }) => commands::list::execute(ctx, json, hashes).await,

        Some(Commands::Doctor) => commands::doctor::execute(ctx).await,

        Some(Commands::Shell) => commands::shell::execute(ctx).await,
    }
}
