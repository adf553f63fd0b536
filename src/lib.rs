pub mod cli;
pub mod config;
pub mod core;
pub mod sequencer;
pub mod venv;
pub mod wheel;

pub use sequencer::{InstallOutcome, RunReport, Sequencer};
