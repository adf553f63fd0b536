pub mod console;
pub mod error;
pub mod fs;
pub mod path;
pub mod process;

pub use console::{operator_pause, Pause, SkipPause, TerminalPause};
pub use error::{Result, WheelSetupError};
pub use fs::compute_sha256;
pub use path::resolve_path;
pub use process::{CapturedOutput, CommandRunner, Invocation, ProcessExecutor};
