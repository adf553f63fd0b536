use crate::core::error::{Result, WheelSetupError};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};

/// Blocks until the operator acknowledges a message.
pub trait Pause {
    fn pause(&mut self, prompt: &str) -> Result<()>;
}

/// Waits for a single key press, like `pause` in cmd.exe.
pub struct TerminalPause;

impl Pause for TerminalPause {
    fn pause(&mut self, prompt: &str) -> Result<()> {
        print!("{}", prompt);
        io::stdout().flush()?;

        if io::stdin().is_terminal() {
            wait_for_key()?;
        } else {
            // Piped stdin: a line (or EOF) stands in for the key press.
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
        }

        println!();
        Ok(())
    }
}

fn wait_for_key() -> Result<()> {
    enable_raw_mode().map_err(console_error)?;

    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(console_error(e)),
        }
    };

    disable_raw_mode().map_err(console_error)?;
    result
}

fn console_error(e: io::Error) -> WheelSetupError {
    WheelSetupError::Console(format!("Failed to read key press: {}", e))
}

/// Used with `--no-pause`.
pub struct SkipPause;

impl Pause for SkipPause {
    fn pause(&mut self, _prompt: &str) -> Result<()> {
        Ok(())
    }
}

pub fn operator_pause(skip: bool) -> Box<dyn Pause> {
    if skip {
        Box::new(SkipPause)
    } else {
        Box::new(TerminalPause)
    }
}
