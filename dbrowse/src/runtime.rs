//! # Session Runtime
//!
//! The prompt loop that ties the image, the browser and the console together.
//!
//! A session prints the banner, then reads one command per line until `exit`,
//! `quit` or end of input, and finally prints the read statistics. Commands
//! come either from an input stream (the terminal) or from an
//! [`InputScript`]; in script mode each command is echoed after the prompt so
//! the transcript reads like an interactive run.

use crate::config::SessionConfig;
use crate::input_script::{InputScript, InputScriptError};
use block_store::{BlockDevice, BlockError, CountingDevice, ImageDisk, IoStats};
use cli_console::CommandHandler;
use disk_format::FormatError;
use log::{debug, info};
use services_disk_browser::{DiskBrowser, NavigationError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Session error types
///
/// Only startup failures and console I/O failures end a session; every
/// browsing error is shown as a message instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Cannot open disk image: {0}")]
    Open(BlockError),

    #[error("Cannot read disk image: {0}")]
    Format(FormatError),

    #[error("Console I/O error: {0}")]
    Output(#[from] io::Error),

    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("Browser error: {0}")]
    Browser(NavigationError),
}

impl From<NavigationError> for SessionError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::Io(err) => Self::Open(err),
            NavigationError::Format(err) => Self::Format(err),
            other => Self::Browser(other),
        }
    }
}

/// One browsing session over an open device
pub struct Session<D: BlockDevice> {
    config: SessionConfig,
    handler: CommandHandler<CountingDevice<D>>,
}

impl<D: BlockDevice> Session<D> {
    /// Opens the browser over `device`
    ///
    /// Reads the label and allocation table; fails if either is unreadable.
    pub fn new(device: D, config: SessionConfig) -> Result<Self, SessionError> {
        let browser = DiskBrowser::open(CountingDevice::new(device))?;
        Ok(Self {
            config,
            handler: CommandHandler::new(browser),
        })
    }

    /// The command handler
    pub fn handler(&self) -> &CommandHandler<CountingDevice<D>> {
        &self.handler
    }

    /// Read statistics so far
    pub fn stats(&self) -> IoStats {
        self.handler.browser.device().stats()
    }

    /// Runs commands read from `input` until quit or end of input
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<IoStats, SessionError> {
        output.write_all(self.handler.banner().as_bytes())?;

        let mut buffer = Vec::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                writeln!(output)?;
                debug!("end of input");
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            if self.step(&line, output)? {
                break;
            }
        }

        self.finish(output)
    }

    /// Runs every command of `script`, stopping early on quit
    pub fn run_script<W: Write>(
        &mut self,
        mut script: InputScript,
        output: &mut W,
    ) -> Result<IoStats, SessionError> {
        output.write_all(self.handler.banner().as_bytes())?;

        while let Some(command) = script.next_command() {
            writeln!(output, "{}{}", self.config.prompt, command)?;
            if self.step(&command, output)? {
                break;
            }
        }
        if script.has_more() {
            debug!("script stopped with {} commands left", script.remaining());
        }

        self.finish(output)
    }

    /// Runs one line; returns true when the session should end
    fn step<W: Write>(&mut self, line: &str, output: &mut W) -> Result<bool, SessionError> {
        let outcome = self.handler.execute_line(line);
        output.write_all(outcome.output.as_bytes())?;
        Ok(outcome.quit)
    }

    fn finish<W: Write>(&mut self, output: &mut W) -> Result<IoStats, SessionError> {
        let stats = self.stats();
        info!("session ended: {}", stats);
        if self.config.show_stats {
            writeln!(output, "{}", stats)?;
        }
        output.flush()?;
        Ok(stats)
    }
}

/// Opens the configured image and runs a session on the given streams
///
/// The script named in the configuration, if any, is used instead of `input`.
pub fn run_session<R: BufRead, W: Write>(
    config: &SessionConfig,
    input: R,
    output: &mut W,
) -> Result<IoStats, SessionError> {
    let script = config
        .script
        .as_deref()
        .map(InputScript::from_file)
        .transpose()?;

    let device = ImageDisk::open(&config.image).map_err(SessionError::Open)?;
    let mut session = Session::new(device, config.clone())?;

    match script {
        Some(script) => session.run_script(script, output),
        None => session.run_interactive(input, output),
    }
}

/// Runs a session on standard input and standard output
pub fn run(config: &SessionConfig) -> Result<IoStats, SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run_session(config, stdin.lock(), &mut output)
}
