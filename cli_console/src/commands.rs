//! CLI Commands for the Disk Browser
//!
//! This module executes parsed commands against a [`DiskBrowser`] and renders
//! their output as text. Browser errors are rendered as messages here; they
//! never end the session.

use crate::parser::{Command, CommandError, CommandParser};
use block_store::BlockDevice;
use disk_format::{RecordKind, VisibleEntry};
use log::debug;
use services_disk_browser::{DiskBrowser, DiskOperations, NavigationError};
use std::fmt::Write;

/// Help text listing every command
pub const HELP_TEXT: &str = "\nAvailable commands:
  dir           - List contents of current directory
  cd <dir>      - Change directory (use '..' for parent)
  read <file>   - Read and display contents of a file
  pwd           - Print current working directory
  info          - Show disk label and allocation summary
  help          - Display this help message
  exit/quit     - Exit the program\n";

/// Result of running one input line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Text to show the user (may be empty)
    pub output: String,
    /// Whether the session should end
    pub quit: bool,
}

impl CommandOutcome {
    fn output(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

/// CLI Command handler
pub struct CommandHandler<D: BlockDevice> {
    /// Browser service for the open image
    pub browser: DiskBrowser<D>,
}

impl<D: BlockDevice> CommandHandler<D> {
    /// Creates a handler over an open browser
    pub fn new(browser: DiskBrowser<D>) -> Self {
        Self { browser }
    }

    /// Startup banner: the disk label and a pointer to `help`
    pub fn banner(&self) -> String {
        format!(
            "Disk Label: {}\n\nEnter 'help' for available commands.\n",
            self.browser.label()
        )
    }

    /// Parses and runs one input line
    ///
    /// Blank lines produce no output. Parse errors produce their usage
    /// message and change nothing.
    pub fn execute_line(&mut self, line: &str) -> CommandOutcome {
        match CommandParser::parse(line) {
            Ok(command) => self.execute(&command),
            Err(CommandError::Empty) => CommandOutcome::default(),
            Err(err) => CommandOutcome::output(format!("{}\n", err)),
        }
    }

    /// Runs a parsed command
    pub fn execute(&mut self, command: &Command) -> CommandOutcome {
        debug!("execute {:?}", command);
        let result = match command {
            Command::Dir => self.dir(),
            Command::Cd { name } => self.cd(name),
            Command::Read { name } => self.read(name),
            Command::Pwd => Ok(self.pwd()),
            Command::Info => Ok(self.info()),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Quit => {
                return CommandOutcome {
                    output: String::new(),
                    quit: true,
                }
            }
        };

        match result {
            Ok(output) => CommandOutcome::output(output),
            Err(err) => CommandOutcome::output(format!("{}\n", err)),
        }
    }

    /// Lists the current directory
    ///
    /// Example: `dir`
    pub fn dir(&mut self) -> Result<String, NavigationError> {
        let entries = self.browser.list()?;
        Ok(render_listing(&entries))
    }

    /// Changes directory; no output on success
    ///
    /// Example: `cd docs`, `cd ..`
    pub fn cd(&mut self, name: &str) -> Result<String, NavigationError> {
        self.browser.change_dir(name)?;
        Ok(String::new())
    }

    /// Displays file contents
    ///
    /// Example: `read readme.txt`
    pub fn read(&mut self, name: &str) -> Result<String, NavigationError> {
        let content = self.browser.read_file(name)?;
        Ok(format!(
            "\nContents of {}:\n{}\n{}\n",
            name,
            "-".repeat(40),
            content
        ))
    }

    /// Prints the current path
    ///
    /// Example: `pwd`
    pub fn pwd(&self) -> String {
        format!("{}\n", self.browser.current_path())
    }

    /// Displays the disk label and allocation table summary
    ///
    /// Example: `info`
    pub fn info(&self) -> String {
        let summary = self.browser.allocation_table().summary();
        let mut output = format!("Disk Label: {}\n", self.browser.label());
        let _ = writeln!(output, "Blocks: {}", self.browser.device().block_count());
        let _ = writeln!(
            output,
            "Allocation table: {} in use, {} unallocated, {} reserved, {} unknown",
            summary.in_use,
            summary.unallocated,
            summary.disk_label + summary.table_block,
            summary.unknown
        );
        output
    }

    /// Ends the session and returns the browser
    pub fn into_browser(self) -> DiskBrowser<D> {
        self.browser
    }
}

/// Renders a directory listing table
///
/// Entries whose sanitized name is empty are not shown.
pub fn render_listing(entries: &[VisibleEntry]) -> String {
    let mut output = String::from("\nDirectory listing:\n");
    let _ = writeln!(output, "{:<8}{:<12}Name", "Type", "Size");
    let _ = writeln!(output, "{}", "-".repeat(30));

    for entry in entries.iter().filter(|e| !e.name.is_empty()) {
        let (kind, size) = match entry.kind {
            RecordKind::Directory => ("DIR", String::new()),
            _ => ("FILE", entry.size.to_string()),
        };
        let _ = writeln!(output, "{:<8}{:<12}{}", kind, size, entry.name);
    }
    output
}
