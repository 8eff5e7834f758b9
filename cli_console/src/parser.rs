//! # Command Parser
//!
//! Turns one input line into a [`Command`].
//!
//! ## Command Set
//!
//! - `dir` - List the current directory
//! - `cd <name>` - Change directory (`..` for the parent)
//! - `read <name>` - Display a file
//! - `pwd` - Print the current path
//! - `info` - Show the disk label and allocation table summary
//! - `help` - Show the command list
//! - `exit` / `quit` - End the session
//!
//! Command words are case-sensitive. Only the first argument is used; any
//! further tokens on the line are ignored.

use thiserror::Error;

/// Command parse errors
///
/// The display form is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the current directory
    Dir,

    /// Change directory
    Cd { name: String },

    /// Read a file
    Read { name: String },

    /// Print working directory
    Pwd,

    /// Disk diagnostics
    Info,

    /// Show help
    Help,

    /// End the session
    Quit,
}

/// Command parser
pub struct CommandParser;

impl CommandParser {
    /// Parses a command line
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let mut parts = input.split_whitespace();
        let cmd = parts.next().ok_or(CommandError::Empty)?;
        let arg = parts.next();

        match cmd {
            "dir" => Ok(Command::Dir),
            "cd" => arg
                .map(|name| Command::Cd {
                    name: name.to_string(),
                })
                .ok_or(CommandError::MissingArgument("cd <directory>")),
            "read" => arg
                .map(|name| Command::Read {
                    name: name.to_string(),
                })
                .ok_or(CommandError::MissingArgument("read <filename>")),
            "pwd" => Ok(Command::Pwd),
            "info" => Ok(Command::Info),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
