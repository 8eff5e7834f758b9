//! # Input Script Parser
//!
//! Provides a command script format for deterministic sessions and tests.
//!
//! ## Format
//!
//! Scripts are line-based, with each line holding one console command:
//! - Commands: `dir`, `cd docs`, `read readme.txt`, ...
//! - Comments: `# This is a comment`
//! - Blank lines are skipped
//!
//! ## Example
//!
//! ```text
//! # Look around the root
//! dir
//! cd docs
//! read notes.txt
//! ```

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Failed to read script {path}: {message}")]
    Read { path: String, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// Input script
///
/// Holds the commands of a script in order.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    commands: VecDeque<String>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let commands: VecDeque<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        if commands.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { commands })
    }

    /// Reads and parses a script file
    pub fn from_file(path: &Path) -> Result<Self, InputScriptError> {
        let text = fs::read_to_string(path).map_err(|e| InputScriptError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_text(&text)
    }

    /// Returns the next command, if any
    pub fn next_command(&mut self) -> Option<String> {
        self.commands.pop_front()
    }

    /// Returns true if the script has more commands
    pub fn has_more(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Returns the number of remaining commands
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let mut script = InputScript::from_text("dir\ncd docs\nread a.txt").unwrap();
        assert_eq!(script.remaining(), 3);

        assert_eq!(script.next_command().unwrap(), "dir");
        assert_eq!(script.next_command().unwrap(), "cd docs");
        assert_eq!(script.next_command().unwrap(), "read a.txt");
        assert!(!script.has_more());
        assert_eq!(script.next_command(), None);
    }

    #[test]
    fn test_parse_comments() {
        let script = InputScript::from_text("# Comment\ndir\n# Another comment\npwd").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_parse_empty_lines() {
        let script = InputScript::from_text("dir\n\npwd\n\n\nhelp").unwrap();
        assert_eq!(script.remaining(), 3);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let mut script = InputScript::from_text("   cd docs   \r\n").unwrap();
        assert_eq!(script.next_command().unwrap(), "cd docs");
    }

    #[test]
    fn test_empty_script_error() {
        let result = InputScript::from_text("");
        assert!(matches!(result, Err(InputScriptError::EmptyScript)));
    }

    #[test]
    fn test_empty_script_with_comments() {
        let result = InputScript::from_text("# Just comments\n# Nothing else");
        assert!(matches!(result, Err(InputScriptError::EmptyScript)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        fs::write(&path, "# walk\ncd docs\npwd\n").unwrap();

        let script = InputScript::from_file(&path).unwrap();
        assert_eq!(script.remaining(), 2);

        let missing = InputScript::from_file(&dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(InputScriptError::Read { .. })));
    }
}
