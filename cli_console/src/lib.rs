//! # CLI Console
//!
//! Command parsing and text rendering for the disk browser.
//!
//! ## Design
//!
//! The console never touches the image directly. It parses a line into a
//! [`Command`], runs it through a [`DiskBrowser`] and renders the result or
//! error as text. Reading input and writing output is left to the caller, so
//! the same handler drives an interactive terminal, a script or a test.
//!
//! [`DiskBrowser`]: services_disk_browser::DiskBrowser

pub mod commands;
pub mod parser;

pub use commands::{render_listing, CommandHandler, CommandOutcome, HELP_TEXT};
pub use parser::{Command, CommandError, CommandParser};
