//! # dbrowse
//!
//! Host program for browsing flat block-addressed disk images.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The browser and console never print
//! - **Scripts are first-class**: A command file gives a deterministic transcript
//! - **Read-only**: The image is opened for reading and never modified
//! - **Errors are messages**: Only startup and output failures end the program
//!
//! ## Responsibilities
//!
//! The host:
//! - Loads the session configuration (flags and an optional JSON file)
//! - Installs the stderr logger
//! - Opens the image and prints the banner
//! - Runs the prompt loop, or a command script
//! - Prints read statistics when the session ends

pub mod config;
pub mod input_script;
pub mod logger;
pub mod runtime;

pub use config::{parse_args, ConfigError, SessionConfig};
pub use input_script::{InputScript, InputScriptError};
pub use logger::StderrLogger;
pub use runtime::{run, run_session, Session, SessionError};
