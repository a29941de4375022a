//! Command-line interface: argument parsing and the non-TUI commands.
//!
//! ```ignore
//! use cerina::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("{}", version_string()),
//!     CliCommand::Logout => { /* clear the session and exit */ }
//!     CliCommand::RunTui { transcript } => { /* start the TUI */ }
//! }
//! ```

pub mod args;
pub mod logout;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use logout::handle_logout_command;
pub use version::{version_string, VERSION};
