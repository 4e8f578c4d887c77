//! Jamendo API Client Library
//!
//! This library provides a client for the Jamendo music API: catalog reads,
//! the OAuth2 authorization flow and user-action writes. It also holds the
//! pieces the bundled command-line tool is built from.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type of the client
//! - `jamendo` - Jamendo API client implementation
//! - `management` - Token storage and refresh
//! - `server` - Local HTTP server for OAuth callbacks
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use jamendo::{Jamendo, Parameters};
//!
//! #[tokio::main]
//! async fn main() -> jamendo::Res<()> {
//!     let client = Jamendo::new("83039c0d")?;
//!     let albums = client.albums(Parameters::new().with("id", 33)).await?;
//!     println!("{}", albums.results[0]["name"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod jamendo;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

pub use error::{JamendoError, Result};
pub use jamendo::{Jamendo, JamendoBuilder, ParamValue, Parameters, RetryPolicy};

/// A convenient Result type alias for operations that may fail.
///
/// Used at the command-line edge where errors from the client, the file
/// system and the callback server all end up in front of the user.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Opening authorization page...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors at the command-line edge; the library itself always
/// returns errors.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
