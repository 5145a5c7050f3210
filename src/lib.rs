//! Festival lineup to Spotify playlist CLI library.
//!
//! This library reads a festival's performer list, resolves every performer to
//! a Spotify artist, samples each artist's top tracks and optionally inserts the
//! samples into a playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from `.env` and the environment
//! - `error` - The crate error type
//! - `lineup` - Performer sources, artist matching, sampling and the run pipeline
//! - `logging` - Tracing subscriber setup
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use festlist::{config, lineup};
//!
//! #[tokio::main]
//! async fn main() -> festlist::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     // Build a catalog and run the pipeline...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lineup;
pub mod logging;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::FestlistError;

/// Result alias used throughout the crate.
///
/// # Example
///
/// ```
/// use festlist::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, FestlistError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching lineup...");
/// info!("Found {} performers", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist loaded");
/// success!("Resolved {} artists", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors at the command layer. The process exits with
/// code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Missing required configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No matching artist found for {}", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
