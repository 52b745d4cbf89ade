//! Structured console logging for the minter
//!
//! Tagged, levelled log lines with command-line controlled filtering:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - `--quiet` keeps only warnings and errors, `--verbose` shows everything
//!
//! ## Usage
//!
//! ```rust
//! use nft_minter::logger::{self, LogTag};
//!
//! logger::info(LogTag::Minter, "NFT #1 created");
//! logger::error(LogTag::Rpc, "Connection failed");
//! logger::debug(LogTag::Transactions, "Blockhash: ..."); // Only if --debug-transactions
//! ```
//!
//! Call `logger::init()` once at startup, after the command-line arguments
//! are available.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{config_from_args, get_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments
///
/// Scans for --debug-<module>, --verbose, --quiet and --no-color.
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless filtered by tag)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (hidden with --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching --debug-<module> flag is given, e.g.
/// `--debug-rpc` for `LogTag::Rpc`.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose or --verbose-<module>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
