#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Errors are limited to option loading
    clippy::module_name_repetitions, // e.g. LoggerError in the domain module
    clippy::must_use_candidate,      // Emission methods return nothing worth using
    clippy::doc_markdown
)]

//! Leveled console logger.
//!
//! Formats one header line per record:
//!
//! ```text
//! [2024-03-07 09:05:02][my-service] [INFO] user signed in
//! {
//!   "userId": 123
//! }
//! ```
//!
//! and hands it, together with any extra values, to a console with one
//! channel per severity.
//!
//! ```
//! use console_logger::{Logger, LoggerOptions, Severity, log_args, logger};
//! use serde_json::json;
//!
//! logger().info("service starting", log_args![]);
//!
//! let billing = Logger::new(
//!     LoggerOptions::new()
//!         .with_service_name("billing")
//!         .with_min_level(Severity::Info),
//! );
//! billing.warn("retrying charge", log_args![json!({"attempt": 2})]);
//! ```

pub mod cli;
pub mod config;
pub mod default;
pub mod domain;
pub mod format;
pub mod logger;
pub mod macros;
pub mod sink;

// Re-export main types for easy access
pub use config::{EnvLookup, LoggerConfig, LoggerOptions, ProcessEnv};
pub use default::logger;
pub use domain::{LogArg, LoggerError, Severity, StructuredError};
pub use logger::{Logger, Prepared};
pub use sink::{Channel, Console, ConsoleWrite, MemoryConsole, StdConsole, TracingConsole};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
