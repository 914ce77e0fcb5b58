//! Domain layer for console-logger.
//!
//! Contains the canonical types shared across all modules:
//! - `Severity`: Record severity (Debug/Info/Warn/Error)
//! - `LogArg`: A trailing call-site argument, classified once at the call site
//! - `StructuredError`: The printable form of an observed error value
//! - `LoggerError`: Top-level error type for configuration loading

pub mod error;
pub mod log_arg;
pub mod severity;

pub use error::LoggerError;
pub use log_arg::{LogArg, StructuredError};
pub use severity::Severity;
