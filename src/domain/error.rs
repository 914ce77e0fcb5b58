use thiserror::Error;

/// Top-level error type for the logger.
///
/// Emitting a record never produces one of these; only option parsing and
/// config file loading do.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid severity '{input}'. Valid severities: {valid_levels:?}")]
    InvalidSeverity {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
