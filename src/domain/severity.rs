use super::error::LoggerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Variants are declared in priority order, so the derived `Ord` matches
/// [`Severity::priority`]. The ordering is only used for filtering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn priority(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warn => 2,
            Severity::Error => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Uppercase label used inside the header brackets.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Parses a textual severity, falling back to `Info` for anything unrecognized.
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or(Severity::Info)
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::InvalidSeverity {
                input: s.to_string(),
                valid_levels: Severity::ALL
                    .iter()
                    .map(|level| level.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(Severity::Debug.priority(), 0);
        assert_eq!(Severity::Info.priority(), 1);
        assert_eq!(Severity::Warn.priority(), 2);
        assert_eq!(Severity::Error.priority(), 3);

        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);

        // Case insensitive
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);

        // Trace is not a recognized severity here
        assert!("trace".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_invalid_severity_lists_valid_levels() {
        match "fatal".parse::<Severity>() {
            Err(LoggerError::InvalidSeverity {
                input,
                valid_levels,
            }) => {
                assert_eq!(input, "fatal");
                assert_eq!(valid_levels, vec!["debug", "info", "warn", "error"]);
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_lenient_falls_back_to_info() {
        assert_eq!(Severity::parse_lenient("warn"), Severity::Warn);
        assert_eq!(Severity::parse_lenient("verbose"), Severity::Info);
        assert_eq!(Severity::parse_lenient(""), Severity::Info);
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(Severity::Debug.label(), "DEBUG");
        assert_eq!(Severity::Error.label(), "ERROR");
        assert_eq!(Severity::Warn.to_string(), "warn");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let parsed: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Severity::Error);
    }
}
