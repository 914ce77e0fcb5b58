//! Console sinks.
//!
//! A sink exposes four independent write channels. Each call receives the
//! formatted header followed by the extra values, which are passed alongside
//! the header rather than concatenated into it.

pub mod memory;
pub mod stdio;
pub mod trace_bridge;

pub use memory::{ConsoleWrite, MemoryConsole};
pub use stdio::StdConsole;
pub use trace_bridge::TracingConsole;

use crate::domain::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Console-like output with one channel per severity.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    fn debug(&self, header: &str, extras: &[Value]);

    /// Standard output channel, used for info records.
    fn log(&self, header: &str, extras: &[Value]);

    fn warn(&self, header: &str, extras: &[Value]);

    fn error(&self, header: &str, extras: &[Value]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Debug,
    Log,
    Warn,
    Error,
}

impl Channel {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Channel::Debug,
            Severity::Info => Channel::Log,
            Severity::Warn => Channel::Warn,
            Severity::Error => Channel::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Debug => "debug",
            Channel::Log => "log",
            Channel::Warn => "warn",
            Channel::Error => "error",
        }
    }
}

/// Writes to the matching channel of `console`.
pub fn write(console: &dyn Console, channel: Channel, header: &str, extras: &[Value]) {
    match channel {
        Channel::Debug => console.debug(header, extras),
        Channel::Log => console.log(header, extras),
        Channel::Warn => console.warn(header, extras),
        Channel::Error => console.error(header, extras),
    }
}

/// Renders extras the way they appear after the header on a console line:
/// strings verbatim, everything else as compact JSON, separated by spaces.
pub fn render_extras(extras: &[Value]) -> String {
    extras
        .iter()
        .map(|extra| match extra {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use serde_json::json;

    #[test]
    fn test_channel_for_severity() {
        assert_eq!(Channel::for_severity(Severity::Debug), Channel::Debug);
        assert_eq!(Channel::for_severity(Severity::Info), Channel::Log);
        assert_eq!(Channel::for_severity(Severity::Warn), Channel::Warn);
        assert_eq!(Channel::for_severity(Severity::Error), Channel::Error);
    }

    #[test]
    fn test_write_targets_single_channel() {
        let mut console = MockConsole::new();
        console
            .expect_warn()
            .with(eq("header"), eq(vec![json!(1)]))
            .times(1)
            .return_const(());
        console.expect_debug().times(0);
        console.expect_log().times(0);
        console.expect_error().times(0);

        write(&console, Channel::Warn, "header", &[json!(1)]);
    }

    #[test]
    fn test_render_extras() {
        let extras = vec![
            json!("plain text"),
            json!({"name": "Error", "message": "boom"}),
            json!([1, 2]),
            json!(null),
        ];
        assert_eq!(
            render_extras(&extras),
            "plain text {\"name\":\"Error\",\"message\":\"boom\"} [1,2] null"
        );
        assert_eq!(render_extras(&[]), "");
    }
}
