use super::{Console, render_extras};
use serde_json::Value;

/// Forwards every write to the installed `tracing` subscriber.
///
/// The header becomes the event message and the extras, when present, are
/// attached as a single `extras` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl TracingConsole {
    pub fn new() -> Self {
        Self
    }
}

fn extras_field(extras: &[Value]) -> Option<String> {
    (!extras.is_empty()).then(|| render_extras(extras))
}

impl Console for TracingConsole {
    fn debug(&self, header: &str, extras: &[Value]) {
        let extras = extras_field(extras);
        tracing::debug!(extras = extras.as_deref(), "{header}");
    }

    fn log(&self, header: &str, extras: &[Value]) {
        let extras = extras_field(extras);
        tracing::info!(extras = extras.as_deref(), "{header}");
    }

    fn warn(&self, header: &str, extras: &[Value]) {
        let extras = extras_field(extras);
        tracing::warn!(extras = extras.as_deref(), "{header}");
    }

    fn error(&self, header: &str, extras: &[Value]) {
        let extras = extras_field(extras);
        tracing::error!(extras = extras.as_deref(), "{header}");
    }
}
