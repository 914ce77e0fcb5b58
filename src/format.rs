//! Header formatting.
//!
//! A header has the shape
//! `[YYYY-MM-DD HH:mm:ss][service] [LEVEL] message` followed by the rendered
//! context, if any. Everything here is pure; the timestamp is passed in.

use crate::config::LoggerConfig;
use crate::domain::Severity;
use chrono::{DateTime, Local};
use serde_json::{Map, Value};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Shallow merge of base and call-site context. Call-site keys win; a key that
/// already exists in `base` keeps its position.
pub fn merge_context(
    base: Option<&Map<String, Value>>,
    call_site: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut merged = base.cloned().unwrap_or_default();
    if let Some(call_site) = call_site {
        for (key, value) in call_site {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

pub fn render_context(merged: &Map<String, Value>, development: bool) -> String {
    if merged.is_empty() {
        return String::new();
    }

    let rendered = if development {
        serde_json::to_string_pretty(merged)
    } else {
        serde_json::to_string(merged)
    };

    // Never fails for a Value map, but emission must not panic either way.
    match rendered {
        Ok(json) => format!("\n{json}"),
        Err(_) => String::new(),
    }
}

pub fn format_header(
    config: &LoggerConfig,
    severity: Severity,
    message: &str,
    call_site: Option<&Map<String, Value>>,
    now: &DateTime<Local>,
) -> String {
    let timestamp = format_timestamp(now);
    let service_prefix = match config.service_name.as_deref() {
        Some(name) if !name.is_empty() => format!("[{name}]"),
        _ => String::new(),
    };
    let merged = merge_context(config.base_context.as_ref(), call_site);
    let context = render_context(&merged, config.development_mode);

    format!(
        "[{timestamp}]{service_prefix} [{}] {message}{context}",
        severity.label()
    )
}
