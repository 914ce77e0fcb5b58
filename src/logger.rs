//! The logger.
//!
//! Every emission method funnels into [`Logger::log`], which runs the two
//! gates (minimum severity, development-only debug), classifies the trailing
//! arguments, formats the header and hands header plus extras to the console.

use crate::config::{EnvLookup, LoggerConfig, LoggerOptions, ProcessEnv};
use crate::domain::{LogArg, Severity, StructuredError};
use crate::format::format_header;
use crate::sink::{self, Channel, Console, StdConsole};
use chrono::{DateTime, Local};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A formatted record, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub severity: Severity,
    pub header: String,
    pub extras: Vec<Value>,
}

impl Prepared {
    pub fn channel(&self) -> Channel {
        Channel::for_severity(self.severity)
    }
}

/// Trailing arguments split into their roles.
#[derive(Debug, Default, PartialEq)]
struct Classified {
    context: Option<Map<String, Value>>,
    error: Option<StructuredError>,
    others: Vec<Value>,
}

/// Splits the trailing arguments.
///
/// A leading mapping becomes the call-site context. Of the rest, the first
/// error is kept in structured form and every error is excluded from the
/// extras; all other values pass through in order.
fn classify(args: Vec<LogArg>) -> Classified {
    let mut args = args.into_iter();
    let mut classified = Classified::default();
    let mut remaining = Vec::new();

    match args.next() {
        Some(LogArg::Map(map)) => classified.context = Some(map),
        Some(first) => remaining.push(first),
        None => return classified,
    }
    remaining.extend(args);

    for arg in remaining {
        match arg {
            LogArg::Error(err) => {
                if classified.error.is_none() {
                    classified.error = Some(err);
                }
            }
            other => classified.others.push(other.into_value()),
        }
    }

    classified
}

pub struct Logger {
    config: LoggerConfig,
    console: Arc<dyn Console>,
}

impl Logger {
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_env(options, &ProcessEnv)
    }

    /// Builds a logger, reading the environment through `env` instead of the
    /// process environment.
    pub fn with_env(options: LoggerOptions, env: &dyn EnvLookup) -> Self {
        Self::from_config(LoggerConfig::resolve(options, env))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            console: Arc::new(StdConsole::new()),
        }
    }

    /// Replaces the output sink.
    pub fn with_console<C: Console + 'static>(mut self, console: Arc<C>) -> Self {
        self.console = console as Arc<dyn Console>;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Whether a record of `severity` would be written at all.
    pub fn enabled(&self, severity: Severity) -> bool {
        if severity.priority() < self.config.minimum_severity.priority() {
            return false;
        }
        !(severity == Severity::Debug && !self.config.development_mode)
    }

    pub fn prepare(&self, severity: Severity, message: &str, args: Vec<LogArg>) -> Option<Prepared> {
        self.prepare_at(severity, message, args, &Local::now())
    }

    /// Formats a record as if it were emitted at `now`. Returns `None` when
    /// the record is filtered out.
    pub fn prepare_at(
        &self,
        severity: Severity,
        message: &str,
        args: Vec<LogArg>,
        now: &DateTime<Local>,
    ) -> Option<Prepared> {
        if !self.enabled(severity) {
            return None;
        }

        let classified = classify(args);
        let header = format_header(
            &self.config,
            severity,
            message,
            classified.context.as_ref(),
            now,
        );

        let mut extras = Vec::with_capacity(classified.others.len() + 1);
        if let Some(err) = &classified.error {
            extras.push(err.to_value());
        }
        extras.extend(classified.others);

        Some(Prepared {
            severity,
            header,
            extras,
        })
    }

    pub fn log(&self, severity: Severity, message: &str, args: Vec<LogArg>) {
        if let Some(prepared) = self.prepare(severity, message, args) {
            sink::write(
                self.console.as_ref(),
                prepared.channel(),
                &prepared.header,
                &prepared.extras,
            );
        }
    }

    pub fn info(&self, message: &str, args: Vec<LogArg>) {
        self.log(Severity::Info, message, args);
    }

    pub fn warn(&self, message: &str, args: Vec<LogArg>) {
        self.log(Severity::Warn, message, args);
    }

    pub fn error(&self, message: &str, args: Vec<LogArg>) {
        self.log(Severity::Error, message, args);
    }

    /// Only written in development mode.
    pub fn debug(&self, message: &str, args: Vec<LogArg>) {
        self.log(Severity::Debug, message, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
