//! Command line front end: emits a single record from a shell.

use crate::config::LoggerOptions;
use crate::domain::{LogArg, LoggerError, Severity};
use crate::logger::Logger;
use crate::sink::{MemoryConsole, TracingConsole};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SinkKind {
    /// stdout for debug/info, stderr for warn/error
    #[default]
    Std,
    /// Forward to a tracing fmt subscriber
    Tracing,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "console-log", author, version, about, long_about = None)]
pub struct Cli {
    /// Severity of the emitted record
    #[arg(short, long, default_value = "info")]
    pub level: Severity,

    /// Records below this severity are dropped
    #[arg(long, env = "LOG_LEVEL")]
    pub min_level: Option<Severity>,

    /// Service tag prefixed into the header
    #[arg(long, env = "SERVICE_NAME")]
    pub service_name: Option<String>,

    /// Force production mode (compact context, no debug records)
    #[arg(long, conflicts_with = "development")]
    pub production: bool,

    /// Force development mode
    #[arg(long)]
    pub development: bool,

    /// Call-site context field; the value is parsed as JSON when possible
    #[arg(long = "context", value_name = "KEY=VALUE", value_parser = parse_context_pair)]
    pub context: Vec<(String, Value)>,

    /// Call-site context as a JSON object
    #[arg(long, value_name = "JSON")]
    pub context_json: Option<String>,

    /// Logger options file (TOML)
    #[arg(long, env = "LOGGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output sink
    #[arg(long, value_enum, default_value = "std")]
    pub sink: SinkKind,

    /// Message text
    pub message: String,

    /// Extra values printed after the header
    pub extras: Vec<String>,
}

/// Parses `key=value`. The value is read as JSON when it parses, otherwise it
/// is kept as a plain string.
pub fn parse_context_pair(input: &str) -> Result<(String, Value), LoggerError> {
    let Some((key, raw)) = input.split_once('=') else {
        return Err(LoggerError::InvalidContext(format!(
            "expected KEY=VALUE, got '{input}'"
        )));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(LoggerError::InvalidContext(format!(
            "empty key in '{input}'"
        )));
    }

    let value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

impl Cli {
    /// Logger options: the config file first, then flags on top.
    pub fn options(&self) -> Result<LoggerOptions, LoggerError> {
        let base = match &self.config {
            Some(path) => LoggerOptions::from_file(path)?,
            None => LoggerOptions::default(),
        };

        let mut flags = LoggerOptions {
            service_name: self.service_name.clone(),
            min_level: self.min_level,
            ..LoggerOptions::default()
        };
        if self.production {
            flags.is_development = Some(false);
        } else if self.development {
            flags.is_development = Some(true);
        }

        Ok(base.merge(flags))
    }

    /// The call-site context, if any, followed by the extras as strings.
    pub fn record_args(&self) -> Result<Vec<LogArg>, LoggerError> {
        let mut context = match &self.context_json {
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(LoggerError::InvalidContext(format!(
                        "--context-json must be an object, got {other}"
                    )));
                }
                Err(e) => {
                    return Err(LoggerError::InvalidContext(format!(
                        "--context-json is not valid JSON: {e}"
                    )));
                }
            },
            None => Map::new(),
        };
        for (key, value) in &self.context {
            context.insert(key.clone(), value.clone());
        }

        let mut args = Vec::with_capacity(self.extras.len() + 1);
        if !context.is_empty() {
            args.push(LogArg::Map(context));
        }
        args.extend(self.extras.iter().map(|extra| LogArg::from(extra.as_str())));
        Ok(args)
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Emits the record described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options().context("Failed to load logger options")?;
    let args = cli.record_args()?;

    let logger = Logger::new(options);
    let logger = match cli.sink {
        SinkKind::Std => logger,
        SinkKind::Tracing => {
            init_tracing()?;
            logger.with_console(Arc::new(TracingConsole::new()))
        }
    };

    logger.log(cli.level, &cli.message, args);
    Ok(())
}

/// Like [`run`], but records into `console` instead of printing.
pub fn run_captured(cli: &Cli, console: Arc<MemoryConsole>) -> anyhow::Result<()> {
    let options = cli.options().context("Failed to load logger options")?;
    let args = cli.record_args()?;

    Logger::new(options)
        .with_console(console)
        .log(cli.level, &cli.message, args);
    Ok(())
}
