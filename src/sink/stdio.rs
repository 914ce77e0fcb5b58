use super::{Console, render_extras};
use serde_json::Value;
use std::io::{self, Write};

/// The process console.
///
/// `debug` and `log` go to stdout, `warn` and `error` to stderr. Each call
/// produces one line (plus whatever line breaks the header already contains).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

fn write_line<W: Write>(mut out: W, header: &str, extras: &[Value]) {
    let result = if extras.is_empty() {
        writeln!(out, "{header}")
    } else {
        writeln!(out, "{header} {}", render_extras(extras))
    };
    // A closed pipe must not take the caller down with it
    let _ = result;
}

impl Console for StdConsole {
    fn debug(&self, header: &str, extras: &[Value]) {
        write_line(io::stdout().lock(), header, extras);
    }

    fn log(&self, header: &str, extras: &[Value]) {
        write_line(io::stdout().lock(), header, extras);
    }

    fn warn(&self, header: &str, extras: &[Value]) {
        write_line(io::stderr().lock(), header, extras);
    }

    fn error(&self, header: &str, extras: &[Value]) {
        write_line(io::stderr().lock(), header, extras);
    }
}
