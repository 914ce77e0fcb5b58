use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::backtrace::{Backtrace, BacktraceStatus};

/// Printable form of an error value observed among the trailing arguments.
///
/// Live error objects are never handed to the console; they are flattened into
/// this plain record first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredError {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl StructuredError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Builds the record from any error type.
    ///
    /// `name` is the unqualified type name of `E`. `stack` is a backtrace taken
    /// here, regardless of `RUST_BACKTRACE`.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self {
            name: short_type_name::<E>().to_string(),
            message: err.to_string(),
            stack: Some(Backtrace::force_capture().to_string()),
        }
    }

    /// Builds the record from an `anyhow::Error`, reusing the backtrace anyhow
    /// recorded when the error was created. Without one, a backtrace is taken
    /// here.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let stack = match err.backtrace().status() {
            BacktraceStatus::Captured => err.backtrace().to_string(),
            _ => Backtrace::force_capture().to_string(),
        };
        Self {
            name: "Error".to_string(),
            message: err.to_string(),
            stack: Some(stack),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(self.name.clone()));
        object.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(stack) = &self.stack {
            object.insert("stack".to_string(), Value::String(stack.clone()));
        }
        Value::Object(object)
    }
}

/// `std::io::error::Error` -> `Error`, `my_app::Failure<u8>` -> `Failure`
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// A trailing call-site argument.
///
/// Variant order mirrors the classification precedence: an error is checked
/// first, then a sequence, then a plain mapping. Everything else is `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Error(StructuredError),
    Sequence(Vec<Value>),
    Map(Map<String, Value>),
    Other(Value),
}

impl LogArg {
    pub fn error<E: std::error::Error>(err: &E) -> Self {
        LogArg::Error(StructuredError::from_error(err))
    }

    pub fn into_value(self) -> Value {
        match self {
            LogArg::Error(err) => err.to_value(),
            LogArg::Sequence(items) => Value::Array(items),
            LogArg::Map(map) => Value::Object(map),
            LogArg::Other(value) => value,
        }
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => LogArg::Sequence(items),
            Value::Object(map) => LogArg::Map(map),
            other => LogArg::Other(other),
        }
    }
}

impl From<Map<String, Value>> for LogArg {
    fn from(map: Map<String, Value>) -> Self {
        LogArg::Map(map)
    }
}

impl From<Vec<Value>> for LogArg {
    fn from(items: Vec<Value>) -> Self {
        LogArg::Sequence(items)
    }
}

impl From<StructuredError> for LogArg {
    fn from(err: StructuredError) -> Self {
        LogArg::Error(err)
    }
}

impl From<anyhow::Error> for LogArg {
    fn from(err: anyhow::Error) -> Self {
        LogArg::Error(StructuredError::from_anyhow(&err))
    }
}

impl From<&anyhow::Error> for LogArg {
    fn from(err: &anyhow::Error) -> Self {
        LogArg::Error(StructuredError::from_anyhow(err))
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Other(Value::String(value.to_string()))
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        LogArg::Other(Value::String(value))
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        LogArg::Other(Value::Bool(value))
    }
}

impl From<i32> for LogArg {
    fn from(value: i32) -> Self {
        LogArg::Other(Value::from(value))
    }
}

impl From<i64> for LogArg {
    fn from(value: i64) -> Self {
        LogArg::Other(Value::from(value))
    }
}

impl From<u64> for LogArg {
    fn from(value: u64) -> Self {
        LogArg::Other(Value::from(value))
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        LogArg::Other(Value::from(value))
    }
}
