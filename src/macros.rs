/// Builds the trailing argument list for an emission call, converting each
/// expression with `LogArg::from`.
///
/// ```
/// use console_logger::{Logger, LoggerOptions, log_args};
/// use serde_json::json;
///
/// let logger = Logger::new(LoggerOptions::new().with_service_name("billing"));
/// let err = std::io::Error::other("disk full");
/// logger.error(
///     "Failed to persist invoice",
///     log_args![json!({"invoiceId": 42}), console_logger::LogArg::error(&err)],
/// );
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),+]
    };
}
