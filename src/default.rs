use crate::logger::Logger;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// Process-wide logger built with the default options on first use.
///
/// It cannot be reconfigured; build a [`Logger`] for anything else.
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    #[test]
    fn test_default_logger_is_shared() {
        assert!(std::ptr::eq(logger(), logger()));
    }

    #[test]
    fn test_default_logger_uses_default_options() {
        let config = logger().config();
        assert_eq!(config.minimum_severity, Severity::Debug);
        assert_eq!(config.service_name, None);
        assert_eq!(config.base_context, None);
    }
}
