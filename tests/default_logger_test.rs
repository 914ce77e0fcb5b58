use console_logger::{Channel, Severity, log_args, logger};

#[test]
fn test_default_logger_info_targets_standard_output() {
    // Usable without any construction at the call site
    logger().info("Test message", log_args![]);

    let prepared = logger()
        .prepare(Severity::Info, "Test message", log_args![])
        .unwrap();
    assert_eq!(prepared.channel(), Channel::Log);
    assert!(prepared.header.ends_with("[INFO] Test message"));
    assert!(prepared.extras.is_empty());
}

#[test]
fn test_default_logger_has_no_service_prefix() {
    let prepared = logger()
        .prepare(Severity::Warn, "plain", log_args![])
        .unwrap();
    assert!(prepared.header.contains("] [WARN] plain"));
    assert!(!prepared.header.contains("]["));
}
