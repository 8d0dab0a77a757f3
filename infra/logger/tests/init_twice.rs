use slim_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _logger = Logger::builder()
        .name("slim-init-once")
        .level(LevelFilter::WARN)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("slim-init-twice")
        .init()
        .expect_err("second init must fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
