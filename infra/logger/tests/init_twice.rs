use encontra_domain::config::LoggingConfig;
use encontra_logger::{Logger, LoggerError};

#[test]
fn second_install_is_refused() {
    let logger = Logger::from_config("encontra-probe", &LoggingConfig::default()).unwrap();
    assert!(!logger.writes_files());

    let err = Logger::from_config("encontra-probe", &LoggingConfig::default()).unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err}");
}
