use rstest::rstest;
use slotbook_api::config::{ApiConfig, parse_log_level};
use tracing::Level;

#[test]
fn test_server_addr() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        ..ApiConfig::default()
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}

#[test]
fn test_default_offset_is_cst() {
    let offset = ApiConfig::default().utc_offset().unwrap();

    assert_eq!(offset.local_minus_utc(), -6 * 3600);
}

#[test]
fn test_offset_out_of_range() {
    let config = ApiConfig {
        utc_offset_hours: 30,
        ..ApiConfig::default()
    };

    assert!(config.utc_offset().is_err());
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("info", Level::INFO)]
#[case("verbose", Level::INFO)]
#[case("", Level::INFO)]
fn test_parse_log_level(#[case] input: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(input), expected);
}
