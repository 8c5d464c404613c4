use super::*;

#[test]
fn defaults_when_nothing_set() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.request_timeout, Duration::from_secs(30));
    assert_eq!(cfg.toast_duration, Duration::from_millis(3000));
}

#[test]
fn parses_overrides() {
    let cfg = ClientConfig::from_values(Some("https://vault.example/ "), Some("5"), Some("1500"));
    assert_eq!(cfg.api_base, "https://vault.example");
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    assert_eq!(cfg.toast_duration, Duration::from_millis(1500));
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let cfg = ClientConfig::from_values(None, Some("soon"), Some("0"));
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.toast_duration, Duration::from_millis(DEFAULT_TOAST_MILLIS));
}

#[test]
fn parse_positive_reports_key() {
    let err = parse_positive("VAULT_TOAST_MILLIS", Some("-1")).unwrap_err();
    assert_eq!(err.to_string(), "VAULT_TOAST_MILLIS: expected a positive integer, got '-1'");
}
