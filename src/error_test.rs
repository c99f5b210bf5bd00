use super::*;

#[test]
fn bootstrap_error_names_anchor() {
    let err = BootstrapError::MissingAnchor { id: "app".to_owned() };
    assert_eq!(err.to_string(), "mount anchor #app not found");
}

#[test]
fn malformed_token_wraps_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = MalformedToken::from(json_err);
    assert!(err.to_string().starts_with("token payload is not JSON"));
}

#[test]
fn config_error_reports_key_and_value() {
    let err = ConfigError::InvalidFlag { key: "EXPEDITE_RELOAD_ON_LOGOUT".to_owned(), value: "maybe".to_owned() };
    assert_eq!(err.to_string(), "EXPEDITE_RELOAD_ON_LOGOUT must be true or false, got 'maybe'");
}
