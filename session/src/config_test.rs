use super::*;

#[test]
fn missing_base_url_uses_default() {
    let cfg = ApiConfig::from_base_url(None).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn default_matches_missing_env() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_base_url(None).unwrap());
}

#[test]
fn blank_base_url_uses_default() {
    let cfg = ApiConfig::from_base_url(Some("   ")).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
}

#[test]
fn trailing_slash_is_stripped() {
    let cfg = ApiConfig::from_base_url(Some("https://api.example.test/v1/")).unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
}

#[test]
fn non_http_base_url_errors() {
    let err = ApiConfig::from_base_url(Some("ftp://files.example.test")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://files.example.test".to_owned()));
    assert!(err.to_string().contains(API_URL_ENV));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::from_base_url(Some("https://api.example.test/")).unwrap();
    assert_eq!(cfg.endpoint("/auth/login"), "https://api.example.test/auth/login");
    assert_eq!(cfg.endpoint("auth/me"), "https://api.example.test/auth/me");
}

#[test]
fn from_env_reads_api_url() {
    // Only this test touches the variable, so no cross-test env races.
    unsafe { std::env::set_var(API_URL_ENV, "http://127.0.0.1:9000/") };
    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
    unsafe { std::env::remove_var(API_URL_ENV) };
}
