use super::*;

#[test]
fn missing_or_blank_base_url_uses_local_default() {
    assert_eq!(BackendConfig::from_base_url(None), Ok(BackendConfig::default()));
    assert_eq!(BackendConfig::from_base_url(Some("   ")), Ok(BackendConfig::default()));
    assert_eq!(BackendConfig::default().base_url, DEFAULT_BACKEND_URL);
    assert_eq!(BackendConfig::default().request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
}

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = BackendConfig::from_base_url(Some("https://meetup.example.com//")).unwrap();
    assert_eq!(cfg.base_url, "https://meetup.example.com");
    assert_eq!(cfg.register_url(), "https://meetup.example.com/api/register");
}

#[test]
fn non_http_base_url_is_rejected() {
    let err = BackendConfig::from_base_url(Some("localhost:8080")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("localhost:8080".into()));
    assert!(err.to_string().contains("http://"));
}

#[test]
fn endpoint_urls_join_base_and_path() {
    let cfg = BackendConfig::default();
    assert_eq!(cfg.register_url(), "http://localhost:8080/api/register");
    assert_eq!(cfg.registrations_url(), "http://localhost:8080/api/registrations");
    assert_eq!(cfg.health_url(), "http://localhost:8080/health");
}

#[test]
fn with_timeout_overrides_default() {
    let cfg = BackendConfig::default().with_timeout(Duration::from_secs(3));
    assert_eq!(cfg.request_timeout, Duration::from_secs(3));
}
