use std::collections::HashMap;
use std::time::Duration;

use festlist::FestlistError;
use festlist::config::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn required() -> Vec<(&'static str, &'static str)> {
    vec![
        (SPOTIFY_CLIENT_ID, "client"),
        (SPOTIFY_CLIENT_SECRET, "secret"),
        (SPOTIFY_BEARER_TOKEN, "token"),
        (SPOTIFY_PLAYLIST_ID, "playlist"),
    ]
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup(&required())).unwrap();

    assert_eq!(config.bearer_token, "token");
    assert_eq!(config.playlist_id, "playlist");
    assert_eq!(config.api_url, DEFAULT_SPOTIFY_API_URL);
    assert_eq!(config.market, "US");
    assert_eq!(config.page_data_url, DEFAULT_PAGE_DATA_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_config_optional_overrides() {
    let mut pairs = required();
    pairs.push((SPOTIFY_API_URL, "http://localhost:9000/v1/"));
    pairs.push((SPOTIFY_MARKET, "DE"));
    pairs.push((HTTP_TIMEOUT_SECS, "5"));

    let config = Config::from_lookup(lookup(&pairs)).unwrap();

    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.market, "DE");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn test_config_reports_every_missing_variable() {
    let result = Config::from_lookup(lookup(&[(SPOTIFY_CLIENT_ID, "client"), (SPOTIFY_BEARER_TOKEN, "  ")]));

    match result {
        Err(FestlistError::MissingConfig(missing)) => assert_eq!(
            missing,
            vec![SPOTIFY_CLIENT_SECRET, SPOTIFY_BEARER_TOKEN, SPOTIFY_PLAYLIST_ID]
        ),
        other => panic!("expected MissingConfig, got {:?}", other),
    }
}

#[test]
fn test_config_rejects_invalid_timeout() {
    let mut pairs = required();
    pairs.push((HTTP_TIMEOUT_SECS, "0"));
    assert!(matches!(
        Config::from_lookup(lookup(&pairs)),
        Err(FestlistError::InvalidConfig { .. })
    ));
}

#[test]
fn test_config_debug_redacts_secrets() {
    let config = Config::from_lookup(lookup(&required())).unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("secret\""));
    assert!(!debug.contains("\"token\""));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_http_timeout_without_spotify_settings() {
    assert_eq!(http_timeout_from(lookup(&[])).unwrap(), Duration::from_secs(30));
    assert_eq!(
        http_timeout_from(lookup(&[(HTTP_TIMEOUT_SECS, " 7 ")])).unwrap(),
        Duration::from_secs(7)
    );
    assert_eq!(
        http_timeout_from(lookup(&[(HTTP_TIMEOUT_SECS, "")])).unwrap(),
        Duration::from_secs(30)
    );
}

#[test]
fn test_http_timeout_rejects_invalid_values() {
    for raw in ["0", "-5", "soon"] {
        match http_timeout_from(lookup(&[(HTTP_TIMEOUT_SECS, raw)])) {
            Err(FestlistError::InvalidConfig { key, value }) => {
                assert_eq!(key, HTTP_TIMEOUT_SECS);
                assert_eq!(value, raw);
            }
            other => panic!("expected InvalidConfig for {:?}, got {:?}", raw, other),
        }
    }
}
