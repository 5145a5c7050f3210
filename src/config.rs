//! Configuration management for festlist.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory. It is read exactly once into a
//! [`Config`] value that the command layer passes down by reference:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the optional keys

use std::{env, path::PathBuf, time::Duration};

use crate::{FestlistError, Res};

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_BEARER_TOKEN: &str = "SPOTIFY_BEARER_TOKEN";
pub const SPOTIFY_PLAYLIST_ID: &str = "SPOTIFY_PLAYLIST_ID";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SPOTIFY_MARKET: &str = "SPOTIFY_MARKET";
pub const FEST_PAGE_DATA_URL: &str = "FEST_PAGE_DATA_URL";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_PAGE_DATA_URL: &str = "https://thefestfl.com/page-data/bands/page-data.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SAMPLE_SIZE: i64 = 3;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives in:
/// - Linux: `~/.local/share/festlist/.env`
/// - macOS: `~/Library/Application Support/festlist/.env`
/// - Windows: `%LOCALAPPDATA%/festlist/.env`
///
/// A missing file is not an error; variables already present in the process
/// environment are never overwritten.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file exists but cannot be
/// parsed.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| FestlistError::InvalidConfig {
            key: path.display().to_string(),
            value: e.to_string(),
        })?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("festlist/.env");
    path
}

/// Runtime configuration, built once at startup.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub bearer_token: String,
    pub playlist_id: String,
    pub api_url: String,
    pub market: String,
    pub page_data_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("bearer_token", &"<redacted>")
            .field("playlist_id", &self.playlist_id)
            .field("api_url", &self.api_url)
            .field("market", &self.market)
            .field("page_data_url", &self.page_data_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// [`FestlistError::MissingConfig`] names every required variable that is
    /// unset or empty. [`FestlistError::InvalidConfig`] is returned for an
    /// optional value that cannot be parsed.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = [
            SPOTIFY_CLIENT_ID,
            SPOTIFY_CLIENT_SECRET,
            SPOTIFY_BEARER_TOKEN,
            SPOTIFY_PLAYLIST_ID,
        ];
        let missing: Vec<String> = required
            .into_iter()
            .filter(|key| value(*key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(FestlistError::MissingConfig(missing));
        }

        let timeout = timeout_from(&value)?;

        Ok(Self {
            client_id: value(SPOTIFY_CLIENT_ID).unwrap_or_default(),
            client_secret: value(SPOTIFY_CLIENT_SECRET).unwrap_or_default(),
            bearer_token: value(SPOTIFY_BEARER_TOKEN).unwrap_or_default(),
            playlist_id: value(SPOTIFY_PLAYLIST_ID).unwrap_or_default(),
            api_url: value(SPOTIFY_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            market: value(SPOTIFY_MARKET).unwrap_or_else(|| DEFAULT_MARKET.to_string()),
            page_data_url: page_data_url_from(&value),
            timeout,
        })
    }
}

/// Returns the performer feed URL, which does not need the Spotify settings.
pub fn page_data_url() -> String {
    page_data_url_from(&|key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty()))
}

/// Returns the request timeout for commands that run without the Spotify
/// settings. Honours `HTTP_TIMEOUT_SECS` like [`Config::from_env`].
pub fn http_timeout() -> Res<Duration> {
    http_timeout_from(|key| env::var(key).ok())
}

/// Reads `HTTP_TIMEOUT_SECS` from an arbitrary key lookup, defaulting to
/// [`DEFAULT_TIMEOUT_SECS`]. Zero and non-numeric values are rejected.
pub fn http_timeout_from<F>(lookup: F) -> Res<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    timeout_from(&|key: &str| lookup(key).filter(|v| !v.trim().is_empty()))
}

fn timeout_from<F>(value: &F) -> Res<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match value(HTTP_TIMEOUT_SECS) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| FestlistError::InvalidConfig {
                key: HTTP_TIMEOUT_SECS.to_string(),
                value: raw.clone(),
            }),
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

fn page_data_url_from<F>(value: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    value(FEST_PAGE_DATA_URL).unwrap_or_else(|| DEFAULT_PAGE_DATA_URL.to_string())
}
