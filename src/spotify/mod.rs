//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API endpoints festlist needs:
//!
//! - `GET /search?type=artist` - artist candidates for a performer name
//! - `GET /artists/{id}/top-tracks` - top tracks for a resolved artist
//! - `POST /playlists/{id}/tracks` - insert tracks into the target playlist
//!
//! Every request carries the bearer token from [`Config`]. The token is never
//! refreshed, requests are not retried and nothing is paginated. Transport and
//! HTTP status failures are logged at error level and returned to the caller.
//!
//! The pipeline in [`crate::lineup`] only talks to the [`ArtistCatalog`] trait,
//! which [`SpotifyClient`] implements against the real API.

pub mod artists;
pub mod playlist;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    Res,
    config::Config,
    types::{Artist, Track},
};

/// The catalog operations the lineup pipeline depends on.
pub trait ArtistCatalog: Send + Sync {
    /// Artist candidates for a free-text query, in the order the service
    /// ranks them.
    fn search_artists(&self, query: &str) -> impl Future<Output = Res<Vec<Artist>>> + Send;

    /// Top tracks for an artist id. No track collection means no tracks.
    fn top_tracks(&self, artist_id: &str) -> impl Future<Output = Res<Vec<Track>>> + Send;

    /// Inserts `uris` at the top of the playlist.
    fn add_tracks(&self, playlist_id: &str, uris: &[String])
    -> impl Future<Output = Res<()>> + Send;
}

#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
    market: String,
}

impl SpotifyClient {
    /// Builds a client with the configured timeout applied to every request.
    pub fn new(config: &Config) -> Res<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(
            http,
            &config.api_url,
            &config.bearer_token,
            &config.market,
        ))
    }

    pub fn with_client(http: Client, api_url: &str, token: &str, market: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            market: market.to_string(),
        }
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url, path = path)
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.token)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.token)
    }

    /// Sends `request` and decodes a JSON body, logging any failure.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Res<T> {
        let response = request.send().await.map_err(|err| {
            tracing::error!("An http error occurred: {}", err);
            err
        })?;

        let response = response.error_for_status().map_err(|err| {
            tracing::error!("An http error occurred: {}", err);
            err
        })?;

        let json = response.json::<T>().await.map_err(|err| {
            tracing::error!("Unreadable response body: {}", err);
            err
        })?;
        Ok(json)
    }
}

impl ArtistCatalog for SpotifyClient {
    async fn search_artists(&self, query: &str) -> Res<Vec<Artist>> {
        artists::search_artists(self, query).await
    }

    async fn top_tracks(&self, artist_id: &str) -> Res<Vec<Track>> {
        artists::get_top_tracks(self, artist_id).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        playlist::add_tracks(self, playlist_id, uris).await.map(|_| ())
    }
}
