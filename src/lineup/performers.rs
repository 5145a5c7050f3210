use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{info, warn};

use crate::{
    Res,
    lineup::SampleSize,
    types::{ArtistsConfig, Lineup, PageData, PerformerEdge},
    utils,
};

/// Where the performer names come from. Both variants produce the same
/// [`Lineup`] and can be swapped freely.
#[derive(Debug, Clone, PartialEq)]
pub enum PerformerSource {
    /// The festival site's page-data feed, fetched without authentication.
    PageData { url: String, sample_size: SampleSize },
    /// A local `{"track_sample_size": .., "artist_names": [..]}` file.
    ConfigFile(PathBuf),
}

impl PerformerSource {
    pub async fn read(&self, http: &Client) -> Res<Lineup> {
        match self {
            PerformerSource::PageData { url, sample_size } => {
                fetch_page_data(http, url, *sample_size).await
            }
            PerformerSource::ConfigFile(path) => read_config_file(path).await,
        }
    }

    /// Feed URL or file path, for progress output.
    pub fn describe(&self) -> String {
        match self {
            PerformerSource::PageData { url, .. } => url.clone(),
            PerformerSource::ConfigFile(path) => path.display().to_string(),
        }
    }
}

/// Fetches the page-data feed and extracts the performer names.
pub async fn fetch_page_data(http: &Client, url: &str, sample_size: SampleSize) -> Res<Lineup> {
    let response = http.get(url).send().await.map_err(|err| {
        tracing::error!("An http error occurred: {}", err);
        err
    })?;

    let response = response.error_for_status().map_err(|err| {
        tracing::error!("An http error occurred: {}", err);
        err
    })?;

    let body = response.bytes().await?;
    parse_page_data(&body, sample_size)
}

/// Parses a page-data document.
///
/// The body must be JSON. Any part of the
/// `result.data.allFestPerformers.edges[].node.title.rendered` path that is
/// missing or has an unexpected shape yields an empty lineup instead of an
/// error. Edges are decoded one by one; an edge without a title or with an
/// unexpected shape is skipped. Names are HTML-entity decoded.
pub fn parse_page_data(body: &[u8], sample_size: SampleSize) -> Res<Lineup> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let data = serde_json::from_value::<PageData>(value).unwrap_or_else(|err| {
        warn!("unexpected page data shape, using an empty lineup: {}", err);
        PageData::default()
    });

    let edges = data
        .result
        .and_then(|r| r.data)
        .and_then(|d| d.all_fest_performers)
        .and_then(|p| p.edges)
        .unwrap_or_default();

    let mut names = Vec::with_capacity(edges.len());
    for (index, raw_edge) in edges.into_iter().enumerate() {
        let edge = match serde_json::from_value::<PerformerEdge>(raw_edge) {
            Ok(edge) => edge,
            Err(err) => {
                warn!("performer edge {} is malformed, skipping: {}", index, err);
                continue;
            }
        };

        match edge.node.and_then(|n| n.title).and_then(|t| t.rendered) {
            Some(rendered) => names.push(utils::decode_html_entities(&rendered)),
            None => warn!("performer edge {} has no rendered title, skipping", index),
        }
    }

    info!("read {} performers from page data", names.len());
    Ok(Lineup { sample_size, names })
}

/// Reads a lineup from a local JSON file. Names are used as written.
pub async fn read_config_file(path: &Path) -> Res<Lineup> {
    let content = async_fs::read_to_string(path).await?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Res<Lineup> {
    let config: ArtistsConfig = serde_json::from_str(content)?;
    Ok(Lineup {
        sample_size: SampleSize::try_from(config.track_sample_size)?,
        names: config.artist_names,
    })
}
