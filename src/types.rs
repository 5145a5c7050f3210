use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::lineup::SampleSize;

/// An artist record as returned by the Spotify search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    #[serde(default)]
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Outcome of matching one performer name against the Spotify catalog.
///
/// An unresolved artist keeps the performer name as given, carries neither id
/// nor uri and never holds tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtist {
    id: Option<String>,
    name: String,
    uri: Option<String>,
    top_tracks: Vec<Track>,
}

impl ResolvedArtist {
    pub fn resolved(artist: &Artist, top_tracks: Vec<Track>) -> Self {
        Self {
            id: Some(artist.id.clone()),
            name: artist.name.clone(),
            uri: Some(artist.uri.clone()),
            top_tracks,
        }
    }

    pub fn unresolved(performer: &str) -> Self {
        Self {
            id: None,
            name: performer.to_string(),
            uri: None,
            top_tracks: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.id.is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn top_tracks(&self) -> &[Track] {
        &self.top_tracks
    }
}

/// Performer list together with the per-artist sample size.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    pub sample_size: SampleSize,
    pub names: Vec<String>,
}

/// Shape of the local lineup file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsConfig {
    pub track_sample_size: i64,
    #[serde(default)]
    pub artist_names: Vec<String>,
}

/// Gatsby page-data document published by the festival site. Every level is
/// optional so a changed or partial document degrades to an empty lineup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub result: Option<PageResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageResult {
    #[serde(default)]
    pub data: Option<PageQueryData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQueryData {
    #[serde(default, rename = "allFestPerformers")]
    pub all_fest_performers: Option<PerformerConnection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformerConnection {
    /// Kept raw so each edge is decoded on its own.
    #[serde(default)]
    pub edges: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformerEdge {
    #[serde(default)]
    pub node: Option<PerformerNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformerNode {
    #[serde(default)]
    pub title: Option<RenderedTitle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderedTitle {
    #[serde(default)]
    pub rendered: Option<String>,
}

/// Per-performer result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSelection {
    pub performer: String,
    pub artist: ResolvedArtist,
    pub sampled: Vec<Track>,
    pub added_to_playlist: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub selections: Vec<ArtistSelection>,
}

impl RunSummary {
    pub fn resolved_count(&self) -> usize {
        self.selections
            .iter()
            .filter(|s| s.artist.is_resolved())
            .count()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.selections
            .iter()
            .filter(|s| !s.artist.is_resolved())
            .map(|s| s.performer.as_str())
    }

    pub fn added_uris(&self) -> usize {
        self.selections
            .iter()
            .filter(|s| s.added_to_playlist)
            .map(|s| s.sampled.len())
            .sum()
    }
}

#[derive(Tabled)]
pub struct SelectionTableRow {
    pub performer: String,
    pub artist: String,
    pub status: String,
    pub tracks: String,
}

#[derive(Tabled)]
pub struct PerformerTableRow {
    pub position: usize,
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub uri: String,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    pub name: String,
    pub genres: String,
    pub selected: String,
}
