//! # Lineup Module
//!
//! Turns a festival lineup into playlist tracks:
//!
//! ```text
//! performer names -> resolved artists -> top tracks -> samples -> playlist
//! ```
//!
//! - [`performers`] reads the lineup from the page-data feed or a local file
//! - [`matching`] picks the Spotify artist for a performer name
//! - [`sampling`] draws the per-artist track sample
//! - [`build_playlist`] runs the whole chain, one performer at a time
//!
//! A performer without a matching artist is reported and skipped. Transport
//! errors abort the run.

pub mod matching;
pub mod performers;
pub mod sampling;

use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    FestlistError, Res,
    config::DEFAULT_SAMPLE_SIZE,
    spotify::ArtistCatalog,
    types::{Artist, ArtistSelection, Lineup, ResolvedArtist, RunSummary},
};

/// Number of top tracks taken per artist. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleSize(usize);

impl SampleSize {
    pub const fn new(size: usize) -> Self {
        Self(size)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(DEFAULT_SAMPLE_SIZE as usize)
    }
}

impl TryFrom<i64> for SampleSize {
    type Error = FestlistError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| FestlistError::InvalidSampleSize(raw))
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Searches the catalog for `performer` and resolves it against the results.
pub async fn resolve<C: ArtistCatalog>(catalog: &C, performer: &str) -> Res<ResolvedArtist> {
    let candidates = catalog.search_artists(performer).await?;
    resolve_candidates(catalog, performer, &candidates).await
}

/// Picks the matching candidate and loads its top tracks.
///
/// No match is not an error: the result is unresolved, keeps `performer`
/// unchanged and has no tracks.
pub async fn resolve_candidates<C: ArtistCatalog>(
    catalog: &C,
    performer: &str,
    candidates: &[Artist],
) -> Res<ResolvedArtist> {
    match matching::closest_match(performer, candidates) {
        Some(artist) => {
            debug!("match artist name: {}", artist.name);
            let tracks = catalog.top_tracks(&artist.id).await?;
            Ok(ResolvedArtist::resolved(artist, tracks))
        }
        None => {
            warn!("no matching artist found for {}", performer);
            Ok(ResolvedArtist::unresolved(performer))
        }
    }
}

/// Runs the lineup through resolve, sample and (optionally) playlist update.
///
/// Performers are handled strictly in order. With `playlist_id` set, each
/// resolved artist's non-empty sample is inserted at the top of the playlist
/// in its own request. `on_selection` is called once per performer after it
/// has been handled.
///
/// # Errors
///
/// The first transport or API error stops the run and is returned.
pub async fn build_playlist<C, R, F>(
    catalog: &C,
    lineup: &Lineup,
    playlist_id: Option<&str>,
    rng: &mut R,
    mut on_selection: F,
) -> Res<RunSummary>
where
    C: ArtistCatalog,
    R: Rng + ?Sized,
    F: FnMut(&ArtistSelection),
{
    let mut summary = RunSummary::default();

    for performer in &lineup.names {
        let artist = resolve(catalog, performer).await?;
        let sampled = sampling::sample(artist.top_tracks(), lineup.sample_size, rng);

        let mut added_to_playlist = false;
        if let Some(playlist_id) = playlist_id {
            if artist.is_resolved() && !sampled.is_empty() {
                let uris: Vec<String> = sampled.iter().map(|t| t.uri.clone()).collect();
                catalog.add_tracks(playlist_id, &uris).await?;
                added_to_playlist = true;
            }
        }

        let selection = ArtistSelection {
            performer: performer.clone(),
            artist,
            sampled,
            added_to_playlist,
        };
        on_selection(&selection);
        summary.selections.push(selection);
    }

    Ok(summary)
}
