use tabled::Table;

use crate::{
    config::Config,
    error, info,
    lineup::{self, SampleSize},
    spotify::{ArtistCatalog, SpotifyClient},
    success,
    types::{CandidateTableRow, TrackTableRow},
    utils, warning,
};

/// Resolves a single performer name and shows which candidate was picked
/// and which tracks would be sampled.
pub async fn resolve(
    config: &Config,
    name: String,
    sample_size: Option<SampleSize>,
    seed: Option<u64>,
) {
    let client = match SpotifyClient::new(config) {
        Ok(client) => client,
        Err(e) => error!("Cannot build Spotify client. Err: {}", e),
    };

    let pb = utils::spinner(&format!("Searching Spotify for {}...", name));
    let candidates = client.search_artists(&name).await;
    pb.finish_and_clear();
    let candidates = match candidates {
        Ok(c) => c,
        Err(e) => error!("Artist search failed. Err: {}", e),
    };

    let artist = match lineup::resolve_candidates(&client, &name, &candidates).await {
        Ok(artist) => artist,
        Err(e) => error!("Failed to fetch top tracks. Err: {}", e),
    };

    let selected = artist.id();
    let rows: Vec<CandidateTableRow> = candidates
        .iter()
        .map(|a| CandidateTableRow {
            name: a.name.clone(),
            genres: a.genres.join(","),
            selected: if Some(a.id.as_str()) == selected {
                "yes".to_string()
            } else {
                String::new()
            },
        })
        .collect();

    if rows.is_empty() {
        warning!("Spotify returned no artists for {}", name);
    } else {
        println!("{}", Table::new(rows));
    }

    if !artist.is_resolved() {
        warning!("No matching artist found for {}", name);
        return;
    }

    success!(
        "{} resolved to {} ({})",
        name,
        artist.name(),
        artist.uri().unwrap_or_default()
    );

    let mut rng = super::make_rng(seed);
    let sampled = lineup::sampling::sample(
        artist.top_tracks(),
        sample_size.unwrap_or_default(),
        &mut rng,
    );
    info!(
        "Sampled {} of {} top tracks",
        sampled.len(),
        artist.top_tracks().len()
    );

    let rows: Vec<TrackTableRow> = sampled
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name,
            uri: t.uri,
        })
        .collect();
    println!("{}", Table::new(rows));
}
