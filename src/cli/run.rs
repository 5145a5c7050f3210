use std::path::PathBuf;

use tabled::Table;

use crate::{
    config::Config,
    error, info,
    lineup::{self, SampleSize},
    spotify::SpotifyClient,
    success,
    types::{ArtistSelection, RunSummary, SelectionTableRow},
    warning,
};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_file: Option<PathBuf>,
    pub feed_url: Option<String>,
    pub sample_size: Option<SampleSize>,
    pub update_playlist: bool,
    pub seed: Option<u64>,
}

pub async fn run(config: &Config, opts: RunOptions) {
    let client = match SpotifyClient::new(config) {
        Ok(client) => client,
        Err(e) => error!("Cannot build Spotify client. Err: {}", e),
    };

    let source = super::performer_source(
        opts.config_file,
        opts.feed_url.unwrap_or_else(|| config.page_data_url.clone()),
        opts.sample_size,
    );
    let http = super::feed_client(config.timeout);
    let festival = super::load_lineup(&http, &source, opts.sample_size).await;

    if festival.names.is_empty() {
        warning!("No performers found, nothing to do.");
        return;
    }

    let playlist_id = if opts.update_playlist {
        Some(config.playlist_id.as_str())
    } else {
        warning!("Dry run: the playlist will not be changed. Pass --update-playlist to insert tracks.");
        None
    };

    info!(
        "Resolving {} performers, sampling {} tracks each",
        festival.names.len(),
        festival.sample_size
    );

    let mut rng = super::make_rng(opts.seed);
    let summary = lineup::build_playlist(&client, &festival, playlist_id, &mut rng, report)
        .await
        .unwrap_or_else(|e| error!("Run aborted. Err: {}", e));

    print_summary(&summary);

    if playlist_id.is_some() {
        success!(
            "Playlist loaded with {} tracks from {} artists",
            summary.added_uris(),
            summary.resolved_count()
        );
    } else {
        success!(
            "Resolved {} of {} performers",
            summary.resolved_count(),
            summary.selections.len()
        );
    }
}

fn report(selection: &ArtistSelection) {
    if selection.artist.is_resolved() {
        info!(
            "{} -> {} ({} tracks)",
            selection.performer,
            selection.artist.name(),
            selection.sampled.len()
        );
    } else {
        warning!("No matching artist found for {}", selection.performer);
    }
}

fn print_summary(summary: &RunSummary) {
    let rows: Vec<SelectionTableRow> = summary
        .selections
        .iter()
        .map(|s| SelectionTableRow {
            performer: s.performer.clone(),
            artist: if s.artist.is_resolved() {
                s.artist.name().to_string()
            } else {
                "-".to_string()
            },
            status: match (s.artist.is_resolved(), s.added_to_playlist) {
                (false, _) => "unresolved".to_string(),
                (true, true) => "added".to_string(),
                (true, false) => "resolved".to_string(),
            },
            tracks: s
                .sampled
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    println!("{}", Table::new(rows));

    let unresolved: Vec<&str> = summary.unresolved().collect();
    if !unresolved.is_empty() {
        warning!("Unresolved performers: {}", unresolved.join(", "));
    }
}
