use std::path::PathBuf;

use tabled::Table;

use crate::{
    config, error,
    types::PerformerTableRow,
    warning,
};

/// Prints the lineup without touching Spotify.
pub async fn performers(config_file: Option<PathBuf>, feed_url: Option<String>) {
    let source = super::performer_source(
        config_file,
        feed_url.unwrap_or_else(config::page_data_url),
        None,
    );
    let timeout = match config::http_timeout() {
        Ok(timeout) => timeout,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };
    let http = super::feed_client(timeout);
    let lineup = super::load_lineup(&http, &source, None).await;

    if lineup.names.is_empty() {
        warning!("The lineup is empty.");
        return;
    }

    let rows: Vec<PerformerTableRow> = lineup
        .names
        .into_iter()
        .enumerate()
        .map(|(i, name)| PerformerTableRow {
            position: i + 1,
            name,
        })
        .collect();

    println!("{}", Table::new(rows));
}
