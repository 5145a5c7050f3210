//! # CLI Module
//!
//! Command implementations for festlist. Each command handles user
//! interaction (spinners, tables, colored status lines) and delegates the
//! actual work to [`crate::lineup`] and [`crate::spotify`].
//!
//! - [`run`] - full pipeline: lineup, resolve, sample, optional playlist update
//! - [`performers`] - print the lineup only; needs no Spotify configuration
//! - [`resolve`] - resolve a single performer name and show the decision
//!
//! Fatal errors end the process through the [`error!`](crate::error!) macro.
//!
//! ```bash
//! festlist performers
//! festlist resolve "The Interrupters"
//! festlist run --sample-size 2            # dry run
//! festlist run --update-playlist --seed 7
//! ```

mod performers;
mod resolve;
mod run;

pub use performers::performers;
pub use resolve::resolve;
pub use run::{RunOptions, run};

use std::{path::PathBuf, time::Duration};

use rand::{SeedableRng, rngs::StdRng};
use reqwest::Client;

use crate::{
    error,
    lineup::{SampleSize, performers::PerformerSource},
    success,
    types::Lineup,
    utils,
};

/// Selects the lineup source: a local file wins over the feed.
pub(crate) fn performer_source(
    config_file: Option<PathBuf>,
    feed_url: String,
    sample_size: Option<SampleSize>,
) -> PerformerSource {
    match config_file {
        Some(path) => PerformerSource::ConfigFile(path),
        None => PerformerSource::PageData {
            url: feed_url,
            sample_size: sample_size.unwrap_or_default(),
        },
    }
}

pub(crate) fn feed_client(timeout: Duration) -> Client {
    match Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => error!("Cannot build HTTP client. Err: {}", e),
    }
}

/// Reads the lineup behind a spinner; `sample_size` overrides the source.
pub(crate) async fn load_lineup(
    http: &Client,
    source: &PerformerSource,
    sample_size: Option<SampleSize>,
) -> Lineup {
    let pb = utils::spinner(&format!("Reading lineup from {}...", source.describe()));
    let result = source.read(http).await;
    pb.finish_and_clear();

    let mut lineup = match result {
        Ok(lineup) => lineup,
        Err(e) => error!("Failed to read lineup from {}. Err: {}", source.describe(), e),
    };

    if let Some(size) = sample_size {
        lineup.sample_size = size;
    }

    success!("Read {} performers", lineup.names.len());
    lineup
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
