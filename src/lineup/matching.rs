use tracing::info;

use crate::types::Artist;

/// Genre tag accepted as-is by the genre gate.
pub const SKA_GENRE: &str = "ska";
/// Any genre tag containing this fragment passes the genre gate.
pub const PUNK_FRAGMENT: &str = "punk";

/// Lower-cases `name` and removes every occurrence of `"the "`, wherever it
/// appears. Removal repeats until none is left, so the result is stable under
/// a second normalization.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.to_lowercase();
    while normalized.contains("the ") {
        normalized = normalized.replace("the ", "");
    }
    normalized
}

pub fn has_matching_name(performer: &str, candidate: &str) -> bool {
    info!(
        "checking artist name {} with spotify name {}",
        performer, candidate
    );
    normalize_name(performer) == normalize_name(candidate)
}

/// Genre gate: exactly `ska`, or anything with `punk` in it. Case sensitive.
pub fn has_expected_genre(performer: &str, genres: &[String]) -> bool {
    info!("checking {} with genres {:?}", performer, genres);
    genres
        .iter()
        .any(|genre| genre == SKA_GENRE || genre.contains(PUNK_FRAGMENT))
}

/// Returns the first candidate, in search order, whose name matches the
/// performer and whose genres pass the gate.
///
/// The genre gate is only checked for candidates whose name matched.
pub fn closest_match<'a>(performer: &str, candidates: &'a [Artist]) -> Option<&'a Artist> {
    candidates.iter().find(|artist| {
        has_matching_name(performer, &artist.name) && has_expected_genre(performer, &artist.genres)
    })
}
