use std::collections::HashSet;

use festlist::lineup::SampleSize;
use festlist::lineup::sampling::sample;
use festlist::types::Track;
use festlist::FestlistError;
use rand::{SeedableRng, rngs::StdRng};

fn create_test_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track {
            id: format!("t{}", i),
            name: format!("Track {}", i),
            uri: format!("spotify:track:t{}", i),
        })
        .collect()
}

#[test]
fn test_sample_returns_all_tracks_in_order_when_size_covers_list() {
    let tracks = create_test_tracks(5);
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(sample(&tracks, SampleSize::new(5), &mut rng), tracks);
    assert_eq!(sample(&tracks, SampleSize::new(10), &mut rng), tracks);
}

#[test]
fn test_sample_three_of_five() {
    let tracks = create_test_tracks(5);
    let mut rng = StdRng::seed_from_u64(42);

    let sampled = sample(&tracks, SampleSize::new(3), &mut rng);

    assert_eq!(sampled.len(), 3);
    let unique: HashSet<&Track> = sampled.iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(sampled.iter().all(|t| tracks.contains(t)));
}

#[test]
fn test_sample_is_reproducible_with_same_seed() {
    let tracks = create_test_tracks(10);

    let first = sample(&tracks, SampleSize::new(4), &mut StdRng::seed_from_u64(7));
    let second = sample(&tracks, SampleSize::new(4), &mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);
}

#[test]
fn test_sample_zero_is_empty() {
    let tracks = create_test_tracks(5);
    let mut rng = StdRng::seed_from_u64(3);

    assert!(sample(&tracks, SampleSize::new(0), &mut rng).is_empty());
}

#[test]
fn test_sample_empty_list() {
    let mut rng = StdRng::seed_from_u64(3);

    assert!(sample::<Track, _>(&[], SampleSize::new(3), &mut rng).is_empty());
}

#[test]
fn test_sample_does_not_modify_input() {
    let tracks = create_test_tracks(6);
    let copy = tracks.clone();
    let mut rng = StdRng::seed_from_u64(9);

    let _ = sample(&tracks, SampleSize::new(2), &mut rng);
    assert_eq!(tracks, copy);
}

#[test]
fn test_sample_size_rejects_negative() {
    assert!(matches!(
        SampleSize::try_from(-1i64),
        Err(FestlistError::InvalidSampleSize(-1))
    ));
    assert_eq!(SampleSize::try_from(0i64).unwrap(), SampleSize::new(0));
    assert_eq!(SampleSize::default(), SampleSize::new(3));
}
