use rand::{Rng, seq::IndexedRandom};

use crate::lineup::SampleSize;

/// Picks up to `size` items from `items`.
///
/// When `size` covers the whole slice the items come back unchanged and in
/// order. Otherwise exactly `size` distinct positions are drawn uniformly
/// with `rng`; the order of the drawn items is unspecified.
pub fn sample<T, R>(items: &[T], size: SampleSize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let size = size.get();
    if size >= items.len() {
        return items.to_vec();
    }

    items.choose_multiple(rng, size).cloned().collect()
}
