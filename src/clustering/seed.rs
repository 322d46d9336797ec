//! Density-based seed selection.

use super::WorkingSet;
use crate::distance::haversine_km;

/// Picks the working-set index of the next trip's seed.
///
/// Each of the first `seed_sample_size` unassigned orders is scored by how
/// many orders in the first `neighbor_sample_size` unassigned orders lie
/// within `radius_km` of it (itself excluded). The highest score wins; ties
/// go to the lowest ID.
///
/// Returns `None` if the working set is empty.
pub fn select_seed(
    set: &WorkingSet<'_>,
    seed_sample_size: usize,
    neighbor_sample_size: usize,
    radius_km: f64,
) -> Option<usize> {
    let candidates = set.sample(seed_sample_size);
    let neighbors = set.sample(neighbor_sample_size);

    let mut best: Option<(usize, usize)> = None;
    for &c in &candidates {
        let here = set.order(c).location();
        let count = neighbors
            .iter()
            .filter(|&&n| n != c && haversine_km(here, set.order(n).location()) <= radius_km)
            .count();
        // candidates are in ascending ID order, so strict > keeps the lowest ID on ties
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((c, count));
        }
    }

    best.map(|(idx, _)| idx)
}
