use moka::sync::Cache;
use once_cell::sync::Lazy;

use crate::analytics::summary::{DerivedStatistics, summary_statistics};
use crate::data::Dataset;

/// Revision -> summary. Capacity is tiny; a session only ever sees a handful
/// of dataset revisions.
static SUMMARY_CACHE: Lazy<Cache<u64, DerivedStatistics>> =
    Lazy::new(|| Cache::builder().max_capacity(64).build());

/// Memoized `summary_statistics`, keyed on the dataset revision. A reloaded
/// dataset carries a fresh revision, so a stale entry can never be served for
/// it.
pub fn summary_for(dataset: &Dataset) -> DerivedStatistics {
    SUMMARY_CACHE.get_with(dataset.revision, || {
        summary_statistics(&dataset.attendance)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_dataset;

    #[test]
    fn memoized_summary_matches_direct_computation() {
        let dataset = load_dataset().unwrap();
        let direct = summary_statistics(&dataset.attendance);
        assert_eq!(summary_for(&dataset), direct);
        // Second call hits the cache and must be bit-identical.
        assert_eq!(summary_for(&dataset), direct);
    }

    #[test]
    fn distinct_revisions_are_distinct_entries() {
        let first = load_dataset().unwrap();
        let second = load_dataset().unwrap();
        assert_ne!(first.revision, second.revision);
        assert_eq!(summary_for(&first), summary_for(&second));
    }
}
