use std::collections::BTreeSet;

use super::model::{DepartureBucket, FlightDataset, StopClass};

// ---------------------------------------------------------------------------
// Option lists for the three categorical filters
// ---------------------------------------------------------------------------

/// Choices offered by the carrier / time-of-day / stops selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct carriers, lexicographically sorted.
    pub carriers: Vec<String>,
    /// Fixed canonical day order, independent of the data.
    pub departure_buckets: Vec<DepartureBucket>,
    /// Distinct stop classes present in the data, sorted by raw key
    /// (`one`, `two_or_more`, `zero`).
    pub stop_classes: Vec<StopClass>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &FlightDataset) -> Self {
        let carriers: BTreeSet<&str> = dataset.records().iter().map(|r| r.carrier()).collect();

        let present: BTreeSet<StopClass> =
            dataset.records().iter().map(|r| r.stop_class()).collect();
        let mut stop_classes: Vec<StopClass> = present.into_iter().collect();
        stop_classes.sort_by_key(|s| s.key());

        FilterOptions {
            carriers: carriers.into_iter().map(str::to_string).collect(),
            departure_buckets: DepartureBucket::ALL.to_vec(),
            stop_classes,
        }
    }
}
