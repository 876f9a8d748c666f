use super::model::{DepartureBucket, FlightDataset, FlightRecord, StopClass};

/// `max_days_left` restored by a reset.
pub const DEFAULT_MAX_DAYS_LEFT: u32 = 50;

// ---------------------------------------------------------------------------
// Filter predicate: one selection per dimension
// ---------------------------------------------------------------------------

/// Current filter selections. `None` means "all" for a categorical dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub carrier: Option<String>,
    pub departure_bucket: Option<DepartureBucket>,
    pub stop_class: Option<StopClass>,
    /// Inclusive upper bound on `days_left`.
    pub max_days_left: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_max_days_left(DEFAULT_MAX_DAYS_LEFT)
    }
}

impl FilterState {
    /// "All" on every categorical dimension with the given day bound.
    pub fn with_max_days_left(max_days_left: u32) -> Self {
        FilterState {
            carrier: None,
            departure_bucket: None,
            stop_class: None,
            max_days_left,
        }
    }

    /// A state that every record satisfies.
    pub fn unrestricted() -> Self {
        Self::with_max_days_left(u32::MAX)
    }

    /// Whether `record` passes all four conditions.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.carrier
            .as_deref()
            .is_none_or(|c| record.carrier() == c)
            && self
                .departure_bucket
                .is_none_or(|b| record.departure_bucket() == b)
            && self.stop_class.is_none_or(|s| record.stop_class() == s)
            && record.days_left() <= self.max_days_left
    }
}

/// Return indices of records that pass the filters, in dataset order.
///
/// Always evaluated against the full dataset, never a previous result.
pub fn filtered_indices(dataset: &FlightDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| filters.matches(r))
        .map(|(i, _)| i)
        .collect()
}
