use std::path::Path;

use super::filter::{self, FilterState};
use super::insights::{self, Insight};
use super::loader::{self, LoadError};
use super::model::{FlightDataset, FlightRecord};
use super::registry::FilterOptions;
use super::stats::{self, Stats};

// ---------------------------------------------------------------------------
// FarePipeline – owns the dataset, exposes load → filter → summarize
// ---------------------------------------------------------------------------

/// Single owner of the loaded dataset and its filter options.
///
/// Written once by [`FarePipeline::load`], read-only afterwards.
#[derive(Debug, Clone)]
pub struct FarePipeline {
    dataset: FlightDataset,
    options: FilterOptions,
}

impl FarePipeline {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        loader::load_file(path).map(Self::from_dataset)
    }

    pub fn from_dataset(dataset: FlightDataset) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        FarePipeline { dataset, options }
    }

    pub fn dataset(&self) -> &FlightDataset {
        &self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Indices of the active view in dataset order; `dataset().select` resolves them.
    pub fn filter_indices(&self, filters: &FilterState) -> Vec<usize> {
        filter::filtered_indices(&self.dataset, filters)
    }

    pub fn summarize(&self, view: &[&FlightRecord]) -> Stats {
        stats::summarize(view)
    }

    pub fn insights(&self, view: &[&FlightRecord]) -> Vec<Insight> {
        insights::insights(view)
    }
}
