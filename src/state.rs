use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::FilterState;
use crate::data::insights::Insight;
use crate::data::model::{FlightRecord, StopClass};
use crate::data::pipeline::FarePipeline;
use crate::data::stats::Stats;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Flights,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset and filter options (None until a load succeeds).
    pub pipeline: Option<FarePipeline>,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Summary of the visible records.
    pub stats: Stats,

    /// Insights for the visible records, in display order.
    pub insights: Vec<Insight>,

    /// Colours per carrier.
    pub carrier_colors: ColorMap,

    /// Colours per stop class.
    pub stop_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the UI is still waiting for a dataset.
    pub loading: bool,

    pub tab: Tab,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let filters = FilterState::with_max_days_left(config.default_max_days_left);
        Self {
            config,
            pipeline: None,
            filters,
            visible_indices: Vec::new(),
            stats: Stats::default(),
            insights: Vec::new(),
            carrier_colors: ColorMap::default(),
            stop_colors: ColorMap::default(),
            status_message: None,
            loading: true,
            tab: Tab::default(),
        }
    }

    /// Ingest a newly loaded pipeline, reset filters and recompute.
    ///
    /// The initial view applies the configured defaults (`default_max_days_left`),
    /// the same filter state Reset restores.
    pub fn set_pipeline(&mut self, pipeline: FarePipeline) {
        if pipeline.dataset().is_empty() {
            log::warn!("Dataset contains no valid flights");
        }
        self.carrier_colors = ColorMap::new(&pipeline.options().carriers);
        let stop_labels: Vec<&str> = StopClass::ALL.iter().map(|s| s.label()).collect();
        self.stop_colors = ColorMap::new(&stop_labels);

        self.pipeline = Some(pipeline);
        self.filters = self.default_filters();
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Record a failed load. Whatever was loaded before stays untouched.
    pub fn set_load_error(&mut self, message: String) {
        self.status_message = Some(message);
    }

    fn default_filters(&self) -> FilterState {
        FilterState::with_max_days_left(self.config.default_max_days_left)
    }

    /// Recompute the active view, stats and insights after a filter change.
    pub fn refilter(&mut self) {
        let Some(pipeline) = &self.pipeline else {
            return;
        };
        self.visible_indices = pipeline.filter_indices(&self.filters);
        let view = pipeline.dataset().select(&self.visible_indices);
        self.stats = pipeline.summarize(&view);
        self.insights = pipeline.insights(&view);
        log::debug!(
            "filters {:?} → {} visible of {}",
            self.filters,
            self.visible_indices.len(),
            pipeline.dataset().len()
        );
    }

    /// Apply a new filter snapshot and recompute.
    pub fn set_filters(&mut self, filters: FilterState) {
        if filters != self.filters {
            self.filters = filters;
            self.refilter();
        }
    }

    /// Restore the configured default filters and recompute.
    pub fn reset_filters(&mut self) {
        self.filters = self.default_filters();
        self.refilter();
    }

    /// Records passing the current filters, in dataset order.
    pub fn visible_records(&self) -> Vec<&FlightRecord> {
        self.pipeline
            .as_ref()
            .map(|p| p.dataset().select(&self.visible_indices))
            .unwrap_or_default()
    }

    /// Upper end of the days-left slider.
    pub fn days_left_limit(&self) -> u32 {
        let data_max = self
            .pipeline
            .as_ref()
            .map(|p| p.dataset().max_days_left())
            .unwrap_or(0);
        data_max.max(self.config.default_max_days_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{dataset, flight, flight_with};
    use crate::data::model::DepartureBucket;
    use crate::data::stats;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_pipeline(FarePipeline::from_dataset(dataset(vec![
            flight("A", 1000),
            flight_with("B", 2000, StopClass::One, DepartureBucket::Night, 70),
            flight("A", 3000),
        ])));
        state
    }

    #[test]
    fn test_starts_in_loading_state() {
        let state = AppState::new(DashboardConfig::default());
        assert!(state.loading);
        assert!(state.pipeline.is_none());
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn test_load_error_keeps_loading_state() {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_load_error("Error: cannot read delhi.csv".to_string());
        assert!(state.loading);
        assert!(state.pipeline.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_initial_render_uses_default_filters() {
        let state = loaded_state();
        assert!(!state.loading);
        // record with 70 days left is outside the default bound of 50
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(state.stats.count, 2);
        assert_eq!(state.days_left_limit(), 70);
    }

    #[test]
    fn test_initial_view_honours_configured_bound() {
        let config = DashboardConfig {
            default_max_days_left: 80,
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(config);
        state.set_pipeline(FarePipeline::from_dataset(dataset(vec![
            flight("A", 1000),
            flight_with("B", 2000, StopClass::One, DepartureBucket::Night, 70),
        ])));
        assert_eq!(state.filters.max_days_left, 80);
        assert_eq!(state.visible_indices, vec![0, 1]);

        state.set_filters(FilterState::default());
        assert_eq!(state.visible_indices, vec![0]);
        state.reset_filters();
        assert_eq!(state.filters.max_days_left, 80);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn test_stats_agree_with_visible_records() {
        let mut state = loaded_state();
        for carrier in [None, Some("A"), Some("B")] {
            state.set_filters(FilterState {
                carrier: carrier.map(str::to_string),
                ..FilterState::unrestricted()
            });
            let visible = state.visible_records();
            assert_eq!(state.stats.count, visible.len());
            assert_eq!(state.stats, stats::summarize(&visible));
        }
    }

    #[test]
    fn test_filter_change_and_reset() {
        let mut state = loaded_state();
        state.set_filters(FilterState {
            carrier: Some("B".to_string()),
            ..state.filters.clone()
        });
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.insights, vec![Insight::NoData]);
        assert_eq!(state.stats, Stats::default());

        state.reset_filters();
        assert_eq!(state.filters, FilterState::default());
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(state.insights.len(), 1);
    }
}
