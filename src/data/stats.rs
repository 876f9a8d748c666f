use super::model::FlightRecord;

/// Summary of local prices over an active view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub count: usize,
    /// Arithmetic mean of `price_local`, 0 for an empty view.
    pub mean: f64,
    pub min: u64,
    pub max: u64,
}

impl Stats {
    /// Mean rounded to whole currency units for display.
    pub fn mean_rounded(&self) -> u64 {
        crate::currency::round_amount(self.mean)
    }
}

/// Compute [`Stats`] over `view`. Empty views yield all zeros.
pub fn summarize(view: &[&FlightRecord]) -> Stats {
    if view.is_empty() {
        return Stats::default();
    }
    let prices = view.iter().map(|r| r.price_local());
    let total: u64 = prices.clone().sum();
    Stats {
        count: view.len(),
        mean: mean_of(total, view.len()),
        min: prices.clone().min().unwrap_or(0),
        max: prices.max().unwrap_or(0),
    }
}

/// Mean local price of the given records, `None` when there are none.
pub fn mean_price<'a>(records: impl IntoIterator<Item = &'a FlightRecord>) -> Option<f64> {
    let (sum, count) = records
        .into_iter()
        .fold((0u64, 0usize), |(s, n), r| (s + r.price_local(), n + 1));
    (count > 0).then(|| mean_of(sum, count))
}

pub(crate) fn mean_of(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
