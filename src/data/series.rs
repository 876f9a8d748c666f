//! Chart-ready aggregations over an active view.
//!
//! Everything here is plain data; `ui::charts` only draws it.

use std::collections::BTreeMap;

use super::model::{DepartureBucket, FlightRecord, StopClass};
use super::stats::mean_of;

/// A mean price in both currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanPrice {
    pub local: f64,
    pub converted: f64,
    pub count: usize,
}

#[derive(Default)]
struct Accumulator {
    local: u64,
    converted: u64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, r: &FlightRecord) {
        self.local += r.price_local();
        self.converted += r.price_converted();
        self.count += 1;
    }

    fn finish(&self) -> MeanPrice {
        MeanPrice {
            local: mean_of(self.local, self.count),
            converted: mean_of(self.converted, self.count),
            count: self.count,
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter series
// ---------------------------------------------------------------------------

/// (x, price) points for one group.
pub type ScatterGroup<K> = (K, Vec<[f64; 2]>);

/// Price against days-left, one group per carrier (carrier-sorted).
pub fn price_by_days_left(view: &[&FlightRecord]) -> Vec<ScatterGroup<String>> {
    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for r in view {
        groups
            .entry(r.carrier())
            .or_default()
            .push([r.days_left() as f64, r.price_local() as f64]);
    }
    groups
        .into_iter()
        .map(|(carrier, points)| (carrier.to_string(), points))
        .collect()
}

/// Price against flight duration, one group per stop class (physical order).
pub fn price_by_duration(view: &[&FlightRecord]) -> Vec<ScatterGroup<StopClass>> {
    let mut groups: BTreeMap<StopClass, Vec<[f64; 2]>> = BTreeMap::new();
    for r in view {
        groups
            .entry(r.stop_class())
            .or_default()
            .push([r.duration_hours(), r.price_local() as f64]);
    }
    groups.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Mean-price series
// ---------------------------------------------------------------------------

/// Mean price per carrier, most expensive first.
pub fn mean_by_carrier(view: &[&FlightRecord]) -> Vec<(String, MeanPrice)> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for r in view {
        groups.entry(r.carrier()).or_default().push(r);
    }
    let mut out: Vec<(String, MeanPrice)> = groups
        .into_iter()
        .map(|(c, acc)| (c.to_string(), acc.finish()))
        .collect();
    out.sort_by(|a, b| b.1.local.total_cmp(&a.1.local));
    out
}

/// Mean price per departure bucket present in `view`, in day order.
pub fn mean_by_departure(view: &[&FlightRecord]) -> Vec<(DepartureBucket, MeanPrice)> {
    let mut groups: BTreeMap<DepartureBucket, Accumulator> = BTreeMap::new();
    for r in view {
        groups.entry(r.departure_bucket()).or_default().push(r);
    }
    groups.into_iter().map(|(b, acc)| (b, acc.finish())).collect()
}

/// Mean prices on the carrier × route grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heatmap {
    pub carriers: Vec<String>,
    pub routes: Vec<String>,
    /// `(carrier index, route index, mean)` for non-empty cells only.
    pub cells: Vec<(usize, usize, MeanPrice)>,
}

impl Heatmap {
    /// Smallest and largest cell mean, `None` without cells.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.cells.iter().fold(None, |acc, (_, _, m)| match acc {
            None => Some((m.local, m.local)),
            Some((lo, hi)) => Some((lo.min(m.local), hi.max(m.local))),
        })
    }
}

pub fn carrier_route_heatmap(view: &[&FlightRecord]) -> Heatmap {
    let mut grid: BTreeMap<(&str, &str), Accumulator> = BTreeMap::new();
    for r in view {
        grid.entry((r.carrier(), r.route())).or_default().push(r);
    }

    let carriers: Vec<&str> = {
        let mut v: Vec<&str> = grid.keys().map(|(c, _)| *c).collect();
        v.dedup();
        v
    };
    let mut routes: Vec<&str> = grid.keys().map(|(_, r)| *r).collect();
    routes.sort_unstable();
    routes.dedup();

    let cells = grid
        .iter()
        .filter_map(|((c, r), acc)| {
            let ci = carriers.binary_search(c).ok()?;
            let ri = routes.binary_search(r).ok()?;
            Some((ci, ri, acc.finish()))
        })
        .collect();

    Heatmap {
        carriers: carriers.into_iter().map(str::to_string).collect(),
        routes: routes.into_iter().map(str::to_string).collect(),
        cells,
    }
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey whiskers (1.5 × IQR).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub count: usize,
}

const WHISKER_EXTENT: f64 = 1.5;

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - WHISKER_EXTENT * iqr, q3 + WHISKER_EXTENT * iqr);

    let lower_whisker = sorted.iter().copied().find(|v| *v >= lo_fence).unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= hi_fence)
        .unwrap_or(q3);

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        count: sorted.len(),
    })
}

/// Price distribution per stop class present in `view`, in physical order.
pub fn price_spread_by_stops(view: &[&FlightRecord]) -> Vec<(StopClass, BoxSummary)> {
    StopClass::ALL
        .iter()
        .filter_map(|&class| {
            let prices: Vec<f64> = view
                .iter()
                .filter(|r| r.stop_class() == class)
                .map(|r| r.price_local() as f64)
                .collect();
            box_summary(&prices).map(|b| (class, b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::flight_with;

    fn rec(carrier: &str, price: u64, stops: StopClass, bucket: DepartureBucket) -> FlightRecord {
        flight_with(carrier, price, stops, bucket, 7)
    }

    #[test]
    fn test_mean_by_carrier_sorted_descending() {
        let records = [
            rec("A", 1000, StopClass::Zero, DepartureBucket::Morning),
            rec("B", 5000, StopClass::Zero, DepartureBucket::Morning),
            rec("A", 3000, StopClass::Zero, DepartureBucket::Morning),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let means = mean_by_carrier(&view);
        assert_eq!(means[0].0, "B");
        assert_eq!(means[1].0, "A");
        assert_eq!(means[1].1.local, 2000.0);
        assert_eq!(means[1].1.count, 2);
    }

    #[test]
    fn test_mean_by_departure_in_day_order() {
        let records = [
            rec("A", 1000, StopClass::Zero, DepartureBucket::LateNight),
            rec("A", 3000, StopClass::Zero, DepartureBucket::EarlyMorning),
            rec("A", 5000, StopClass::Zero, DepartureBucket::Afternoon),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let buckets: Vec<DepartureBucket> =
            mean_by_departure(&view).into_iter().map(|(b, _)| b).collect();
        assert_eq!(
            buckets,
            vec![
                DepartureBucket::EarlyMorning,
                DepartureBucket::Afternoon,
                DepartureBucket::LateNight
            ]
        );
    }

    #[test]
    fn test_box_summary_quartiles_and_whiskers() {
        let b = box_summary(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(b.q1, 2.0);
        assert_eq!(b.median, 3.0);
        assert_eq!(b.q3, 4.0);
        assert_eq!(b.lower_whisker, 1.0);
        // 100 lies beyond q3 + 1.5 * iqr = 7
        assert_eq!(b.upper_whisker, 4.0);
        assert!(box_summary(&[]).is_none());

        let single = box_summary(&[42.0]).unwrap();
        assert_eq!(single.median, 42.0);
        assert_eq!(single.upper_whisker, 42.0);
    }

    #[test]
    fn test_price_spread_in_physical_order() {
        let records = [
            rec("A", 9000, StopClass::TwoOrMore, DepartureBucket::Night),
            rec("A", 3000, StopClass::Zero, DepartureBucket::Night),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let classes: Vec<StopClass> =
            price_spread_by_stops(&view).into_iter().map(|(c, _)| c).collect();
        assert_eq!(classes, vec![StopClass::Zero, StopClass::TwoOrMore]);
    }

    #[test]
    fn test_heatmap_cells() {
        let mut records = vec![
            rec("B", 1000, StopClass::Zero, DepartureBucket::Night),
            rec("A", 3000, StopClass::Zero, DepartureBucket::Night),
            rec("A", 5000, StopClass::Zero, DepartureBucket::Night),
        ];
        records.push(
            FlightRecord::new(
                "A",
                "Delhi",
                "Chennai",
                DepartureBucket::Night,
                StopClass::One,
                4.0,
                3,
                8000,
            )
            .unwrap(),
        );
        let view: Vec<&FlightRecord> = records.iter().collect();
        let heat = carrier_route_heatmap(&view);
        assert_eq!(heat.carriers, vec!["A", "B"]);
        assert_eq!(heat.routes, vec!["Delhi → Chennai", "Delhi → Mumbai"]);
        assert_eq!(heat.cells.len(), 3);
        let (_, _, a_mumbai) = heat
            .cells
            .iter()
            .find(|(c, r, _)| *c == 0 && *r == 1)
            .copied()
            .unwrap();
        assert_eq!(a_mumbai.local, 4000.0);
        assert_eq!(heat.range(), Some((1000.0, 8000.0)));
        assert_eq!(carrier_route_heatmap(&[]).range(), None);
    }

    #[test]
    fn test_scatter_groups() {
        let records = [
            rec("B", 1000, StopClass::One, DepartureBucket::Night),
            rec("A", 2000, StopClass::Zero, DepartureBucket::Night),
            rec("B", 3000, StopClass::Zero, DepartureBucket::Night),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let by_carrier = price_by_days_left(&view);
        assert_eq!(by_carrier.len(), 2);
        assert_eq!(by_carrier[0].0, "A");
        assert_eq!(by_carrier[1].1, vec![[7.0, 1000.0], [7.0, 3000.0]]);

        let by_stops = price_by_duration(&view);
        assert_eq!(by_stops[0].0, StopClass::Zero);
        assert_eq!(by_stops[0].1.len(), 2);
    }
}
