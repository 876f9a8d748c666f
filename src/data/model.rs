use std::fmt;

use serde::Deserialize;

use crate::currency;

// ---------------------------------------------------------------------------
// DepartureBucket – time-of-day slot of a departure
// ---------------------------------------------------------------------------

/// Time-of-day bucket as encoded in the source CSV (`Early_Morning`, ...).
///
/// The derived `Ord` follows the canonical day order, which is also the
/// display order used by the filter widget and the time-of-day chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum DepartureBucket {
    #[serde(rename = "Early_Morning")]
    EarlyMorning,
    #[serde(rename = "Morning")]
    Morning,
    #[serde(rename = "Afternoon")]
    Afternoon,
    #[serde(rename = "Evening")]
    Evening,
    #[serde(rename = "Night")]
    Night,
    #[serde(rename = "Late_Night")]
    LateNight,
}

impl DepartureBucket {
    /// All buckets in canonical day order.
    pub const ALL: [DepartureBucket; 6] = [
        DepartureBucket::EarlyMorning,
        DepartureBucket::Morning,
        DepartureBucket::Afternoon,
        DepartureBucket::Evening,
        DepartureBucket::Night,
        DepartureBucket::LateNight,
    ];

    /// Human readable label for widgets and axes.
    pub fn label(self) -> &'static str {
        match self {
            DepartureBucket::EarlyMorning => "Early morning",
            DepartureBucket::Morning => "Morning",
            DepartureBucket::Afternoon => "Afternoon",
            DepartureBucket::Evening => "Evening",
            DepartureBucket::Night => "Night",
            DepartureBucket::LateNight => "Late night",
        }
    }

    /// Position in the canonical day order.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DepartureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// StopClass – number of connections
// ---------------------------------------------------------------------------

/// Number of stops as encoded in the source CSV (`zero`, `one`, `two_or_more`).
///
/// The derived `Ord` is the physical order (direct first). The raw key order
/// (`one` < `two_or_more` < `zero`) is a different ordering, see [`StopClass::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopClass {
    Zero,
    One,
    TwoOrMore,
}

impl StopClass {
    /// All classes in physical order.
    pub const ALL: [StopClass; 3] = [StopClass::Zero, StopClass::One, StopClass::TwoOrMore];

    pub fn key(self) -> &'static str {
        match self {
            StopClass::Zero => "zero",
            StopClass::One => "one",
            StopClass::TwoOrMore => "two_or_more",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StopClass::Zero => "Direct",
            StopClass::One => "1 stop",
            StopClass::TwoOrMore => "2+ stops",
        }
    }

    pub fn is_direct(self) -> bool {
        self == StopClass::Zero
    }
}

impl fmt::Display for StopClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FlightRecord – one row of the fare table
// ---------------------------------------------------------------------------

/// A single flight offering. Immutable once built by [`FlightRecord::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    carrier: String,
    origin: String,
    destination: String,
    route: String,
    departure_bucket: DepartureBucket,
    stop_class: StopClass,
    duration_hours: f64,
    days_left: u32,
    price_local: u64,
    price_converted: u64,
}

impl FlightRecord {
    /// Build a record, deriving `route` and `price_converted`.
    ///
    /// Returns `None` for an empty carrier or a zero price, the two
    /// conditions under which a source row is discarded.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        carrier: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_bucket: DepartureBucket,
        stop_class: StopClass,
        duration_hours: f64,
        days_left: u32,
        price_local: u64,
    ) -> Option<Self> {
        let carrier = carrier.into();
        if carrier.trim().is_empty() || price_local == 0 {
            return None;
        }
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return None;
        }
        let origin = origin.into();
        let destination = destination.into();
        let route = format!("{origin} → {destination}");
        Some(FlightRecord {
            carrier,
            origin,
            destination,
            route,
            departure_bucket,
            stop_class,
            duration_hours,
            days_left,
            price_local,
            price_converted: currency::convert(price_local),
        })
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// `origin → destination`
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn departure_bucket(&self) -> DepartureBucket {
        self.departure_bucket
    }

    pub fn stop_class(&self) -> StopClass {
        self.stop_class
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    pub fn price_local(&self) -> u64 {
        self.price_local
    }

    pub fn price_converted(&self) -> u64 {
        self.price_converted
    }
}

// ---------------------------------------------------------------------------
// FlightDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records that survived loading, in file order.
#[derive(Debug, Clone, Default)]
pub struct FlightDataset {
    records: Vec<FlightRecord>,
    /// Source rows discarded during loading.
    dropped_rows: usize,
}

impl FlightDataset {
    pub fn new(records: Vec<FlightRecord>, dropped_rows: usize) -> Self {
        FlightDataset {
            records,
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Resolve a list of indices (as produced by the filter) into records.
    pub fn select(&self, indices: &[usize]) -> Vec<&FlightRecord> {
        indices.iter().filter_map(|&i| self.records.get(i)).collect()
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Largest `days_left` in the dataset, 0 when empty.
    pub fn max_days_left(&self) -> u32 {
        self.records.iter().map(|r| r.days_left).max().unwrap_or(0)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_route_and_converted_price() {
        let r = FlightRecord::new(
            "Vistara",
            "Delhi",
            "Mumbai",
            DepartureBucket::Morning,
            StopClass::Zero,
            2.25,
            10,
            10_000,
        )
        .unwrap();
        assert_eq!(r.route(), "Delhi → Mumbai");
        assert_eq!(r.price_converted(), 95);
    }

    #[test]
    fn test_record_rejects_empty_carrier_and_zero_price() {
        let empty = FlightRecord::new(
            "  ",
            "Delhi",
            "Mumbai",
            DepartureBucket::Night,
            StopClass::One,
            3.0,
            5,
            5000,
        );
        assert!(empty.is_none());

        let free = FlightRecord::new(
            "Indigo",
            "Delhi",
            "Mumbai",
            DepartureBucket::Night,
            StopClass::One,
            3.0,
            5,
            0,
        );
        assert!(free.is_none());
    }

    #[test]
    fn test_stop_class_key_order_differs_from_physical_order() {
        let mut by_key = StopClass::ALL.to_vec();
        by_key.sort_by_key(|s| s.key());
        assert_eq!(by_key, vec![StopClass::One, StopClass::TwoOrMore, StopClass::Zero]);

        let mut physical = by_key.clone();
        physical.sort();
        assert_eq!(physical, StopClass::ALL.to_vec());
    }

    #[test]
    fn test_bucket_positions_follow_day_order() {
        for (i, b) in DepartureBucket::ALL.iter().enumerate() {
            assert_eq!(b.position(), i);
        }
    }

    #[test]
    fn test_dataset_max_days_left() {
        assert_eq!(FlightDataset::default().max_days_left(), 0);
        let rec = |days| {
            FlightRecord::new(
                "A",
                "X",
                "Y",
                DepartureBucket::Evening,
                StopClass::Zero,
                1.0,
                days,
                100,
            )
            .unwrap()
        };
        let ds = FlightDataset::new(vec![rec(3), rec(41), rec(7)], 2);
        assert_eq!(ds.max_days_left(), 41);
        assert_eq!(ds.dropped_rows(), 2);
        assert_eq!(ds.select(&[2, 0]).len(), 2);
    }
}
