use std::collections::HashMap;
use std::fmt;

use super::model::FlightRecord;
use super::stats::{mean_of, mean_price};
use crate::currency::{format_dual, round_amount};

// ---------------------------------------------------------------------------
// Insight – one ranked observation about the active view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    /// Nothing matches the current filters.
    NoData,
    /// Carrier with the lowest mean price, mean rounded to whole units.
    CheapestCarrier { carrier: String, mean_price: u64 },
    /// Absolute gap between the mean direct and mean connecting price.
    DirectConnectingGap { difference: u64 },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::NoData => write!(f, "No flights match the current filters."),
            Insight::CheapestCarrier {
                carrier,
                mean_price,
            } => write!(
                f,
                "{carrier} offers the lowest average fare: {}",
                format_dual(*mean_price)
            ),
            Insight::DirectConnectingGap { difference } => write!(
                f,
                "Average fare gap between direct and connecting flights: {}",
                format_dual(*difference)
            ),
        }
    }
}

/// Mean price per carrier, in order of first appearance in `view`.
pub fn carrier_means(view: &[&FlightRecord]) -> Vec<(String, f64)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, u64, usize)> = Vec::new();
    for r in view {
        let slot = *slots.entry(r.carrier()).or_insert_with(|| {
            groups.push((r.carrier(), 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += r.price_local();
        groups[slot].2 += 1;
    }
    groups
        .into_iter()
        .map(|(carrier, sum, count)| (carrier.to_string(), mean_of(sum, count)))
        .collect()
}

/// Derive the insights for `view`, in display order.
///
/// An empty view produces exactly one [`Insight::NoData`]. Carriers with
/// equal means keep their first-seen order, so the earliest wins a tie.
pub fn insights(view: &[&FlightRecord]) -> Vec<Insight> {
    if view.is_empty() {
        return vec![Insight::NoData];
    }

    let mut out = Vec::new();

    let mut ranked = carrier_means(view);
    // Stable: ties keep first-seen order.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((carrier, mean)) = ranked.into_iter().next() {
        out.push(Insight::CheapestCarrier {
            carrier,
            mean_price: round_amount(mean),
        });
    }

    let direct = mean_price(view.iter().copied().filter(|r| r.stop_class().is_direct()));
    let connecting = mean_price(view.iter().copied().filter(|r| !r.stop_class().is_direct()));
    if let (Some(direct), Some(connecting)) = (direct, connecting) {
        out.push(Insight::DirectConnectingGap {
            difference: round_amount((direct - connecting).abs()),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{flight, flight_with};
    use crate::data::model::{DepartureBucket, StopClass};

    #[test]
    fn test_empty_view_yields_single_no_data() {
        let lines: Vec<String> = insights(&[]).iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["No flights match the current filters.".to_string()]);
    }

    #[test]
    fn test_cheapest_carrier_by_mean() {
        let records = [
            flight("Vistara", 9000),
            flight("Indigo", 4000),
            flight("Indigo", 5000),
            flight("SpiceJet", 4600),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        assert_eq!(
            insights(&view)[0],
            Insight::CheapestCarrier {
                carrier: "Indigo".to_string(),
                mean_price: 4500,
            }
        );
    }

    #[test]
    fn test_carrier_tie_keeps_first_seen_group() {
        let records = [flight("A", 1000), flight("A", 3000), flight("B", 2000)];
        let view: Vec<&FlightRecord> = records.iter().collect();
        assert_eq!(
            insights(&view)[0],
            Insight::CheapestCarrier {
                carrier: "A".to_string(),
                mean_price: 2000,
            }
        );

        let reversed = [flight("B", 2000), flight("A", 1000), flight("A", 3000)];
        let view: Vec<&FlightRecord> = reversed.iter().collect();
        assert!(matches!(
            &insights(&view)[0],
            Insight::CheapestCarrier { carrier, .. } if carrier == "B"
        ));
    }

    #[test]
    fn test_all_direct_omits_gap_insight() {
        let records = [flight("A", 1000), flight("B", 2000)];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let result = insights(&view);
        assert_eq!(result.len(), 1);
        assert!(matches!(result[0], Insight::CheapestCarrier { .. }));
    }

    #[test]
    fn test_direct_connecting_gap() {
        let records = [
            flight_with("A", 3000, StopClass::Zero, DepartureBucket::Morning, 1),
            flight_with("A", 5000, StopClass::Zero, DepartureBucket::Morning, 1),
            flight_with("B", 7000, StopClass::One, DepartureBucket::Night, 1),
            flight_with("C", 8001, StopClass::TwoOrMore, DepartureBucket::Night, 1),
        ];
        let view: Vec<&FlightRecord> = records.iter().collect();
        let result = insights(&view);
        assert_eq!(result.len(), 2);
        // direct 4000, connecting 7500.5
        assert_eq!(result[1], Insight::DirectConnectingGap { difference: 3501 });
    }

    #[test]
    fn test_all_connecting_omits_gap_insight() {
        let records = [flight_with("A", 3000, StopClass::One, DepartureBucket::Morning, 1)];
        let view: Vec<&FlightRecord> = records.iter().collect();
        assert_eq!(insights(&view).len(), 1);
    }

    #[test]
    fn test_insight_text_is_dual_currency() {
        let line = Insight::CheapestCarrier {
            carrier: "Indigo".to_string(),
            mean_price: 10_000,
        }
        .to_string();
        assert!(line.starts_with("Indigo"));
        assert!(line.contains("₹10,000"));
        assert!(line.contains("€95"));
    }

    #[test]
    fn test_carrier_means_first_seen_order() {
        let records = [flight("B", 10), flight("A", 20), flight("B", 30)];
        let view: Vec<&FlightRecord> = records.iter().collect();
        assert_eq!(
            carrier_means(&view),
            vec![("B".to_string(), 20.0), ("A".to_string(), 20.0)]
        );
    }
}
