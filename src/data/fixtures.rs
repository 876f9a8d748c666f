//! Record builders shared by the data-layer unit tests.

use super::model::{DepartureBucket, FlightDataset, FlightRecord, StopClass};

pub(crate) fn flight(carrier: &str, price: u64) -> FlightRecord {
    flight_with(carrier, price, StopClass::Zero, DepartureBucket::Morning, 10)
}

pub(crate) fn flight_with(
    carrier: &str,
    price: u64,
    stops: StopClass,
    bucket: DepartureBucket,
    days_left: u32,
) -> FlightRecord {
    FlightRecord::new(carrier, "Delhi", "Mumbai", bucket, stops, 2.5, days_left, price)
        .expect("fixture record must be valid")
}

pub(crate) fn dataset(records: Vec<FlightRecord>) -> FlightDataset {
    FlightDataset::new(records, 0)
}
