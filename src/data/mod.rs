//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  flights .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate rows → FlightDataset
//!   └──────────┘
//!        │
//!        ├──────────────▶ registry   distinct carriers / buckets / stops
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterState predicates → active view
//!   └──────────┘
//!        │
//!        ▼
//!   stats · insights · series   (pure reductions for the UI)
//! ```
//!
//! [`pipeline::FarePipeline`] owns the dataset and wires the stages together.

pub mod filter;
pub mod insights;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod series;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;
