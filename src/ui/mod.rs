//! egui presentation: draws plain data from [`crate::state::AppState`].

pub mod charts;
pub mod panels;
pub mod summary;
pub mod table;
