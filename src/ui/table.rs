use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::currency::format_dual;
use crate::data::model::FlightRecord;

const HEADERS: [&str; 8] = [
    "Airline",
    "From",
    "To",
    "Departure",
    "Stops",
    "Duration (h)",
    "Days left",
    "Price",
];

/// Table of the visible flights, one row per record.
pub fn flights_table(ui: &mut Ui, view: &[&FlightRecord]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(80.0), HEADERS.len() - 1)
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(22.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.len(), |mut row| {
                let r = view[row.index()];
                row.col(|ui| {
                    ui.label(r.carrier());
                });
                row.col(|ui| {
                    ui.label(r.origin());
                });
                row.col(|ui| {
                    ui.label(r.destination());
                });
                row.col(|ui| {
                    ui.label(r.departure_bucket().label());
                });
                row.col(|ui| {
                    ui.label(r.stop_class().label());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", r.duration_hours()));
                });
                row.col(|ui| {
                    ui.label(r.days_left().to_string());
                });
                row.col(|ui| {
                    ui.label(format_dual(r.price_local()));
                });
            });
        });
}
