use eframe::egui::{self, Color32, RichText, Ui};

use crate::currency::{format_dual, group_thousands};
use crate::data::insights::Insight;
use crate::state::AppState;

/// Four stat cards: count, mean, min, max.
pub fn stat_cards(ui: &mut Ui, state: &AppState) {
    let stats = &state.stats;
    let cards = [
        ("Flights", group_thousands(stats.count as u64)),
        ("Average fare", format_dual(stats.mean_rounded())),
        ("Lowest fare", format_dual(stats.min)),
        ("Highest fare", format_dual(stats.max)),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value).size(18.0).strong());
            });
        }
    });
}

/// The insight list under the stat cards.
pub fn insights(ui: &mut Ui, state: &AppState) {
    ui.strong("Insights");
    for insight in &state.insights {
        let color = match insight {
            Insight::NoData => Color32::from_rgb(0xef, 0x44, 0x44),
            Insight::CheapestCarrier { .. } => Color32::from_rgb(0xf5, 0x9e, 0x0b),
            Insight::DirectConnectingGap { .. } => Color32::from_rgb(0x63, 0x66, 0xf1),
        };
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("●").color(color));
            ui.label(insight.to_string());
        });
    }
}
