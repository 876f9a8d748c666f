use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::pipeline::FarePipeline;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(pipeline) = &state.pipeline else {
        ui.label("No dataset loaded.");
        return;
    };

    // Edit a snapshot; the state only sees the finished selection.
    let options = pipeline.options().clone();
    let limit = state.days_left_limit();
    let mut filters = state.filters.clone();

    ui.strong("Airline");
    egui::ComboBox::from_id_salt("filter_airline")
        .selected_text(filters.carrier.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut filters.carrier, None, "All");
            for carrier in &options.carriers {
                ui.selectable_value(&mut filters.carrier, Some(carrier.clone()), carrier.as_str());
            }
        });
    ui.add_space(6.0);

    ui.strong("Departure time");
    egui::ComboBox::from_id_salt("filter_time")
        .selected_text(filters.departure_bucket.map_or("All", |b| b.label()))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut filters.departure_bucket, None, "All");
            for &bucket in &options.departure_buckets {
                ui.selectable_value(&mut filters.departure_bucket, Some(bucket), bucket.label());
            }
        });
    ui.add_space(6.0);

    ui.strong("Stops");
    egui::ComboBox::from_id_salt("filter_stops")
        .selected_text(filters.stop_class.map_or("All", |s| s.label()))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut filters.stop_class, None, "All");
            for &stop in &options.stop_classes {
                ui.selectable_value(&mut filters.stop_class, Some(stop), stop.label());
            }
        });
    ui.add_space(6.0);

    ui.strong("Days until departure");
    ui.add(egui::Slider::new(&mut filters.max_days_left, 0..=limit).text("max"));
    ui.add_space(10.0);

    if ui.button("Reset filters").clicked() {
        state.reset_filters();
    } else {
        state.set_filters(filters);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Overview, "Overview");
        ui.selectable_value(&mut state.tab, Tab::Flights, "Flights");

        ui.separator();

        if let Some(p) = &state.pipeline {
            ui.label(format!(
                "{} flights loaded, {} visible",
                p.dataset().len(),
                state.visible_indices.len()
            ));
            if p.dataset().dropped_rows() > 0 {
                ui.label(
                    RichText::new(format!("({} invalid rows skipped)", p.dataset().dropped_rows()))
                        .weak(),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open flight fares")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into `state`. A failure is logged and shown, never retried.
pub fn load_into(state: &mut AppState, path: &Path) {
    match FarePipeline::load(path) {
        Ok(pipeline) => {
            log::info!(
                "Loaded {} flights from {} ({} rows dropped)",
                pipeline.dataset().len(),
                path.display(),
                pipeline.dataset().dropped_rows()
            );
            state.set_pipeline(pipeline);
        }
        Err(e) => {
            let e = anyhow::Error::new(e).context(format!("loading {}", path.display()));
            log::error!("Failed to load file: {e:#}");
            state.set_load_error(format!("Error: {e:#}"));
        }
    }
}
