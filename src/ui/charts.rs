use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoint,
    PlotPoints, Points, Polygon, Text,
};

use crate::color;
use crate::currency::{group_thousands, round_amount};
use crate::data::model::{DepartureBucket, FlightRecord};
use crate::data::series::{self, MeanPrice};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 280.0;
/// Above this many cells the heatmap drops its value labels.
const MAX_LABELLED_CELLS: usize = 60;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render all six charts for the visible records.
pub fn chart_grid(ui: &mut Ui, state: &AppState, view: &[&FlightRecord]) {
    chart_frame(ui, "Price vs. days until departure", |ui| {
        days_left_scatter(ui, state, view)
    });
    ui.columns(2, |cols| {
        chart_frame(&mut cols[0], "Average fare by airline", |ui| {
            carrier_bars(ui, state, view)
        });
        chart_frame(&mut cols[1], "Fare spread by stops", |ui| {
            stops_box_plot(ui, state, view)
        });
    });
    chart_frame(ui, "Average fare by airline and route", |ui| {
        route_heatmap(ui, view)
    });
    ui.columns(2, |cols| {
        chart_frame(&mut cols[0], "Average fare by departure time", |ui| {
            departure_line(ui, view)
        });
        chart_frame(&mut cols[1], "Price vs. flight duration", |ui| {
            duration_scatter(ui, state, view)
        });
    });
}

fn chart_frame(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong(title);
        body(ui);
    });
    ui.add_space(8.0);
}

/// Axis formatter that maps integer grid marks onto category labels.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let v = mark.value;
        if v.fract() != 0.0 || v < 0.0 {
            return String::new();
        }
        labels.get(v as usize).cloned().unwrap_or_default()
    }
}

fn price_label(mean: &MeanPrice) -> String {
    format!(
        "₹{} (€{}), {} flights",
        group_thousands(round_amount(mean.local)),
        group_thousands(round_amount(mean.converted)),
        mean.count
    )
}

// ---------------------------------------------------------------------------
// 1 · Price vs. days-left
// ---------------------------------------------------------------------------

fn days_left_scatter(ui: &mut Ui, state: &AppState, view: &[&FlightRecord]) {
    let groups = series::price_by_days_left(view);
    Plot::new("viz_days")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Days until departure")
        .y_axis_label("Price (₹)")
        .show(ui, |plot_ui| {
            for (carrier, points) in groups {
                let color = state.carrier_colors.color_for(&carrier);
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(carrier)
                        .color(color.gamma_multiply(0.6))
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 2 · Mean price per carrier
// ---------------------------------------------------------------------------

fn carrier_bars(ui: &mut Ui, state: &AppState, view: &[&FlightRecord]) {
    let means = series::mean_by_carrier(view);
    let labels: Vec<String> = means.iter().map(|(c, _)| c.clone()).collect();
    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, (carrier, mean))| {
            Bar::new(i as f64, mean.local)
                .name(format!("{carrier}: {}", price_label(mean)))
                .fill(state.carrier_colors.color_for(carrier))
                .width(0.7)
        })
        .collect();

    Plot::new("viz_airline")
        .height(CHART_HEIGHT)
        .y_axis_label("Average price (₹)")
        .x_axis_formatter(category_axis(labels))
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// 3 · Price spread per stop class
// ---------------------------------------------------------------------------

fn stops_box_plot(ui: &mut Ui, state: &AppState, view: &[&FlightRecord]) {
    let spreads = series::price_spread_by_stops(view);
    let labels: Vec<String> = spreads.iter().map(|(c, _)| c.label().to_string()).collect();

    Plot::new("viz_stops")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Price (₹)")
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            for (i, (class, b)) in spreads.into_iter().enumerate() {
                let color = state.stop_colors.color_for(class.label());
                let elem = BoxElem::new(
                    i as f64,
                    BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
                )
                .name(format!("{} ({} flights)", class.label(), b.count))
                .box_width(0.5)
                .whisker_width(0.3)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(class.label()));
            }
        });
}

// ---------------------------------------------------------------------------
// 4 · Carrier × route heatmap
// ---------------------------------------------------------------------------

fn route_heatmap(ui: &mut Ui, view: &[&FlightRecord]) {
    let heat = series::carrier_route_heatmap(view);
    let Some((lo, hi)) = heat.range() else {
        ui.label("No data");
        return;
    };
    let span = (hi - lo).max(f64::EPSILON);
    let label_cells = heat.cells.len() <= MAX_LABELLED_CELLS;

    Plot::new("viz_heatmap")
        .height(CHART_HEIGHT + 70.0)
        .x_axis_formatter(category_axis(heat.carriers.clone()))
        .y_axis_formatter(category_axis(heat.routes.clone()))
        .show_grid(false)
        .show(ui, |plot_ui| {
            for &(ci, ri, mean) in &heat.cells {
                let (x, y) = (ci as f64, ri as f64);
                let rect = vec![
                    [x - 0.5, y - 0.5],
                    [x + 0.5, y - 0.5],
                    [x + 0.5, y + 0.5],
                    [x - 0.5, y + 0.5],
                ];
                let fill = color::sequential((mean.local - lo) / span);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(rect))
                        .fill_color(fill)
                        .stroke(Stroke::new(0.5, Color32::from_black_alpha(60))),
                );
                if label_cells {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            group_thousands(round_amount(mean.local)),
                        )
                        .color(Color32::WHITE),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 5 · Mean price per departure bucket
// ---------------------------------------------------------------------------

fn departure_line(ui: &mut Ui, view: &[&FlightRecord]) {
    let means = series::mean_by_departure(view);
    let points: Vec<[f64; 2]> = means
        .iter()
        .map(|(b, m)| [b.position() as f64, m.local])
        .collect();
    let labels: Vec<String> = DepartureBucket::ALL
        .iter()
        .map(|b| b.label().to_string())
        .collect();
    let line_color = Color32::from_rgb(0xf4, 0x3f, 0x5e);

    Plot::new("viz_time")
        .height(CHART_HEIGHT)
        .y_axis_label("Average price (₹)")
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points))
                    .color(line_color)
                    .width(3.0),
            );
            for (b, m) in &means {
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[b.position() as f64, m.local]]))
                        .name(format!("{}: {}", b.label(), price_label(m)))
                        .color(line_color)
                        .radius(4.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 6 · Price vs. duration
// ---------------------------------------------------------------------------

fn duration_scatter(ui: &mut Ui, state: &AppState, view: &[&FlightRecord]) {
    let groups = series::price_by_duration(view);
    Plot::new("viz_duration")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Flight duration (h)")
        .y_axis_label("Price (₹)")
        .show(ui, |plot_ui| {
            for (class, points) in groups {
                let color = state.stop_colors.color_for(class.label());
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(class.label())
                        .color(color.gamma_multiply(0.6))
                        .filled(true)
                        .radius(2.5),
                );
            }
        });
}
