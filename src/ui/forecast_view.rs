use eframe::egui::{Color32, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::forecast::provider::HORIZON;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Forecast view – horizon table + full-sequence chart with confidence band
// ---------------------------------------------------------------------------

const FORECAST_LINE: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// Translucent fill for the confidence band.
fn band_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(0x1f, 0x77, 0xb4, 70)
}

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("Model Forecast (Next {HORIZON} Years)"));
    ui.add_space(4.0);

    if state.forecast.is_empty() {
        ui.label("No forecast available.");
        return;
    }

    ui.columns(2, |columns| {
        forecast_table(&mut columns[0], state);
        forecast_chart(&mut columns[1], state);
    });
}

/// Table of the forecast horizon: the last `HORIZON` points of the sequence.
fn forecast_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Forecast Table");
    let tail_start = state.forecast.len().saturating_sub(HORIZON);
    let tail = &state.forecast[tail_start..];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("Forecast");
            });
            header.col(|ui| {
                ui.strong("Lower Bound");
            });
            header.col(|ui| {
                ui.strong("Upper Bound");
            });
        })
        .body(|mut body| {
            for point in tail {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(point.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", point.yhat));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", point.lower));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", point.upper));
                    });
                });
            }
        });
}

/// Chart of the full sequence: confidence band, point-estimate line, and the
/// observed yearly means overlaid as points.
fn forecast_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Forecast Chart");

    // Band polygon: upper bound left→right, then lower bound right→left.
    let band: PlotPoints = state
        .forecast
        .iter()
        .map(|p| [f64::from(p.year), p.upper])
        .chain(
            state
                .forecast
                .iter()
                .rev()
                .map(|p| [f64::from(p.year), p.lower]),
        )
        .collect();

    let yhat: PlotPoints = state
        .forecast
        .iter()
        .map(|p| [f64::from(p.year), p.yhat])
        .collect();

    let observed: PlotPoints = state
        .observed_yearly_means()
        .iter()
        .filter_map(|g| Some([f64::from(g.key.year()?), g.mean]))
        .collect();

    Plot::new("forecast_chart")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Rate per 100,000")
        .height(420.0)
        .show(ui, |plot_ui| {
            plot_ui.polygon(
                Polygon::new(band)
                    .fill_color(band_fill())
                    .stroke(Stroke::NONE)
                    .name("Confidence band"),
            );
            plot_ui.line(Line::new(yhat).color(FORECAST_LINE).width(2.0).name("Forecast"));
            plot_ui.points(
                Points::new(observed)
                    .color(Color32::BLACK)
                    .radius(2.5)
                    .name("Observed"),
            );
        });
}
