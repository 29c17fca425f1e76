use eframe::egui::{self, Color32, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::TREND_LINE;
use crate::data::aggregate::GroupMean;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trends view – cascading selectors, yearly line chart, matching table
// ---------------------------------------------------------------------------

const WARNING: Color32 = Color32::from_rgb(0xb4, 0x8a, 0x00);

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtered Rate Trends by Demographic");
    ui.add_space(4.0);

    // Clone the option lists so we can mutate the selections inside the
    // combo closures.
    let ages = state.dataset.ages.clone();
    let labels = state.dataset.labels.clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Age group");
        egui::ComboBox::from_id_salt("trend_age")
            .selected_text(&state.trend.age)
            .show_ui(ui, |ui: &mut Ui| {
                for age in &ages {
                    if ui
                        .selectable_label(state.trend.age == *age, age)
                        .clicked()
                    {
                        state.trend.age = age.clone();
                    }
                }
            });

        ui.add_space(12.0);

        ui.label("Demographic group");
        egui::ComboBox::from_id_salt("trend_label")
            .selected_text(&state.trend.label)
            .show_ui(ui, |ui: &mut Ui| {
                for label in &labels {
                    if ui
                        .selectable_label(state.trend.label == *label, label)
                        .clicked()
                    {
                        state.trend.label = label.clone();
                    }
                }
            });
    });

    ui.add_space(6.0);

    let series = state.trend_series();
    if series.is_empty() {
        ui.colored_label(WARNING, "No data available for this combination.");
        return;
    }

    ui.strong(format!(
        "{} | {} trend over time",
        state.trend.age, state.trend.label
    ));
    ui.add_space(4.0);

    ui.columns(2, |columns| {
        trend_chart(&mut columns[0], &series);
        trend_table(&mut columns[1], &series);
    });
}

fn trend_chart(ui: &mut Ui, series: &[GroupMean]) {
    let points: Vec<[f64; 2]> = series
        .iter()
        .filter_map(|g| Some([f64::from(g.key.year()?), g.mean]))
        .collect();

    Plot::new("trend_chart")
        .x_axis_label("Year")
        .y_axis_label("Average Suicide Rate")
        .height(400.0)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(TREND_LINE)
                    .width(2.0),
            );
            // Markers on every yearly value.
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(TREND_LINE)
                    .radius(3.0),
            );
        });
}

fn trend_table(ui: &mut Ui, series: &[GroupMean]) {
    ui.strong("Yearly Data Table");

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("Average Suicide Rate");
            });
        })
        .body(|mut body| {
            for group in series {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(group.key.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", group.mean));
                    });
                });
            }
        });
}
