use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ColorScale;
use crate::data::aggregate::{GroupBy, GroupMean};
use crate::data::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Demographics view – per-group bars for one year, with CSV export
// ---------------------------------------------------------------------------

const WARNING: Color32 = Color32::from_rgb(0xb4, 0x8a, 0x00);

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Rates by Demographic Group");
    ui.add_space(4.0);

    let years = state.dataset.years.clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Year");
        egui::ComboBox::from_id_salt("demo_year")
            .selected_text(state.demo.year.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for &year in &years {
                    if ui
                        .selectable_label(state.demo.year == year, year.to_string())
                        .clicked()
                    {
                        state.demo.year = year;
                    }
                }
            });

        ui.add_space(12.0);

        ui.label("Group by");
        ui.radio_value(&mut state.demo.group_by, GroupBy::Label, "Demographic group");
        ui.radio_value(&mut state.demo.group_by, GroupBy::Age, "Age group");
    });

    ui.add_space(6.0);

    let series = state.demographic_series();
    if series.is_empty() {
        ui.colored_label(WARNING, "No data available for this year.");
        return;
    }

    ui.strong(format!(
        "Rates by {} ({})",
        match state.demo.group_by {
            GroupBy::Age => "Age Group",
            _ => "Demographic Group",
        },
        state.demo.year
    ));
    ui.add_space(4.0);

    bar_chart(ui, &series);

    ui.add_space(8.0);
    ui.label("Download this demographic data:");
    if ui.button("Download CSV").clicked() {
        save_series(state, &series);
    }
}

/// Horizontal bar chart, one bar per group, colored by magnitude.
fn bar_chart(ui: &mut Ui, series: &[GroupMean]) {
    let scale = ColorScale::new(&series.iter().map(|g| g.mean).collect::<Vec<f64>>());
    let names: Vec<String> = series.iter().map(|g| g.key.to_string()).collect();

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, group)| {
            Bar::new(i as f64, group.mean)
                .name(&names[i])
                .fill(scale.color_for(group.mean))
                .width(0.6)
        })
        .collect();

    Plot::new("demographics_chart")
        .x_axis_label("Average Suicide Rate")
        .height(460.0)
        .y_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Save the aggregated table through a file dialog.
fn save_series(state: &mut AppState, series: &[GroupMean]) {
    let file = rfd::FileDialog::new()
        .set_title("Save demographic data")
        .set_file_name("demographic_rates.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let key_header = state.demo.group_by.column_name();
        match export::export_series(&path, key_header, series) {
            Ok(()) => {
                log::info!("exported {} rows to {}", series.len(), path.display());
                state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
