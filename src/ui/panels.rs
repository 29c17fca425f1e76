use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::Theme;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top panel – banner, menu bar, theme toggle, tab switcher
// ---------------------------------------------------------------------------

/// Render the top panel.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    // ---- Banner (full width) ----
    let banner = egui::include_image!("../../assets/banner.png");
    ui.add(
        egui::Image::new(banner)
            .max_width(ui.available_width())
            .max_height(56.0),
    );
    ui.add_space(2.0);

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        // ---- Theme toggle (two options) ----
        for theme in [Theme::Light, Theme::Dark] {
            if ui
                .selectable_label(state.theme == theme, theme.label())
                .clicked()
            {
                state.theme = theme;
                theme.apply(ui.ctx());
            }
        }

        ui.separator();

        // ---- Tab switcher ----
        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.label()).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} observations, {} years",
            state.dataset.len(),
            state.dataset.years.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        ui.small("Data source: US Government Public Health Database");
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in a different observation dataset.  The forecast
/// artifact stays fixed for the session.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open mortality-rate dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} observations spanning {} years",
                    dataset.len(),
                    dataset.years.len()
                );
                state.replace_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load dataset: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
