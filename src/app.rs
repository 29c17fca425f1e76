use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{demographics_view, forecast_view, panels, trend_view};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RateScopeApp {
    pub state: AppState,
}

impl RateScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RateScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: banner, menu bar, theme and tab switches ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: data-source footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Central panel: the active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Forecast => forecast_view::show(ui, &self.state),
            Tab::Trends => trend_view::show(ui, &mut self.state),
            Tab::Demographics => demographics_view::show(ui, &mut self.state),
        });
    }
}
