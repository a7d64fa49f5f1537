use eframe::egui;
use spotify_dashboard::Dashboard;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub dashboard: Dashboard,
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard) -> Self {
        let state = AppState::new(&dashboard);
        Self { dashboard, state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and headline numbers ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.dashboard);
        });

        // ---- Left side panel: artist selector ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.dashboard, &mut self.state);
            });

        // ---- Central panel: distribution chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::distribution_plot(ui, &self.state.chart);
        });
    }
}
