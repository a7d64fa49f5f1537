use eframe::egui::{self, RichText, Ui};
use spotify_dashboard::Dashboard;

use super::HEADING_RED;
use crate::state::AppState;

const SELECT_PLACEHOLDER: &str = "Select Artist";

// ---------------------------------------------------------------------------
// Top bar – title and headline numbers
// ---------------------------------------------------------------------------

/// Render the title and the two load-time statistics.
pub fn top_bar(ui: &mut Ui, dashboard: &Dashboard) {
    let summary = dashboard.summary();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("Spotify Dashboard")
                .size(28.0)
                .strong()
                .color(HEADING_RED),
        );
        ui.add_space(8.0);
    });

    ui.columns(2, |cols| {
        cols[0].vertical_centered(|ui: &mut Ui| {
            ui.label(format!("Total Spotify Record: {}", summary.record_count_label()));
        });
        cols[1].vertical_centered(|ui: &mut Ui| {
            ui.label(format!(
                "Average Track Score: {}",
                summary.mean_track_score_label()
            ));
        });
    });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Left side panel – artist selector
// ---------------------------------------------------------------------------

/// Render the artist selector and apply any change to `state`.
pub fn side_panel(ui: &mut Ui, dashboard: &Dashboard, state: &mut AppState) {
    ui.label(RichText::new("Spotify Singer Demographics").heading().strong());
    ui.separator();

    let mut selection = state.selection.clone();

    egui::ComboBox::from_id_salt("singer_filter")
        .selected_text(selection.as_deref().unwrap_or(SELECT_PLACEHOLDER))
        .width(ui.available_width())
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut selection, None, "All artists");
            for artist in dashboard.dataset().artists() {
                ui.selectable_value(&mut selection, Some(artist.clone()), artist.as_str());
            }
        });

    if selection.is_some() && ui.small_button("Clear").clicked() {
        selection = None;
    }

    state.select(dashboard, selection);

    ui.add_space(8.0);
    ui.label(format!(
        "{} of {} tracks shown",
        state.visible_tracks(dashboard),
        dashboard.dataset().len()
    ));
}
