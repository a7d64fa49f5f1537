use spotify_dashboard::{ChartSpecification, Dashboard};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The UI state, independent of rendering. The dashboard itself is never
/// mutated; only the selection and the chart derived from it change.
pub struct AppState {
    /// Selected artist (`None` = all artists).
    pub selection: Option<String>,

    /// Chart for the current selection (cached).
    pub chart: ChartSpecification,
}

impl AppState {
    pub fn new(dashboard: &Dashboard) -> Self {
        Self {
            selection: None,
            chart: dashboard.update(None),
        }
    }

    /// Change the artist filter and rebuild the chart if it differs.
    pub fn select(&mut self, dashboard: &Dashboard, selection: Option<String>) {
        if self.selection == selection {
            return;
        }
        self.chart = dashboard.update(selection.as_deref());
        self.selection = selection;
    }

    /// Number of tracks behind the current chart.
    pub fn visible_tracks(&self, dashboard: &Dashboard) -> usize {
        match (&self.chart, self.selection.as_deref()) {
            (ChartSpecification::Empty, _) => 0,
            (ChartSpecification::Histogram(h), Some(_)) => h.total(),
            (ChartSpecification::Histogram(_), None) => dashboard.dataset().len(),
        }
    }
}
