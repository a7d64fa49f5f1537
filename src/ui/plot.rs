use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};
use spotify_dashboard::ChartSpecification;

use super::to_color32;

// ---------------------------------------------------------------------------
// Distribution plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart specification in the central panel.
pub fn distribution_plot(ui: &mut Ui, chart: &ChartSpecification) {
    let histogram = match chart {
        ChartSpecification::Histogram(h) => h,
        ChartSpecification::Empty => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No tracks for this selection");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(histogram.title.as_str());
    });

    let labels: Vec<String> = histogram
        .bars
        .iter()
        .map(|b| b.category.clone())
        .collect();

    Plot::new("distribution_plot")
        .legend(Legend::default())
        .x_axis_label(histogram.x_label.clone())
        .y_axis_label("count")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One chart per artist so each gets its own legend entry.
            for (i, bar) in histogram.bars.iter().enumerate() {
                let color = to_color32(bar.color);
                let series = BarChart::new(vec![Bar::new(i as f64, bar.count as f64)
                    .name(&bar.category)
                    .fill(color)
                    .width(0.8)])
                .name(&bar.category)
                .color(color);

                plot_ui.bar_chart(series);
            }
        });
}

/// Axis tick text: the category under an integer tick, blank elsewhere.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
