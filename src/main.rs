mod app;
mod config;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::DashboardApp;
use clap::Parser;
use config::Cli;
use eframe::egui;
use serde_json::json;
use spotify_dashboard::Dashboard;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Loaded exactly once; a failure here means no dashboard at all.
    let dashboard = Dashboard::load(&cli.data)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading {}", cli.data.display()))?;

    if cli.print {
        return print_chart(&dashboard, cli.artist.as_deref());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spotify Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(dashboard)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running dashboard window")
}

/// Headless mode: statistics and chart as JSON on stdout.
fn print_chart(dashboard: &Dashboard, artist: Option<&str>) -> Result<()> {
    let report = json!({
        "summary": dashboard.summary(),
        "selection": artist,
        "chart": dashboard.update(artist),
    });
    let text = serde_json::to_string_pretty(&report).context("serialising chart")?;
    println!("{text}");
    Ok(())
}
