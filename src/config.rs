use std::path::PathBuf;

use clap::Parser;
use spotify_dashboard::data::loader::DEFAULT_DATA_FILE;

/// Spotify 2024 track dashboard.
#[derive(Parser, Debug)]
#[command(name = "spotify-dashboard", version, about)]
pub struct Cli {
    /// CSV file with Artist, Track Score, Release Date and Spotify Popularity columns
    #[arg(long, env = "SPOTIFY_DASHBOARD_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Print the statistics and chart as JSON instead of opening a window
    #[arg(long)]
    pub print: bool,

    /// Artist to chart with --print (all artists when omitted)
    #[arg(long, requires = "print")]
    pub artist: Option<String>,
}
