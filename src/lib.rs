//! Spotify track dashboard core.
//!
//! Loads the track CSV once, derives the headline statistics, and rebuilds a
//! per-artist distribution chart for any artist selection. The UI in the
//! `spotify-dashboard` binary only renders what this crate produces.

pub mod chart;
pub mod color;
pub mod dashboard;
pub mod data;

pub use chart::{update_distribution, ChartSpecification, Histogram, HistogramBar};
pub use dashboard::Dashboard;
pub use data::loader::{load_csv, LoadError};
pub use data::model::{Dataset, SummaryStatistics, TrackRecord};
