use serde::Serialize;

use crate::color::{ColorMap, Rgb};
use crate::data::filter::{active_selection, filtered_tracks};
use crate::data::model::Dataset;

pub const DISTRIBUTION_TITLE: &str = "Singer Distribution by Artist";
/// Bucket-count hint handed to the renderer.
pub const HISTOGRAM_BINS: usize = 5;

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

/// What the renderer should draw for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpecification {
    /// Nothing matched the selection. Distinct from a histogram with no bars.
    Empty,
    Histogram(Histogram),
}

impl ChartSpecification {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartSpecification::Empty)
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        match self {
            ChartSpecification::Histogram(h) => Some(h),
            ChartSpecification::Empty => None,
        }
    }
}

/// Grouped count of tracks per artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub nbins: usize,
    pub bars: Vec<HistogramBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    pub category: String,
    pub count: usize,
    pub color: Rgb,
}

impl Histogram {
    /// Count for one category, if it has a bar.
    pub fn count_of(&self, category: &str) -> Option<usize> {
        self.bars
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.count)
    }

    /// Total tracks represented by the bars.
    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }
}

// ---------------------------------------------------------------------------
// View update
// ---------------------------------------------------------------------------

/// Rebuild the distribution chart for a selection. Pure: reads `dataset`,
/// never mutates it.
///
/// Bars follow the first appearance of each artist among the matching tracks.
/// Tracks without an artist are not counted, but they still make the
/// unfiltered set non-empty.
pub fn update_distribution(
    dataset: &Dataset,
    colors: &ColorMap,
    selection: Option<&str>,
) -> ChartSpecification {
    let tracks = filtered_tracks(dataset, selection);
    if tracks.is_empty() {
        log::debug!("selection {:?} matched no tracks", active_selection(selection));
        return ChartSpecification::Empty;
    }

    let mut bars: Vec<HistogramBar> = Vec::new();
    for artist in tracks.iter().filter_map(|t| t.artist.as_deref()) {
        match bars.iter_mut().find(|b| b.category == artist) {
            Some(bar) => bar.count += 1,
            None => bars.push(HistogramBar {
                category: artist.to_string(),
                count: 1,
                color: colors.color_for(artist),
            }),
        }
    }

    log::debug!(
        "selection {:?}: {} tracks in {} bars",
        active_selection(selection),
        tracks.len(),
        bars.len()
    );

    ChartSpecification::Histogram(Histogram {
        title: DISTRIBUTION_TITLE.to_string(),
        x_label: crate::data::loader::ARTIST.to_string(),
        nbins: HISTOGRAM_BINS,
        bars,
    })
}
