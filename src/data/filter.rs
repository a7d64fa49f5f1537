use super::model::{Dataset, TrackRecord};

// ---------------------------------------------------------------------------
// Artist selection predicate
// ---------------------------------------------------------------------------

/// Normalise a selector value: `None` and `Some("")` both mean "no filter".
pub fn active_selection(selection: Option<&str>) -> Option<&str> {
    selection.filter(|s| !s.is_empty())
}

/// Tracks passing the selection, in dataset order.
///
/// * No selection → every track.
/// * Otherwise → tracks whose artist equals the selection exactly. An unknown
///   artist simply matches nothing.
pub fn filtered_tracks<'a>(
    dataset: &'a Dataset,
    selection: Option<&str>,
) -> Vec<&'a TrackRecord> {
    match active_selection(selection) {
        Some(artist) => dataset.tracks().iter().filter(|t| t.is_by(artist)).collect(),
        None => dataset.tracks().iter().collect(),
    }
}
