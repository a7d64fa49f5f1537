use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// TrackRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single track with its typed, coerced fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRecord {
    /// Track title (empty when the file has no `Track` column).
    pub track: String,
    /// `None` when the cell was empty.
    pub artist: Option<String>,
    /// `None` when the cell failed numeric coercion.
    pub track_score: Option<f64>,
    pub release_date: NaiveDate,
    /// First day of the release month. Derived at load, not read by any view.
    pub release_month: NaiveDate,
    pub spotify_popularity: Option<f64>,
}

impl TrackRecord {
    /// Whether this record's artist is exactly `artist` (case-sensitive).
    pub fn is_by(&self, artist: &str) -> bool {
        self.artist.as_deref() == Some(artist)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tracks: Vec<TrackRecord>,
    /// Distinct non-missing artists, in first-appearance order.
    artists: Vec<String>,
}

impl Dataset {
    /// Build the artist index from the loaded records.
    pub fn from_tracks(tracks: Vec<TrackRecord>) -> Self {
        let artists = {
            let mut seen: HashSet<&str> = HashSet::new();
            tracks
                .iter()
                .filter_map(|t| t.artist.as_deref())
                .filter(|artist| seen.insert(*artist))
                .map(str::to_string)
                .collect()
        };
        Dataset { tracks, artists }
    }

    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    /// Selector options: every distinct artist, first-appearance order.
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Compute the two headline numbers. Called once, right after load.
    pub fn summary(&self) -> SummaryStatistics {
        let (sum, scored) = self
            .tracks
            .iter()
            .filter_map(|t| t.track_score)
            .fold((0.0_f64, 0_usize), |(sum, n), s| (sum + s, n + 1));

        SummaryStatistics {
            record_count: self.tracks.len(),
            mean_track_score: (scored > 0).then(|| sum / scored as f64),
        }
    }
}

// ---------------------------------------------------------------------------
// SummaryStatistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub record_count: usize,
    /// Mean over non-missing scores; `None` if every score is missing.
    pub mean_track_score: Option<f64>,
}

impl SummaryStatistics {
    pub fn record_count_label(&self) -> String {
        group_thousands(&self.record_count.to_string())
    }

    /// `1234.567` → `"1,234.57"`, `None` → `"n/a"`.
    pub fn mean_track_score_label(&self) -> String {
        match self.mean_track_score {
            Some(mean) => {
                let fixed = format!("{:.2}", mean.abs());
                let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
                let sign = if mean < 0.0 && fixed != "0.00" { "-" } else { "" };
                format!("{sign}{}.{frac_part}", group_thousands(int_part))
            }
            None => "n/a".to_string(),
        }
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Spotify Record: {}, Average Track Score: {}",
            self.record_count_label(),
            self.mean_track_score_label()
        )
    }
}

/// Insert `,` every three digits from the right of an unsigned digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: Option<&str>, score: Option<f64>) -> TrackRecord {
        let date = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap();
        TrackRecord {
            track: String::new(),
            artist: artist.map(str::to_string),
            track_score: score,
            release_date: date,
            release_month: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            spotify_popularity: None,
        }
    }

    #[test]
    fn artists_keep_first_appearance_order_and_skip_missing() {
        let ds = Dataset::from_tracks(vec![
            track(Some("Tommy Richman"), None),
            track(None, None),
            track(Some("Eminem"), None),
            track(Some("Tommy Richman"), None),
        ]);
        assert_eq!(ds.artists(), ["Tommy Richman", "Eminem"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn summary_excludes_missing_scores() {
        let ds = Dataset::from_tracks(vec![
            track(Some("A"), Some(10.0)),
            track(Some("B"), None),
            track(Some("A"), Some(20.0)),
        ]);
        let stats = ds.summary();
        assert_eq!(stats.record_count, 3);
        assert_eq!(stats.mean_track_score, Some(15.0));
    }

    #[test]
    fn summary_of_all_missing_scores_has_no_mean() {
        let ds = Dataset::from_tracks(vec![track(Some("A"), None)]);
        assert_eq!(ds.summary().mean_track_score, None);
        assert_eq!(ds.summary().mean_track_score_label(), "n/a");
    }

    #[test]
    fn labels_group_thousands() {
        let stats = SummaryStatistics {
            record_count: 4600,
            mean_track_score: Some(1234.567),
        };
        assert_eq!(stats.record_count_label(), "4,600");
        assert_eq!(stats.mean_track_score_label(), "1,234.57");

        let small = SummaryStatistics {
            record_count: 12,
            mean_track_score: Some(41.8),
        };
        assert_eq!(small.to_string(), "Total Spotify Record: 12, Average Track Score: 41.80");
    }

    #[test]
    fn is_by_is_exact_and_case_sensitive() {
        let t = track(Some("Billie Eilish"), None);
        assert!(t.is_by("Billie Eilish"));
        assert!(!t.is_by("billie eilish"));
        assert!(!t.is_by("Billie Eilish "));
        assert!(!track(None, None).is_by(""));
    }
}
