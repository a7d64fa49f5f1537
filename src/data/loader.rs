use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::model::{Dataset, TrackRecord};

/// Default input, resolved relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "spotify-2024.csv";

pub const ARTIST: &str = "Artist";
pub const TRACK_SCORE: &str = "Track Score";
pub const RELEASE_DATE: &str = "Release Date";
pub const SPOTIFY_POPULARITY: &str = "Spotify Popularity";
const TRACK: &str = "Track";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. The dashboard never starts with a partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: '{value}' is not a valid release date")]
    InvalidDate { line: u64, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the track dataset from a CSV file.
///
/// The header row must contain `Artist`, `Track Score`, `Release Date` and
/// `Spotify Popularity`; any other columns are ignored. Cells are decoded
/// lossily, so Latin-1 exports load with replacement characters instead of
/// failing.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file).map_err(|e| match e {
        LoadError::Csv { source, .. } => LoadError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse tracks from any CSV source. `Csv` errors carry an empty path; `load_csv`
/// fills it in.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: PathBuf::new(),
        source,
    };

    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let artist_idx = column(ARTIST)?;
    let score_idx = column(TRACK_SCORE)?;
    let date_idx = column(RELEASE_DATE)?;
    let popularity_idx = column(SPOTIFY_POPULARITY)?;
    let track_idx = column(TRACK).ok();

    let mut tracks = Vec::new();

    for result in reader.byte_records() {
        let record = result.map_err(csv_err)?;
        let cell = |idx: usize| {
            record
                .get(idx)
                .map(String::from_utf8_lossy)
                .unwrap_or_default()
        };

        let date_text = cell(date_idx);
        let release_date = parse_release_date(&date_text).ok_or_else(|| LoadError::InvalidDate {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            value: date_text.to_string(),
        })?;

        let artist = cell(artist_idx);
        tracks.push(TrackRecord {
            track: track_idx.map(|i| cell(i).into_owned()).unwrap_or_default(),
            artist: (!artist.is_empty()).then(|| artist.into_owned()),
            track_score: coerce_numeric(&cell(score_idx)),
            release_date,
            release_month: month_start(release_date),
            spotify_popularity: coerce_numeric(&cell(popularity_idx)),
        });
    }

    let dataset = Dataset::from_tracks(tracks);
    log::info!(
        "Loaded {} tracks ({} without a track score) by {} artists",
        dataset.len(),
        dataset
            .tracks()
            .iter()
            .filter(|t| t.track_score.is_none())
            .count(),
        dataset.artists().len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Parse a numeric cell; anything that is not a finite number is missing.
pub fn coerce_numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Accepts ISO-8601 dates (with or without a time part) and `M/D/YYYY`.
pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
