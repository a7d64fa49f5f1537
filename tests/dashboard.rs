use std::io::Write;
use std::path::Path;

use spotify_dashboard::{ChartSpecification, Dashboard, LoadError};
use tempfile::NamedTempFile;

const HEADER: &str = "Track,Album Name,Artist,Release Date,Track Score,Spotify Streams,Spotify Popularity";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", contents).unwrap();
    tmp
}

/// Three tracks: two by A (scores 10, 20) and one by B with a bad score.
fn example_dashboard() -> Dashboard {
    let tmp = write_csv(&format!(
        "{HEADER}\n\
         One,X,A,2024-01-15,10,100,50\n\
         Two,Y,B,2/29/2024,bad,200,60\n\
         Three,Z,A,2023-07-04,20,300,70\n"
    ));
    Dashboard::load(tmp.path()).unwrap()
}

fn counts(chart: &ChartSpecification) -> Vec<(String, usize)> {
    chart
        .histogram()
        .expect("expected a histogram")
        .bars
        .iter()
        .map(|b| (b.category.clone(), b.count))
        .collect()
}

#[test]
fn test_summary_statistics() {
    let d = example_dashboard();
    let stats = d.summary();
    assert_eq!(stats.record_count, 3);
    assert_eq!(stats.mean_track_score, Some(15.0));
}

#[test]
fn test_unparseable_score_is_missing() {
    let d = example_dashboard();
    let b = &d.dataset().tracks()[1];
    assert_eq!(b.artist.as_deref(), Some("B"));
    assert_eq!(b.track_score, None);
    assert_eq!(b.spotify_popularity, Some(60.0));
}

#[test]
fn test_update_all_artists() {
    let d = example_dashboard();
    assert_eq!(
        counts(&d.update(None)),
        [("A".to_string(), 2), ("B".to_string(), 1)]
    );
    assert_eq!(d.update(Some("")), d.update(None));
}

#[test]
fn test_update_single_artist() {
    let d = example_dashboard();
    assert_eq!(counts(&d.update(Some("A"))), [("A".to_string(), 2)]);
    assert_eq!(counts(&d.update(Some("B"))), [("B".to_string(), 1)]);
}

#[test]
fn test_update_unknown_artist_is_empty() {
    let d = example_dashboard();
    assert_eq!(d.update(Some("C")), ChartSpecification::Empty);
    assert_eq!(d.update(Some("a")), ChartSpecification::Empty);
}

#[test]
fn test_update_is_idempotent_and_stats_are_fixed() {
    let d = example_dashboard();
    let before = d.summary();
    for sel in [None, Some("A"), Some("B"), Some("C")] {
        assert_eq!(d.update(sel), d.update(sel));
        assert_eq!(d.summary(), before);
    }
    assert_eq!(d.dataset().len(), 3);
}

#[test]
fn test_histogram_metadata() {
    let d = example_dashboard();
    let chart = d.update(None);
    let h = chart.histogram().unwrap();
    assert_eq!(h.title, "Singer Distribution by Artist");
    assert_eq!(h.nbins, 5);
    assert_ne!(h.bars[0].color, h.bars[1].color);
    assert_eq!(h.bars[0].color, d.colors().color_for("A"));
}

#[test]
fn test_release_month_is_derived() {
    let d = example_dashboard();
    let months: Vec<String> = d
        .dataset()
        .tracks()
        .iter()
        .map(|t| t.release_month.to_string())
        .collect();
    assert_eq!(months, ["2024-01-01", "2024-02-01", "2023-07-01"]);
}

#[test]
fn test_selector_options() {
    let d = example_dashboard();
    assert_eq!(d.dataset().artists(), ["A", "B"]);
}

#[test]
fn test_missing_file() {
    let err = Dashboard::load(Path::new("definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err}");
}

#[test]
fn test_missing_required_column() {
    let tmp = write_csv("Artist,Track Score,Release Date\nA,1,2024-01-01\n");
    let err = Dashboard::load(tmp.path()).unwrap_err();
    assert!(
        matches!(err, LoadError::MissingColumn("Spotify Popularity")),
        "{err}"
    );
}

#[test]
fn test_invalid_date_aborts_load() {
    let tmp = write_csv(&format!(
        "{HEADER}\n\
         One,X,A,2024-01-15,10,100,50\n\
         Two,Y,B,not a date,10,100,50\n"
    ));
    match Dashboard::load(tmp.path()) {
        Err(LoadError::InvalidDate { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "not a date");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn test_ragged_row_is_csv_error_with_path() {
    let tmp = write_csv(&format!("{HEADER}\nOne,X,A,2024-01-15\n"));
    let err = Dashboard::load(tmp.path()).unwrap_err();
    match &err {
        LoadError::Csv { path, .. } => assert_eq!(path, tmp.path()),
        other => panic!("expected Csv error, got {other:?}"),
    }
}

#[test]
fn test_header_only_file() {
    let tmp = write_csv(&format!("{HEADER}\n"));
    let d = Dashboard::load(tmp.path()).unwrap();
    assert_eq!(d.summary().record_count, 0);
    assert_eq!(d.summary().mean_track_score, None);
    assert!(d.update(None).is_empty());
}

#[test]
fn test_quoted_cells_with_commas() {
    let tmp = write_csv(&format!(
        "{HEADER}\n\
         \"Hello, World\",X,\"Tyler, The Creator\",2024-03-01,\"1,234.5\",\"390,470,936\",80\n"
    ));
    let d = Dashboard::load(tmp.path()).unwrap();
    let t = &d.dataset().tracks()[0];
    assert_eq!(t.track, "Hello, World");
    assert_eq!(t.artist.as_deref(), Some("Tyler, The Creator"));
    // thousands separators are not numeric
    assert_eq!(t.track_score, None);
    assert_eq!(
        counts(&d.update(Some("Tyler, The Creator"))),
        [("Tyler, The Creator".to_string(), 1)]
    );
}
