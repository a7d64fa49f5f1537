/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  spotify-2024.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, coerce cells → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<TrackRecord>, artist index, summary
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  artist equality → matching tracks
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
