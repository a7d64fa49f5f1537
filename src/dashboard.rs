use std::path::Path;

use crate::chart::{update_distribution, ChartSpecification};
use crate::color::ColorMap;
use crate::data::loader::{load_csv, LoadError};
use crate::data::model::{Dataset, SummaryStatistics};

/// Everything computed once at startup: the dataset, its summary, and the
/// per-artist colours. Read-only for the rest of the process.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    summary: SummaryStatistics,
    colors: ColorMap,
}

impl Dashboard {
    /// Load the CSV and precompute everything the views need.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_csv(path).map(Self::from_dataset)
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let summary = dataset.summary();
        let colors = ColorMap::new(dataset.artists());
        Dashboard {
            dataset,
            summary,
            colors,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn summary(&self) -> SummaryStatistics {
        self.summary
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// The selector callback: chart for the given artist, or for everyone.
    pub fn update(&self, selection: Option<&str>) -> ChartSpecification {
        update_distribution(&self.dataset, &self.colors, selection)
    }
}
