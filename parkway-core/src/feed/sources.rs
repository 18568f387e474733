//! Wait-time source implementations

use std::path::PathBuf;

use super::{WaitRecord, WaitTimeSource};
use crate::Error;

/// Telemetry read from a CSV export (`label,minutes` rows).
///
/// The file is re-read on every fetch so an external process can refresh it
/// in place; [`super::CachedFeed`] keeps the read rate bounded.
#[derive(Debug, Clone)]
pub struct CsvWaitFeed {
    path: PathBuf,
}

impl CsvWaitFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WaitTimeSource for CsvWaitFeed {
    fn fetch_records(&self) -> Result<Vec<WaitRecord>, Error> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|err| Error::FeedUnavailable(format!("{}: {err}", self.path.display())))?;
        reader
            .deserialize()
            .collect::<Result<Vec<WaitRecord>, _>>()
            .map_err(|err| Error::FeedUnavailable(format!("{}: {err}", self.path.display())))
    }
}

/// Fixed in-memory telemetry, for deployments without a live backend and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWaitFeed {
    records: Vec<WaitRecord>,
}

impl StaticWaitFeed {
    pub fn new(records: Vec<WaitRecord>) -> Self {
        Self { records }
    }
}

impl WaitTimeSource for StaticWaitFeed {
    fn fetch_records(&self) -> Result<Vec<WaitRecord>, Error> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_feed_unavailable() {
        let feed = CsvWaitFeed::new("/nonexistent/wait_times.csv");
        let err = feed.fetch_records().unwrap_err();
        assert!(matches!(err, Error::FeedUnavailable(_)));
    }

    #[test]
    fn csv_rows_deserialize_into_records() {
        let path = std::env::temp_dir().join("parkway_wait_feed_test.csv");
        std::fs::write(&path, "label,minutes\nCarousel,25\nLog Flume,5\n").unwrap();
        let records = CsvWaitFeed::new(&path).fetch_records().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "Carousel");
        assert_eq!(records[0].minutes, 25);
        assert_eq!(records[1].minutes, 5);
    }

    #[test]
    fn static_feed_returns_its_records() {
        let feed = StaticWaitFeed::new(vec![WaitRecord {
            label: "Carousel".to_string(),
            minutes: 40,
        }]);
        let records = feed.fetch_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].minutes, 40);
    }
}
