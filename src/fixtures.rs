//! Fixtures
//!
//! YAML-backed static data: the seed catalog, the tracking table and the
//! order history. These stand in for the data files the surrounding pages
//! supply; the stock page may override the catalog through the store, but
//! the tracking and history fixtures are read-only.

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{catalog::Book, history::HistoryRecord, tracking::TrackingTable};

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    books: Vec<Book>,
}

#[derive(Debug, Deserialize)]
struct HistoryFixture {
    orders: Vec<HistoryRecord>,
}

/// Loads fixture files from a base directory (`./fixtures` by default).
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Fixture {
    /// Creates a loader over the default `./fixtures` directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Creates a loader over a custom base directory.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Fixture {
            base_path: base_path.into(),
        }
    }

    fn read(&self, name: &str) -> Result<String, FixtureError> {
        Ok(fs::read_to_string(self.base_path.join(format!("{name}.yml")))?)
    }

    /// Loads the seed catalog from `catalog.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn catalog(&self) -> Result<Vec<Book>, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(&self.read("catalog")?)?;

        Ok(fixture.books)
    }

    /// Loads the tracking table from `tracking.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn tracking(&self) -> Result<TrackingTable, FixtureError> {
        Ok(serde_norway::from_str(&self.read("tracking")?)?)
    }

    /// Loads the order history from `history.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, FixtureError> {
        let fixture: HistoryFixture = serde_norway::from_str(&self.read("history")?)?;

        Ok(fixture.orders)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn catalog_fixture_loads() -> TestResult {
        let books = Fixture::new().catalog()?;

        assert!(!books.is_empty(), "seed catalog should not be empty");
        assert!(
            books.iter().all(|book| book.price_minor().is_some()),
            "every seeded price should parse"
        );

        Ok(())
    }

    #[test]
    fn tracking_fixture_is_keyed_by_do_number() -> TestResult {
        let table = Fixture::new().tracking()?;

        assert!(!table.is_empty(), "tracking fixture should not be empty");

        let record = table
            .lookup("DO-2025-001")
            .expect("seeded DO number should resolve");
        assert_eq!(record.do_number, "DO-2025-001");

        Ok(())
    }

    #[test]
    fn history_fixture_loads() -> TestResult {
        let orders = Fixture::new().history()?;

        assert!(!orders.is_empty(), "history fixture should not be empty");

        Ok(())
    }

    #[test]
    fn missing_fixture_file_is_an_io_error() {
        let result = Fixture::with_base_path("./no-such-dir").catalog();

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
