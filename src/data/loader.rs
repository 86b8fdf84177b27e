use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Listing, ListingDataset};

/// Fixed location of the listings table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/tokyo_listings.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The source data could not be turned into a dataset. Fatal for the update
/// that triggered the load: the file is static, so retrying cannot help.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("listings file {path} could not be read: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("listings file is malformed: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// CSV schema
// ---------------------------------------------------------------------------

/// One CSV row under the upstream column names. Columns not listed here
/// (leftover feature-engineering output) are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "neighbourhood_cleansed")]
    neighbourhood: String,
    beds: u32,
    accommodates: u32,
    #[serde(rename = "host_is_superhost", deserialize_with = "bool_from_int")]
    is_superhost: bool,
    #[serde(rename = "local_host", deserialize_with = "bool_from_int")]
    is_local_host: bool,
    #[serde(rename = "hot_tub", deserialize_with = "bool_from_int")]
    has_hot_tub: bool,
    #[serde(rename = "TSNE1")]
    tsne1: f64,
    #[serde(rename = "TSNE2")]
    tsne2: f64,
    #[serde(rename = "TSNE3")]
    tsne3: f64,
    name: String,
    profit_category: String,
    #[serde(rename = "price_per_night_in_USD")]
    price_per_night: f64,
    #[serde(rename = "estimated_monthly_income_in_USD")]
    monthly_income_estimate: f64,
    minimum_nights: u32,
}

/// The upstream table stores the three flags as 0/1 integers.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected 0 or 1 for flag column, got {other}"
        ))),
    }
}

impl From<CsvRow> for Listing {
    fn from(row: CsvRow) -> Self {
        Listing {
            neighbourhood: row.neighbourhood,
            beds: row.beds,
            accommodates: row.accommodates,
            is_superhost: row.is_superhost,
            is_local_host: row.is_local_host,
            has_hot_tub: row.has_hot_tub,
            embedding: [row.tsne1, row.tsne2, row.tsne3],
            name: row.name,
            profit_category: row.profit_category,
            price_per_night: row.price_per_night,
            monthly_income_estimate: row.monthly_income_estimate,
            minimum_nights: row.minimum_nights,
        }
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load the listings table from a CSV file, preserving row order.
pub fn load(path: &Path) -> Result<ListingDataset, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut listings = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.map_err(|e| DataError::Malformed(format!("row {row_no}: {e}")))?;
        listings.push(Listing::from(row));
    }

    Ok(ListingDataset::from_listings(listings))
}

// ---------------------------------------------------------------------------
// Read-through cache
// ---------------------------------------------------------------------------

/// Re-reads the file only when its modification time changes. The dataset is
/// static in practice, so after the first load every update cycle is served
/// from the cached `Arc`.
pub struct DatasetCache {
    path: PathBuf,
    cached: Option<(SystemTime, Arc<ListingDataset>)>,
}

impl DatasetCache {
    pub fn new(path: PathBuf) -> Self {
        DatasetCache { path, cached: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current dataset, reloading from disk if the file changed.
    pub fn get(&mut self) -> Result<Arc<ListingDataset>, DataError> {
        let modified = std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|source| DataError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        if let Some((stamp, dataset)) = &self.cached {
            if *stamp == modified {
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load(&self.path)?);
        log::info!(
            "loaded {} listings ({} profit categories) from {}",
            dataset.len(),
            dataset.profit_categories.len(),
            self.path.display()
        );
        self.cached = Some((modified, Arc::clone(&dataset)));
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "name,neighbourhood_cleansed,beds,accommodates,host_is_superhost,local_host,hot_tub,TSNE1,TSNE2,TSNE3,profit_category,price_per_night_in_USD,estimated_monthly_income_in_USD,minimum_nights";

    fn write_csv(dir: &Path, lines: &[&str]) -> PathBuf {
        let path = dir.join("tokyo_listings.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn loads_rows_in_order_with_normalized_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            &[
                "Cozy loft,Sumida Ku,2,2,0,1,0,1.5,-2.25,0.75,low profit,55.0,1100.0,1",
                "River view,Chuo Ku,1,4,1,0,1,-3.0,0.5,2.0,high profit,140.0,3900.0,3",
            ],
        );

        let ds = load(&path).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.listings[0];
        assert_eq!(first.name, "Cozy loft");
        assert_eq!(first.neighbourhood, "Sumida Ku");
        assert_eq!(first.embedding, [1.5, -2.25, 0.75]);
        assert!(!first.is_superhost);
        assert!(first.is_local_host);
        assert!(!first.has_hot_tub);

        let second = &ds.listings[1];
        assert!(second.is_superhost);
        assert_eq!(second.minimum_nights, 3);
        assert_eq!(ds.profit_categories, vec!["high profit", "low profit"]);
    }

    #[test]
    fn extra_upstream_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokyo_listings.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{HEADER},amenity_wifi").unwrap();
        writeln!(
            file,
            "Tiny room,Shinjuku Ku,0,1,0,0,0,0.1,0.2,0.3,low profit,30.0,500.0,1,1"
        )
        .unwrap();

        let ds = load(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.listings[0].beds, 0);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::Unavailable { .. }));
    }

    #[test]
    fn unparseable_row_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            &["Bad row,Sumida Ku,two,2,0,0,0,0.0,0.0,0.0,low profit,55.0,1100.0,1"],
        );
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn out_of_range_flag_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            &["Bad flag,Sumida Ku,2,2,3,0,0,0.0,0.0,0.0,low profit,55.0,1100.0,1"],
        );
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn cache_serves_unchanged_file_without_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            &["Cozy loft,Sumida Ku,2,2,0,0,0,1.0,2.0,3.0,low profit,55.0,1100.0,1"],
        );

        let mut cache = DatasetCache::new(path);
        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_surfaces_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DatasetCache::new(dir.path().join("gone.csv"));
        assert!(matches!(
            cache.get().unwrap_err(),
            DataError::Unavailable { .. }
        ));
    }
}
