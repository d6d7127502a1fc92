//! Launch record loading
//!
//! Reads the fixed-schema launch dataset from CSV into memory once at
//! startup. The table is immutable for the process lifetime; everything
//! downstream takes `&[LaunchRecord]` and computes views on demand.
//!
//! Any problem here is fatal: a dashboard over a table that failed to load
//! has nothing to show, so `main` prints the error and exits before the
//! server binds.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Columns the dataset must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// One row of the dataset: a single launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Outcome class: 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub class: u8,

    #[serde(rename = "Booster Version Category")]
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// Parse launch records from CSV.
///
/// All of [`REQUIRED_COLUMNS`] must be present in the header row; a missing
/// column or a malformed row is an error, not a skipped record.
pub fn read_table<R: Read>(reader: R) -> io::Result<Vec<LaunchRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().map_err(to_io_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("dataset is missing required column '{}'", column),
            ));
        }
    }

    csv_reader
        .deserialize()
        .collect::<Result<Vec<LaunchRecord>, _>>()
        .map_err(to_io_error)
}

/// Load launch records from a CSV file on disk.
pub fn load_table<P: AsRef<Path>>(path: P) -> io::Result<Vec<LaunchRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot open dataset {}: {}", path.display(), e),
        )
    })?;
    read_table(file)
}

fn to_io_error(e: csv::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==========================================================================
    // CSV LOADING TESTS
    // ==========================================================================
    //
    // The loader is a one-shot startup step: either the whole table parses
    // or the process has nothing to serve. These tests cover the happy path,
    // every fatal condition, and schema tolerance (extra columns).
    // ==========================================================================

    const SAMPLE_CSV: &str = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,500.0,0,v1.0
CCAFS LC-40,2500.5,1,FT
KSC LC-39A,3170.0,1,B4
VAFB SLC-4E,9600.0,0,v1.1
";

    #[test]
    fn test_read_table_parses_all_rows() {
        let table = read_table(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);

        assert_eq!(table[0].launch_site, "CCAFS LC-40");
        assert_eq!(table[0].payload_mass_kg, 500.0);
        assert_eq!(table[0].class, 0);
        assert_eq!(table[0].booster_version, "v1.0");

        assert!(table[1].is_success());
        assert!(!table[3].is_success());
    }

    #[test]
    fn test_read_table_ignores_extra_columns() {
        // The real dataset carries flight numbers and full booster versions;
        // loading must not depend on them.
        let csv = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version,Booster Version Category
1,CCAFS LC-40,0.0,0,F9 v1.0 B0003,v1.0
2,KSC LC-39A,2490.0,1,F9 FT B1021,FT
";
        let table = read_table(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[1].launch_site, "KSC LC-39A");
        assert_eq!(table[1].booster_version, "FT");
    }

    #[test]
    fn test_read_table_missing_column_is_fatal() {
        let csv = "\
Launch Site,Payload Mass (kg),class
CCAFS LC-40,500.0,0
";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Booster Version Category"));
    }

    #[test]
    fn test_read_table_malformed_row_is_fatal() {
        let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,not-a-number,0,v1.0
";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_table_empty_body_is_ok() {
        // Header only: parses to an empty table. Rejecting an empty dataset
        // is the caller's decision, not the parser's.
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let table = read_table(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_table_missing_file() {
        let err = load_table("/nonexistent/spacex_launch_dash.csv").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("spacex_launch_dash.csv"));
    }
}
