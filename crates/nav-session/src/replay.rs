//! CSV fix loader for replaying recorded drives.
//!
//! # CSV format
//!
//! One row per fix, in the order received.  Columns other than `lat` and
//! `lon` (timestamps, accuracy, …) are ignored.
//!
//! ```csv
//! lat,lon,accuracy_m
//! 37.975500,23.734800,5
//! 37.975620,23.734910,4
//! ```
//!
//! Rows whose coordinates are not finite are skipped with a warning; a row
//! that cannot be parsed at all is an error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use nav_core::{GeoPoint, NavError};

use crate::SessionResult;

#[derive(Deserialize)]
struct FixRecord {
    lat: f64,
    lon: f64,
}

/// Load fixes from a CSV file.
pub fn load_fixes_csv(path: &Path) -> SessionResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path).map_err(NavError::Io)?;
    let fixes = load_fixes_reader(file)?;
    debug!(path = %path.display(), fixes = fixes.len(), "fixes loaded");
    Ok(fixes)
}

/// Like [`load_fixes_csv`] but accepts any `Read` source.
pub fn load_fixes_reader<R: Read>(reader: R) -> SessionResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut fixes = Vec::new();

    for (row, result) in csv_reader.deserialize::<FixRecord>().enumerate() {
        let record = result?;
        let fix = GeoPoint::new(record.lat, record.lon);
        if !fix.is_finite() {
            warn!(row, "skipping fix with non-finite coordinates");
            continue;
        }
        fixes.push(fix);
    }
    Ok(fixes)
}
