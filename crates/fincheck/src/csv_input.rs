//! CSV input
//!
//! Reads comma-separated files of free text (one cell per value) so they can
//! be fed to the windowed scan.

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Read a CSV file into rows of cells.
///
/// Rows may have different widths. Unless `keep_headers` is set, the first
/// row is dropped.
pub fn read_csv(path: &Path, keep_headers: bool) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path)?;
    let rows = read_csv_from(file, keep_headers)?;
    tracing::debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Like [`read_csv`], for any reader
pub fn read_csv_from<R: Read>(reader: R, keep_headers: bool) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(!keep_headers)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// All cells of a CSV file, row by row
pub fn read_csv_cells(path: &Path, keep_headers: bool) -> Result<Vec<String>> {
    Ok(read_csv(path, keep_headers)?.into_iter().flatten().collect())
}
