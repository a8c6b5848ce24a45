mod classify;
mod parser;

pub use classify::{classify_shift, classify_status};
pub use parser::{parse_records, parse_timestamp};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::models::Record;

/// Read and parse the TAT export from disk.
///
/// A missing or unreadable file is an error (there is nothing to show
/// without it); malformed rows inside the file are not — they are skipped
/// during parsing and only surface in the load summary below.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TAT export from {}", path.display()))?;

    let data_lines = text.lines().count().saturating_sub(1);
    let records = parse_records(&text);

    info!(
        "Loaded {} records from {} data rows in {}",
        records.len(),
        data_lines,
        path.display()
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_records_reads_a_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header").unwrap();
        writeln!(file, "a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00,j,2024-01-01T08:10:00").unwrap();
        writeln!(file, "too,short").unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department, "Eng");
    }

    #[test]
    fn load_records_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(load_records(&missing).is_err());
    }
}
