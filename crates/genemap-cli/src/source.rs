//! Identifier list loading
//!
//! Input files are delimited tables with no header; the first field of every
//! row is taken as the identifier. Tokens are not deduplicated or validated,
//! a malformed token simply maps to zero or empty matches downstream.

use genemap_common::Result;
use std::fs;
use std::path::Path;

/// Load the ordered identifier list from a file.
///
/// Rows without a first field are skipped; everything else passes through
/// unchanged.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut identifiers = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            if !first.is_empty() {
                identifiers.push(first.to_string());
            }
        }
    }

    Ok(identifiers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_first_field_per_row() {
        let file = write_input("MGI:1918911\nMGI:2442934,ignored\nMGI:1338073\n");
        let ids = load(file.path()).unwrap();
        assert_eq!(ids, vec!["MGI:1918911", "MGI:2442934", "MGI:1338073"]);
    }

    #[test]
    fn test_load_keeps_order_and_duplicates() {
        let file = write_input("P12345\nQ99999\nP12345\n");
        let ids = load(file.path()).unwrap();
        assert_eq!(ids, vec!["P12345", "Q99999", "P12345"]);
    }

    #[test]
    fn test_load_passes_malformed_tokens_through() {
        let file = write_input("not-an-id\nMGI:1918911\n");
        let ids = load(file.path()).unwrap();
        assert_eq!(ids, vec!["not-an-id", "MGI:1918911"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load(Path::new("/nonexistent/MGI_IDs.csv"));
        assert!(matches!(
            result,
            Err(genemap_common::GenemapError::Io(_))
        ));
    }
}
