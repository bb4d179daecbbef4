//! TSV to CSV reformatting for ontology dump files
//!
//! Rewrites headerless tab-separated dumps as comma-separated files next to
//! the input, changing nothing but the delimiter. Ragged rows pass through
//! unchanged; column counts are not validated.

use genemap_common::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dump files converted when no explicit paths are given.
pub const DEFAULT_INPUTS: [&str; 2] = ["term.txt", "term2term.txt"];

/// Convert one tab-separated file to a comma-separated sibling.
///
/// The output path is the input path with its extension replaced by `.csv`.
/// Returns the output path.
pub fn convert(input: &Path) -> Result<PathBuf> {
    let file = fs::File::open(input)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let output = input.with_extension("csv");
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output)?;

    let mut rows = 0usize;
    for record in reader.records() {
        writer.write_record(&record?)?;
        rows += 1;
    }
    writer.flush()?;

    info!(input = %input.display(), output = %output.display(), rows, "converted");
    Ok(output)
}
