//! CSV table writer
//!
//! Serializes a mapping table to CSV, used for both checkpoints and final
//! output. Writing is a whole-file rewrite and is idempotent: the same table
//! written to the same path twice produces byte-identical files.

use genemap_common::types::{MappingRecord, MappingTable, TableSchema};
use genemap_common::Result;
use std::fs;
use std::path::Path;

/// Write a table to `path` with a header row naming the schema columns.
pub fn write(table: &MappingTable, path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    let schema = table.schema();

    writer.write_record(schema.header())?;
    for record in table.records() {
        match schema.symbol {
            Some(_) => writer.write_record([
                record.source_id.as_str(),
                record.symbol.as_deref().unwrap_or(""),
                record.target_id.as_str(),
            ])?,
            None => {
                writer.write_record([record.source_id.as_str(), record.target_id.as_str()])?
            },
        }
    }

    writer.flush()?;
    Ok(())
}

/// Read a table back from a CSV file written by [`write`].
///
/// The header row is skipped; field values come back exactly as written.
pub fn read(path: &Path, schema: TableSchema) -> Result<MappingTable> {
    let file = fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut table = MappingTable::new(schema);
    for record in reader.records() {
        let record = record?;
        let parsed = match schema.symbol {
            Some(_) => MappingRecord::with_symbol(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
            ),
            None => MappingRecord::new(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
            ),
        };
        table.push(parsed);
    }

    Ok(table)
}
