//! Batch mapping pipeline
//!
//! Drives the per-identifier loop shared by every mapping pipeline: call the
//! client for each identifier in input order, accumulate records, checkpoint
//! the table at a fixed cadence, and write the full table at the end.

use crate::client::MappingClient;
use crate::progress::create_batch_progress;
use crate::writer;
use genemap_common::types::MappingTable;
use genemap_common::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default number of processed identifiers between checkpoints.
pub const DEFAULT_CHECKPOINT_EVERY: usize = 500;

/// Sequential batch mapper with periodic checkpointing
pub struct BatchMapper {
    checkpoint_every: usize,
    skip_failures: bool,
}

impl Default for BatchMapper {
    fn default() -> Self {
        Self {
            checkpoint_every: DEFAULT_CHECKPOINT_EVERY,
            skip_failures: false,
        }
    }
}

impl BatchMapper {
    /// Create a mapper.
    ///
    /// `checkpoint_every = 0` disables checkpointing; the final write still
    /// happens. With `skip_failures`, a client failure for one identifier is
    /// logged and the loop continues instead of aborting the run.
    pub fn new(checkpoint_every: usize, skip_failures: bool) -> Self {
        Self {
            checkpoint_every,
            skip_failures,
        }
    }

    /// Map every identifier in input order and write the table to `output`.
    ///
    /// After every `checkpoint_every`-th identifier the accumulated table is
    /// written to `<output_stem>_<index>.<ext>`. Checkpoints are additive
    /// snapshots, never read back; after a crash the newest one is the last
    /// known-good state.
    pub async fn run<C: MappingClient + ?Sized>(
        &self,
        identifiers: &[String],
        client: &C,
        output: &Path,
    ) -> Result<MappingTable> {
        let total = identifiers.len();
        let mut table = MappingTable::new(client.schema());

        let pb = create_batch_progress(total as u64, "Mapping identifiers");

        for (position, identifier) in identifiers.iter().enumerate() {
            let index = position + 1;

            match client.map(identifier).await {
                Ok(records) => {
                    info!(
                        index,
                        total,
                        source_id = %identifier,
                        matches = records.len(),
                        "mapped identifier"
                    );
                    table.extend(records);
                },
                Err(err) if self.skip_failures => {
                    warn!(
                        index,
                        total,
                        source_id = %identifier,
                        error = %err,
                        "skipping identifier after failure"
                    );
                },
                Err(err) => return Err(err),
            }

            pb.inc(1);

            if self.checkpoint_every > 0 && index % self.checkpoint_every == 0 {
                let checkpoint = checkpoint_path(output, index);
                writer::write(&table, &checkpoint)?;
                info!(path = %checkpoint.display(), rows = table.len(), "checkpoint written");
            }
        }

        pb.finish_and_clear();

        writer::write(&table, output)?;
        info!(path = %output.display(), rows = table.len(), "table written");

        Ok(table)
    }
}

/// Checkpoint file path for the given progress index
pub fn checkpoint_path(output: &Path, index: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let name = match output.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}.csv", stem, index),
    };

    output.with_file_name(name)
}
