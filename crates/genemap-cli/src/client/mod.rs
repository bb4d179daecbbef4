//! Remote mapping service clients
//!
//! Each client wraps one identifier-translation service behind the
//! [`MappingClient`] capability trait. Protocol differences (structured
//! query vs. raw HTTP form) stay inside the concrete types; the batch
//! pipeline only sees `map`.

use async_trait::async_trait;
use genemap_common::types::{MappingRecord, TableSchema};
use genemap_common::Result;

mod mousemine;
mod uniprot;

pub use mousemine::MouseMineClient;
pub use uniprot::UniProtClient;

/// Capability interface for a remote identifier-translation service.
#[async_trait]
pub trait MappingClient: Send + Sync {
    /// Output column schema for the namespace pair this client serves
    fn schema(&self) -> TableSchema;

    /// Translate one source identifier.
    ///
    /// Returns zero, one, or several records depending on what the service
    /// reports for the identifier.
    async fn map(&self, identifier: &str) -> Result<Vec<MappingRecord>>;
}
