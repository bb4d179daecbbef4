//! UniProt ID-mapping client
//!
//! Translates UniProt accessions to Entrez gene IDs through the plain-text
//! form endpoint. One POST per accession; the whole response body is the
//! mapped value.

use super::MappingClient;
use crate::config::ServiceConfig;
use async_trait::async_trait;
use genemap_common::types::{MappingRecord, TableSchema};
use genemap_common::{GenemapError, Result};
use std::time::Duration;
use tracing::debug;

/// Upper bound on how much of the response body is read.
pub const MAX_RESPONSE_BYTES: usize = 200_000;

/// Client for the UniProt ID-mapping form endpoint
pub struct UniProtClient {
    client: reqwest::Client,
    endpoint: String,
}

impl UniProtClient {
    /// Create a new client against the configured endpoint.
    ///
    /// The configured contact address is appended to the User-Agent header
    /// so service operators can reach out in case of problems.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let user_agent = if config.contact.is_empty() {
            format!("genemap/{}", env!("CARGO_PKG_VERSION"))
        } else {
            format!("genemap/{} {}", env!("CARGO_PKG_VERSION"), config.contact)
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.uniprot_url.clone(),
        })
    }
}

#[async_trait]
impl MappingClient for UniProtClient {
    fn schema(&self) -> TableSchema {
        TableSchema::UNIPROT
    }

    /// Always produces exactly one record. An empty `target_id` means the
    /// service reported no match; the endpoint gives no way to tell that
    /// apart from an actual empty value, and the ambiguity is passed on to
    /// the caller unchanged.
    async fn map(&self, identifier: &str) -> Result<Vec<MappingRecord>> {
        debug!(endpoint = %self.endpoint, identifier = %identifier, "mapping accession");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("from", "ID"),
                ("to", "P_ENTREZGENEID"),
                ("format", "list"),
                ("query", identifier),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenemapError::service(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let bounded = &bytes[..bytes.len().min(MAX_RESPONSE_BYTES)];
        let mapped = String::from_utf8_lossy(bounded)
            .replace('\n', " ")
            .trim()
            .to_string();

        Ok(vec![MappingRecord::new(identifier, mapped)])
    }
}
