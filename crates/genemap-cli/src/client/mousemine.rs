//! MouseMine structured query client
//!
//! Translates MGI identifiers to NCBI/Entrez gene numbers by POSTing
//! InterMine path queries to `<base>/query/results` and reading the
//! tab-separated result rows.

use super::MappingClient;
use crate::config::ServiceConfig;
use async_trait::async_trait;
use genemap_common::types::{MappingRecord, TableSchema};
use genemap_common::{GenemapError, Result};
use std::time::Duration;
use tracing::debug;

/// Views requested from the Gene table, in output order.
const GENE_VIEWS: &str = "Gene.primaryIdentifier Gene.symbol Gene.ncbiGeneNumber";

/// Client for the MouseMine (InterMine) web service
pub struct MouseMineClient {
    client: reqwest::Client,
    base_url: String,
}

impl MouseMineClient {
    /// Create a new client against the configured service base URL
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.mousemine_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every mouse gene carrying an `MGI:` primary identifier, sorted
    /// ascending by identifier, in a single request.
    ///
    /// The service is trusted to return the full result set; there is no
    /// pagination, so a server-side truncation would go unnoticed.
    pub async fn fetch_all(&self) -> Result<Vec<MappingRecord>> {
        let query = format!(
            r#"<query model="genomic" view="{GENE_VIEWS}" sortOrder="Gene.primaryIdentifier asc" constraintLogic="A and B"><constraint path="Gene.organism.shortName" op="=" value="M. musculus" code="A"/><constraint path="Gene.primaryIdentifier" op="CONTAINS" value="MGI:" code="B"/></query>"#
        );
        self.run_query(&query).await
    }

    /// POST a path-query and parse the tab-separated response rows
    async fn run_query(&self, query_xml: &str) -> Result<Vec<MappingRecord>> {
        let url = format!("{}/query/results", self.base_url);
        debug!(url = %url, "running mousemine query");

        let response = self
            .client
            .post(&url)
            .form(&[("query", query_xml), ("format", "tab")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenemapError::service(status.as_u16(), body));
        }

        parse_tab_rows(&body)
    }
}

#[async_trait]
impl MappingClient for MouseMineClient {
    fn schema(&self) -> TableSchema {
        TableSchema::MGI
    }

    async fn map(&self, identifier: &str) -> Result<Vec<MappingRecord>> {
        let query = format!(
            r#"<query model="genomic" view="{GENE_VIEWS}"><constraint path="Gene.primaryIdentifier" op="=" value="{}" code="A"/></query>"#,
            xml_escape(identifier)
        );
        self.run_query(&query).await
    }
}

/// Parse tab-separated result rows into mapping records.
///
/// Each row must carry exactly the three requested views. InterMine quotes
/// string cells in tab output; surrounding quotes are stripped.
fn parse_tab_rows(body: &str) -> Result<Vec<MappingRecord>> {
    let mut records = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(GenemapError::parse(format!(
                "expected 3 tab-separated fields, got {}: {:?}",
                fields.len(),
                line
            )));
        }

        let mut cells = fields.iter().map(|f| f.trim().trim_matches('"'));
        let primary = cells.next().unwrap_or_default();
        let symbol = cells.next().unwrap_or_default();
        let ncbi = cells.next().unwrap_or_default();

        records.push(MappingRecord::with_symbol(primary, symbol, ncbi));
    }

    Ok(records)
}

/// Escape a value for embedding in a path-query XML attribute
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_rows_single_match() {
        let records = parse_tab_rows("MGI:1918911\tPax6\t18508\n").unwrap();
        assert_eq!(
            records,
            vec![MappingRecord::with_symbol("MGI:1918911", "Pax6", "18508")]
        );
    }

    #[test]
    fn test_parse_tab_rows_strips_quotes() {
        let records = parse_tab_rows("\"MGI:1918911\"\t\"Pax6\"\t\"18508\"\n").unwrap();
        assert_eq!(records[0].symbol.as_deref(), Some("Pax6"));
        assert_eq!(records[0].target_id, "18508");
    }

    #[test]
    fn test_parse_tab_rows_empty_body_is_no_match() {
        assert!(parse_tab_rows("").unwrap().is_empty());
        assert!(parse_tab_rows("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tab_rows_rejects_short_rows() {
        let result = parse_tab_rows("MGI:1918911\tPax6\n");
        assert!(matches!(result, Err(GenemapError::Parse(_))));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("MGI:1918911"), "MGI:1918911");
        assert_eq!(xml_escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
