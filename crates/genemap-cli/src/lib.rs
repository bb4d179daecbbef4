//! genemap library
//!
//! Batch pipelines that map gene/protein identifiers between namespaces by
//! querying remote web services, plus a small TSV-to-CSV reformatter for
//! ontology dump files.
//!
//! # Pipelines
//!
//! - **MGI -> NCBI/Entrez**: one MouseMine structured query per identifier,
//!   or a single bulk enumeration of all mouse genes
//! - **UniProt -> Entrez**: one form POST per accession against UniProt's
//!   ID-mapping endpoint
//!
//! # Example
//!
//! ```no_run
//! use genemap_cli::client::MouseMineClient;
//! use genemap_cli::config::ServiceConfig;
//! use genemap_cli::mapper::BatchMapper;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let client = MouseMineClient::new(&config)?;
//!     let ids = genemap_cli::source::load("MGI_IDs.csv".as_ref())?;
//!     let table = BatchMapper::default()
//!         .run(&ids, &client, "MGI_ID_NCBI.csv".as_ref())
//!         .await?;
//!     println!("{} rows", table.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod mapper;
pub mod progress;
pub mod source;
pub mod writer;
