//! genemap - gene/protein identifier mapping tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use genemap_cli::client::{MouseMineClient, UniProtClient};
use genemap_cli::config::ServiceConfig;
use genemap_cli::mapper::{BatchMapper, DEFAULT_CHECKPOINT_EVERY};
use genemap_cli::{convert, source, writer};
use genemap_common::logging::{init_logging, LogConfig, LogLevel};
use genemap_common::types::{MappingTable, TableSchema};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "genemap")]
#[command(author, version, about = "Gene and protein identifier mapping tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a list of MGI identifiers to NCBI/Entrez gene IDs via MouseMine
    MgiConvert {
        /// Identifier list, one MGI ID in the first field per line
        #[arg(short, long, default_value = "MGI_IDs.csv")]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "MGI_ID_NCBI.csv")]
        output: PathBuf,

        /// Identifiers between checkpoints (0 disables checkpointing)
        #[arg(long, default_value_t = DEFAULT_CHECKPOINT_EVERY)]
        checkpoint_every: usize,

        /// Continue past identifiers that fail instead of aborting the run
        #[arg(long)]
        skip_failures: bool,

        /// MouseMine service base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Download all mouse genes with MGI identifiers and their Entrez IDs
    MgiDownloadAll {
        /// Output CSV path
        #[arg(short, long, default_value = "ALL_MGI_ID_NCBI.csv")]
        output: PathBuf,

        /// MouseMine service base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Map a list of UniProt accessions to Entrez gene IDs
    UniprotConvert {
        /// Identifier list, one accession in the first field per line
        #[arg(short, long, default_value = "allUniprotIDs.csv")]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "UniProt_Entrez_Map.csv")]
        output: PathBuf,

        /// Identifiers between checkpoints (0 disables checkpointing)
        #[arg(long, default_value_t = DEFAULT_CHECKPOINT_EVERY)]
        checkpoint_every: usize,

        /// Continue past identifiers that fail instead of aborting the run
        #[arg(long)]
        skip_failures: bool,

        /// UniProt ID-mapping endpoint URL
        #[arg(long)]
        base_url: Option<String>,

        /// Contact address for the User-Agent header
        #[arg(long)]
        contact: Option<String>,
    },

    /// Rewrite tab-separated ontology dumps as comma-separated files
    TsvToCsv {
        /// Files to convert
        #[arg(default_values = convert::DEFAULT_INPUTS)]
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging from the environment; the verbose flag wins
    let mut log_config = LogConfig::from_env().unwrap_or_else(|_| LogConfig::new());
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    init_logging(&log_config)?;

    match cli.command {
        Command::MgiConvert {
            input,
            output,
            checkpoint_every,
            skip_failures,
            base_url,
        } => {
            let mut config = ServiceConfig::from_env()?;
            if let Some(url) = base_url {
                config.mousemine_url = url;
            }

            info!("Mapping MGI identifiers from {}", input.display());
            let identifiers = source::load(&input)?;
            let client = MouseMineClient::new(&config)?;

            let table = BatchMapper::new(checkpoint_every, skip_failures)
                .run(&identifiers, &client, &output)
                .await?;
            info!("Wrote {} rows to {}", table.len(), output.display());
        },
        Command::MgiDownloadAll { output, base_url } => {
            let mut config = ServiceConfig::from_env()?;
            if let Some(url) = base_url {
                config.mousemine_url = url;
            }

            info!("Downloading all MGI gene identifiers");
            let client = MouseMineClient::new(&config)?;
            let records = client.fetch_all().await?;

            let table = MappingTable::from_records(TableSchema::MGI, records);
            writer::write(&table, &output)?;
            info!("Wrote {} rows to {}", table.len(), output.display());
        },
        Command::UniprotConvert {
            input,
            output,
            checkpoint_every,
            skip_failures,
            base_url,
            contact,
        } => {
            let mut config = ServiceConfig::from_env()?;
            if let Some(url) = base_url {
                config.uniprot_url = url;
            }
            if let Some(contact) = contact {
                config.contact = contact;
            }

            info!("Mapping UniProt accessions from {}", input.display());
            let identifiers = source::load(&input)?;
            let client = UniProtClient::new(&config)?;

            let table = BatchMapper::new(checkpoint_every, skip_failures)
                .run(&identifiers, &client, &output)
                .await?;
            info!("Wrote {} rows to {}", table.len(), output.display());
        },
        Command::TsvToCsv { files } => {
            for file in &files {
                convert::convert(file)?;
            }
        },
    }

    info!("Done");
    Ok(())
}
