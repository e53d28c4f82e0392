//! Corpus ingestion CLI
//!
//! Embeds each non-empty line of a text file and writes the records as a
//! JSON vector store for the article API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rag_core::ingest::{ingest_lines, IngestOptions, DEFAULT_TITLE};
use rag_core::provider::OpenAiProvider;
use rag_core::{JsonFileStore, ProviderConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for ingestion
#[derive(Parser, Debug)]
#[command(name = "corpus-ingest")]
#[command(about = "Embeds a newline-delimited corpus into a JSON vector store")]
struct Args {
    /// Newline-delimited input text
    #[arg(short, long, default_value = "openwebtext_sample.txt")]
    input: PathBuf,

    /// Vector store file to write
    #[arg(short, long, env = "VECTOR_STORE_PATH", default_value = "vectorStore.json")]
    output: PathBuf,

    /// Title stored on every record
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Stop after this many records
    #[arg(long)]
    limit: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ProviderConfig::from_env()?;
    let provider = OpenAiProvider::new(&config)?;

    let input = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let options = IngestOptions {
        title: args.title,
        limit: args.limit,
        ..IngestOptions::default()
    };
    info!(
        "Embedding {} with model {}",
        args.input.display(),
        config.embedding_model
    );
    let report = ingest_lines(&provider, &input, &options).await;

    if !report.failed.is_empty() {
        warn!(
            "{} lines failed to embed: {:?}",
            report.failed.len(),
            report.failed
        );
    }

    let store = JsonFileStore::new(&args.output);
    store.save(&report.records).await?;
    info!(
        "Vector store saved to {} ({} records from {} lines)",
        store.path().display(),
        report.records.len(),
        report.lines
    );

    Ok(())
}
