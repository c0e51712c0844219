//! impress-work CLI
//!
//! Normalize and deduplicate JSON work records, or print a fingerprint.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impress_work::{Normalizer, SearchResponse, Work, WorkConfig};

#[derive(Parser)]
#[command(name = "impress-work", version, about = "Normalize and fingerprint bibliographic works")]
struct Cli {
    /// Config file (defaults to ~/.impress/work.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a JSON array of works and print a search response
    Normalize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Merge works that share a fingerprint
        #[arg(long)]
        dedupe: bool,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the fingerprint for a first author and title.
    /// Values are cleaned first, so the hash matches what `normalize` stores.
    Fingerprint {
        #[arg(long)]
        author: String,

        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => WorkConfig::load(path)?,
        None => WorkConfig::load_standard()?,
    };
    let normalizer = Normalizer::from_config(&config);

    match cli.command {
        Command::Normalize { file, dedupe, pretty } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let works: Vec<Work> = serde_json::from_str(&input)?;
            let response = run_normalize(&normalizer, works, dedupe);

            let output = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{output}");
        }
        Command::Fingerprint { author, title } => {
            println!("{}", normalizer.fingerprint(&author, &title));
        }
    }

    Ok(())
}

fn run_normalize(normalizer: &Normalizer, works: Vec<Work>, dedupe: bool) -> SearchResponse {
    let total = works.len();
    let (normalized, failures) = normalizer.normalize_all(works);

    for (index, err) in &failures {
        tracing::warn!("Skipping work #{}: {}", index, err);
    }

    if normalized.is_empty() && !failures.is_empty() {
        return SearchResponse::failed(&failures[0].1);
    }

    let results = if dedupe {
        impress_work::coalesce_by_hash(normalized)
    } else {
        normalized
    };
    tracing::info!("Normalized {} of {} works into {} results", total - failures.len(), total, results.len());

    SearchResponse::ok(results)
}
