//! Claimmatch - Insured Entity Matching for Claim Documents
//!
//! Reads claim document text, extracts the insured name, and ranks the
//! roster of known insureds by similarity.

use anyhow::Result;
use clap::Parser;
use claimmatch::config::Config;
use claimmatch::extract::{HeuristicExtractor, NameExtractor};
use claimmatch::matcher::find_best_match;
use claimmatch::roster::Roster;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Claim document to read (plain text); stdin when omitted
    document: Option<PathBuf>,

    /// Roster JSON file (overrides the configured path)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Treat the document text itself as the insured name, skipping extraction
    #[arg(short, long)]
    name: Option<String>,

    /// How many ranked candidates to print
    #[arg(short, long)]
    top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("📋 Claimmatch v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;

    // Load roster
    let roster_path = args
        .roster
        .unwrap_or_else(|| PathBuf::from(&config.roster_path));
    let roster = Roster::load_or_default(&roster_path);
    info!("🗂️ Roster loaded: {} insureds", roster.len());

    // Obtain a candidate name: given directly, or extracted from the document
    let candidate = match args.name {
        Some(name) => name,
        None => {
            let text = read_document(args.document.as_deref())?;
            info!("📄 Document read ({} characters)", text.len());

            let known_names = roster
                .entities()
                .iter()
                .map(|e| e.name.clone())
                .chain(config.extra_known_names.iter().cloned())
                .collect();
            let extractor = HeuristicExtractor::new()?.with_known_names(known_names);

            let extraction = extractor.extract(&text)?;
            info!("🔍 Extracted insured name: '{}'", extraction.candidate());
            extraction.candidate().to_string()
        }
    };

    // Match against the roster
    let result = find_best_match(&candidate, roster.entities());

    match &result.best_entity {
        Some(entity) => {
            let flag = if result.confidence < config.review_threshold {
                " ⚠ review"
            } else {
                ""
            };
            println!(
                "Best match: {} ({}) at {:.0}%{}",
                entity.name,
                entity.internal_id,
                result.confidence * 100.0,
                flag
            );
        }
        None => println!("No match found."),
    }

    let top_n = args.top.unwrap_or(config.top_n);
    for (i, cand) in result.ranked.iter().take(top_n).enumerate() {
        println!(
            "  {}. {} ({}) - {:.0}%",
            i + 1,
            cand.entity.name,
            cand.entity.internal_id,
            cand.similarity * 100.0
        );
    }

    Ok(())
}

/// Read the document from a file, or from stdin when no path is given
fn read_document(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
