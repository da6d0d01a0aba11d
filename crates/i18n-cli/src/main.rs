//! i18n merge CLI
//!
//! Command-line tool for merging paragraph translations from a source
//! document into a target document.

use clap::Parser;
use i18n_core::{load_document, merge, save_document, Statistics};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "i18n-merge")]
#[command(about = "Merge i18n translations from one JSON document into another", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Document to enrich; its paragraphs must already have i18n mappings
    #[arg(allow_hyphen_values = true)]
    target_file: PathBuf,

    /// Document supplying the translations
    #[arg(allow_hyphen_values = true)]
    source_file: PathBuf,

    /// Path to write the merged document to
    #[arg(allow_hyphen_values = true)]
    output_file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: i18n-merge <target_file> <source_file> <output_file>");
    println!("Example: i18n-merge target_fr.json source_en.json merged_output.json");
}

/// Log to stderr so stdout only carries progress and the summary
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> i18n_core::Result<()> {
    println!("Loading target file: {}", cli.target_file.display());
    let mut target = load_document(&cli.target_file)?;

    println!("Loading source file: {}", cli.source_file.display());
    let source = load_document(&cli.source_file)?;

    println!("Merging i18n translations...");
    let report = merge(&mut target, &source);
    debug!(?report, "merge report");

    println!("Saving merged data to: {}", cli.output_file.display());
    save_document(&target, &cli.output_file)?;

    let stats = Statistics::collect(&target);

    println!();
    println!("Merge completed successfully!");
    println!("{}", stats);

    Ok(())
}
