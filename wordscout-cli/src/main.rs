use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use wordscout::{QueryConfig, WordMatrix};

/// Search a fixed-size character grid for words, ranked by how often each
/// word appears in the stream.
///
/// Rows are scanned left-to-right and columns top-to-bottom. With no
/// arguments a built-in sample grid and word stream are used.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Grid rows, comma-separated (e.g. "coldy,windy,chill,uvxyy")
    #[arg(short, long, value_delimiter = ',')]
    grid: Vec<String>,

    /// Word stream, comma-separated; repetitions raise a word's rank
    #[arg(short, long, value_delimiter = ',')]
    words: Vec<String>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as a JSON array instead of one word per line
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = QueryConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(QueryConfig {
            grid: cli.grid,
            words: cli.words,
            log_level: cli.log_level.unwrap_or_default(),
        });

    // Fall back to the documented sample query when neither the CLI nor a
    // config file supplied one.
    let sample = QueryConfig::default();
    if config.grid.is_empty() {
        config.grid = sample.grid;
    }
    if config.words.is_empty() {
        config.words = sample.words;
    }
    if config.log_level.is_empty() {
        config.log_level = sample.log_level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(
        "Querying {} row(s) for {} word(s)",
        config.grid.len(),
        config.words.len()
    );

    let matrix = WordMatrix::new(config.grid).context("Cannot search this grid")?;
    let found = matrix.find(config.words);

    if cli.json {
        println!("{}", serde_json::to_string(&found)?);
    } else if found.is_empty() {
        eprintln!("{}", "No words found".yellow());
    } else {
        for word in &found {
            println!("{}", word.green());
        }
    }

    Ok(())
}
