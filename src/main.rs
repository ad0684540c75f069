use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use csv::Writer;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexicon_features::{Featurizer, LexiconConfig, LexiconStore};

/// Turns pre-tokenized texts (one per line, tokens separated by whitespace)
/// into a CSV of lexicon features.
#[derive(Parser, Debug)]
#[command(name = "lexicon-features", version)]
struct Args {
    /// JSON file naming the lexicon data directory and file paths
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the data directory from the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Pre-tokenized input, one document per line
    #[arg(long)]
    input: PathBuf,

    /// CSV destination; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 4)]
    threads: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LexiconConfig::read_config(path)?,
        None => LexiconConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let timer = Instant::now();
    let store = LexiconStore::load(&config)?;
    info!(elapsed = ?timer.elapsed(), "lexicons ready");

    let file_contents = fs::read_to_string(&args.input)?;
    let documents = file_contents
        .lines()
        .map(|line| line.split_whitespace().collect_vec())
        .collect_vec();
    info!(documents = documents.len(), threads = args.threads, "featurizing");

    let featurizer = Featurizer::new(&store);
    let timer = Instant::now();
    let vectors = featurizer.featurize_batch(&documents, args.threads);
    info!(elapsed = ?timer.elapsed(), "featurized");

    let sink: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(Featurizer::feature_names())?;
    for vector in &vectors {
        wtr.write_record(vector.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;

    Ok(())
}
