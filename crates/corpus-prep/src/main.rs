//! corpus-prep: Tokenize a sentiment-tagged review file into the disk cache.
//!
//! Runs the review-corpus pipeline from the command line: tokenize a corpus
//! (or replay its cache blob), report what happened, and optionally dump the
//! result as JSON for inspection.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use review_corpus::{
    cache_exists, cache_path, CorpusCache, CorpusMode, ReviewTokenizer, TokenizedCorpus,
    DEFAULT_MAX_LINES,
};
use text_cleaner::{EnglishCleaner, TextCleaner, WhitespaceCleaner};

#[derive(Parser, Debug)]
#[command(name = "corpus-prep")]
#[command(about = "Tokenize sentiment-tagged review files")]
struct Args {
    /// Path to the review corpus file
    corpus: PathBuf,

    /// Emit labelled training examples instead of bare token lists
    #[arg(long)]
    training: bool,

    /// Maximum number of lines to read from the corpus
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Re-tokenize even if a cache blob exists
    #[arg(long)]
    refresh: bool,

    /// Skip stopword removal and stemming (whitespace split only)
    #[arg(long)]
    raw: bool,

    /// Print the tokenized corpus as JSON to stdout
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging - respects RUST_LOG env var, defaults to info (or debug with --verbose)
    let default_filter = if args.verbose {
        "debug,corpus_prep=debug"
    } else {
        "info,corpus_prep=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mode = if args.training {
        CorpusMode::Training
    } else {
        CorpusMode::Plain
    };

    let cleaner: Box<dyn TextCleaner> = if args.raw {
        debug!("using whitespace cleaner");
        Box::new(WhitespaceCleaner)
    } else {
        debug!("using english cleaner");
        Box::new(EnglishCleaner::new())
    };

    let tokenizer = ReviewTokenizer::new(cleaner).with_max_lines(args.max_lines);
    let cache = CorpusCache::new(tokenizer);

    let cached = !args.refresh && cache_exists(&args.corpus)?;
    if cached {
        info!("Replaying cache blob: {}", cache_path(&args.corpus)?.display());
    } else {
        info!("Tokenizing corpus: {}", args.corpus.display());
    }

    let corpus = cache.load(&args.corpus, cached, mode)?;
    info!(
        "Corpus ready: {} review(s), mode {:?}",
        corpus.len(),
        corpus.mode()
    );

    if args.dump {
        let json = match &corpus {
            TokenizedCorpus::Plain(reviews) => serde_json::to_string_pretty(reviews)?,
            TokenizedCorpus::Training(examples) => serde_json::to_string_pretty(examples)?,
        };
        println!("{json}");
    }

    Ok(())
}
