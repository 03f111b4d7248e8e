//! Review file tokenization.
//!
//! A corpus file holds one tagged review per line. [`ReviewTokenizer`] reads
//! the file line by line, splits off each sentiment tag, normalizes the body
//! through a [`TextCleaner`], and collects the results either as bare token
//! lists or as labelled training examples.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use text_cleaner::TextCleaner;
use thiserror::Error;
use tracing::debug;

use crate::sentiment::{self, TagError};

/// Token list produced from a single review body.
pub type TokenizedReview = Vec<String>;

/// Upper bound on lines read from a corpus file when none is configured.
pub const DEFAULT_MAX_LINES: usize = 5010;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("line {line}: {source}")]
    Tag { line: usize, source: TagError },
    #[error("corpus io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A tokenized review paired with a stable training identifier.
///
/// The identifier is `{sentiment}_{index}` where the index is the review's
/// zero-based position in the source file, so identifiers are unique per
/// corpus and stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledExample {
    pub id: String,
    pub tokens: TokenizedReview,
}

/// Output shape requested from the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusMode {
    /// Bare token lists, order matching the source file.
    Plain,
    /// Token lists labelled with sentiment-derived identifiers.
    Training,
}

/// A fully tokenized corpus in one of the two output shapes.
///
/// Only the inner vectors are serialized (the cache header records which
/// shape a blob holds), so the enum itself carries no serde derives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizedCorpus {
    Plain(Vec<TokenizedReview>),
    Training(Vec<LabelledExample>),
}

impl TokenizedCorpus {
    pub fn mode(&self) -> CorpusMode {
        match self {
            TokenizedCorpus::Plain(_) => CorpusMode::Plain,
            TokenizedCorpus::Training(_) => CorpusMode::Training,
        }
    }

    /// Number of reviews in the corpus.
    pub fn len(&self) -> usize {
        match self {
            TokenizedCorpus::Plain(reviews) => reviews.len(),
            TokenizedCorpus::Training(examples) => examples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Line-oriented tokenizer over tagged review files.
pub struct ReviewTokenizer<C> {
    cleaner: C,
    max_lines: usize,
}

impl<C: TextCleaner> ReviewTokenizer<C> {
    /// Tokenizer with the default line cap of [`DEFAULT_MAX_LINES`].
    pub fn new(cleaner: C) -> Self {
        Self {
            cleaner,
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Override the maximum number of lines read per file.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Tokenize every line of `path` up to the configured cap.
    ///
    /// Lines past the cap are silently ignored. Each kept line is split into
    /// sentiment and body, the body normalized through the cleaner, and the
    /// result shaped according to `mode`. A line too short to carry a tag
    /// fails the whole run with the offending line number.
    pub fn tokenize_file(&self, path: &Path, mode: CorpusMode) -> Result<TokenizedCorpus> {
        let reader = BufReader::new(File::open(path)?);

        let mut corpus = match mode {
            CorpusMode::Plain => TokenizedCorpus::Plain(Vec::new()),
            CorpusMode::Training => TokenizedCorpus::Training(Vec::new()),
        };

        for (index, line) in reader.lines().take(self.max_lines).enumerate() {
            let line = line?;
            let (sentiment, body) = sentiment::split_tagged_line(&line)
                .map_err(|source| CorpusError::Tag { line: index, source })?;
            let tokens = self.cleaner.normalize(body);

            match &mut corpus {
                TokenizedCorpus::Plain(reviews) => reviews.push(tokens),
                TokenizedCorpus::Training(examples) => examples.push(LabelledExample {
                    id: format!("{sentiment}_{index}"),
                    tokens,
                }),
            }
        }

        debug!(
            "Tokenized {} review(s) from {} ({:?} mode)",
            corpus.len(),
            path.display(),
            mode
        );
        Ok(corpus)
    }
}
