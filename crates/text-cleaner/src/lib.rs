#![deny(clippy::all)]

//! Text normalization for review tokenization.
//!
//! The corpus pipeline treats cleaning as a pluggable step: anything that
//! implements [`TextCleaner`] can turn raw review text into a sequence of
//! normalized tokens. Two implementations are provided:
//! - [`EnglishCleaner`] - case folding, punctuation splitting, stopword
//!   removal, and Snowball stemming
//! - [`WhitespaceCleaner`] - lowercase + whitespace split only

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Turns raw text into a sequence of normalized tokens.
///
/// Implementations decide what "normalized" means (casing, filtering,
/// stemming); callers only rely on the output being split into discrete
/// terms in document order.
pub trait TextCleaner {
    /// Normalize `text` into a token sequence.
    fn normalize(&self, text: &str) -> Vec<String>;
}

// Allows callers to pick an implementation at runtime behind Box<dyn TextCleaner>.
impl<T: TextCleaner + ?Sized> TextCleaner for Box<T> {
    fn normalize(&self, text: &str) -> Vec<String> {
        (**self).normalize(text)
    }
}

/// Full English cleaning pipeline: lowercase, split on whitespace and ASCII
/// punctuation, drop English stopwords, stem with the Snowball algorithm.
///
/// This matches the preprocessing commonly applied before training document
/// embeddings, where inflected forms ("connected", "connecting") should map
/// to one term and high-frequency function words carry no signal.
pub struct EnglishCleaner {
    stemmer: Stemmer,
    stopwords: HashSet<String>,
}

impl EnglishCleaner {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords: stop_words::get(stop_words::LANGUAGE::English)
                .into_iter()
                .collect(),
        }
    }
}

impl Default for EnglishCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner for EnglishCleaner {
    fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stopwords.contains(*token))
            .map(|token| self.stemmer.stem(token).to_string())
            .collect()
    }
}

/// Minimal cleaner: lowercase and split on whitespace.
///
/// Keeps stopwords and skips stemming, so the output maps one-to-one onto
/// the words of the input. Useful in tests and for inspecting how a corpus
/// splits before any filtering.
pub struct WhitespaceCleaner;

impl TextCleaner for WhitespaceCleaner {
    fn normalize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}
