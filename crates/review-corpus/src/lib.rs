//! review-corpus: Tokenization of sentiment-tagged review files with a disk cache.
//!
//! This crate provides the core functionality for:
//! - Splitting tagged review lines into sentiment and body
//! - Tokenizing whole corpus files into plain or training-labelled output
//! - Caching tokenized corpora next to their source files

pub mod cache;
pub mod corpus;
pub mod sentiment;

pub use cache::{cache_exists, cache_path, CacheError, CorpusCache, CACHE_EXT};
pub use corpus::{
    CorpusError, CorpusMode, LabelledExample, ReviewTokenizer, TokenizedCorpus, TokenizedReview,
    DEFAULT_MAX_LINES,
};
pub use sentiment::{split_tagged_line, Sentiment, TagError, TAG_WIDTH};
