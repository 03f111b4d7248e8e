//! Write-through disk cache for tokenized corpora.
//!
//! Tokenizing a corpus is far slower than reading it back, so the tokenized
//! result is persisted next to the source file as a small binary blob:
//!
//! - 4-byte magic (`RVTK`)
//! - format version byte
//! - output mode byte (`0` = plain, `1` = training)
//! - bincode-encoded payload: the bare review vector (plain) or
//!   labelled-example vector (training)
//!
//! The header is enough to reject blobs from a different tool, format
//! revision, or output shape without deserializing the payload. The cache
//! carries no staleness tracking: whether to trust an existing blob is the
//! caller's call.

use std::fs;
use std::path::{Path, PathBuf};

use text_cleaner::TextCleaner;
use thiserror::Error;
use tracing::debug;

use crate::corpus::{CorpusError, CorpusMode, ReviewTokenizer, TokenizedCorpus};

/// Extension of cache files, substituted for the source file's extension.
pub const CACHE_EXT: &str = "tok";

const CACHE_MAGIC: [u8; 4] = *b"RVTK";
const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = CACHE_MAGIC.len() + 2;

pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cannot derive a cache path for {}: no file extension", path.display())]
    MissingExtension { path: PathBuf },
    #[error("cache file is {len} byte(s), shorter than the {header}-byte header", header = HEADER_LEN)]
    TruncatedHeader { len: usize },
    #[error("cache file does not start with the expected magic bytes")]
    BadMagic,
    #[error("cache format version {found} is not supported (current version is {current})", current = FORMAT_VERSION)]
    UnsupportedVersion { found: u8 },
    #[error("cache mode byte {found} does not name a known output mode")]
    UnknownMode { found: u8 },
    #[error("cache holds a {cached:?} corpus but a {requested:?} corpus was requested")]
    ModeMismatch {
        cached: CorpusMode,
        requested: CorpusMode,
    },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache payload error: {0}")]
    Payload(#[from] bincode::Error),
}

/// Cache file path for a corpus source file.
///
/// The source's extension is replaced with [`CACHE_EXT`], so `reviews.data`
/// caches to `reviews.tok` in the same directory. A source path without an
/// extension has no well-defined cache location and is rejected instead of
/// silently mangling the name.
pub fn cache_path(source: &Path) -> Result<PathBuf> {
    if source.extension().is_none() {
        return Err(CacheError::MissingExtension {
            path: source.to_path_buf(),
        });
    }
    Ok(source.with_extension(CACHE_EXT))
}

/// Whether a cache blob exists for the given source file.
pub fn cache_exists(source: &Path) -> Result<bool> {
    Ok(cache_path(source)?.exists())
}

/// Tokenizer wrapped with the write-through cache.
pub struct CorpusCache<C> {
    tokenizer: ReviewTokenizer<C>,
}

impl<C: TextCleaner> CorpusCache<C> {
    pub fn new(tokenizer: ReviewTokenizer<C>) -> Self {
        Self { tokenizer }
    }

    /// Load the tokenized corpus for `source`.
    ///
    /// With `cached` set, the blob next to the source is read back and its
    /// header checked against `mode`; nothing else is validated, and a blob
    /// that fails the header or payload checks is an error rather than a
    /// silent re-tokenization. Without `cached`, the source is tokenized
    /// from scratch and the result written through to disk before being
    /// returned, overwriting any existing blob.
    pub fn load(&self, source: &Path, cached: bool, mode: CorpusMode) -> Result<TokenizedCorpus> {
        let path = cache_path(source)?;

        if cached {
            let bytes = fs::read(&path)?;
            let corpus = decode(&bytes, mode)?;
            debug!("Loaded {} review(s) from cache {}", corpus.len(), path.display());
            return Ok(corpus);
        }

        let corpus = self.tokenizer.tokenize_file(source, mode)?;
        fs::write(&path, encode(&corpus)?)?;
        debug!("Wrote {} review(s) to cache {}", corpus.len(), path.display());
        Ok(corpus)
    }
}

fn encode(corpus: &TokenizedCorpus) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(HEADER_LEN);
    bytes.extend_from_slice(&CACHE_MAGIC);
    bytes.push(FORMAT_VERSION);

    // The mode byte is the only record of the payload's shape: the payload
    // is the bare vector, with no tag of its own.
    match corpus {
        TokenizedCorpus::Plain(reviews) => {
            bytes.push(0);
            bincode::serialize_into(&mut bytes, reviews)?;
        }
        TokenizedCorpus::Training(examples) => {
            bytes.push(1);
            bincode::serialize_into(&mut bytes, examples)?;
        }
    }
    Ok(bytes)
}

fn decode(bytes: &[u8], requested: CorpusMode) -> Result<TokenizedCorpus> {
    if bytes.len() < HEADER_LEN {
        return Err(CacheError::TruncatedHeader { len: bytes.len() });
    }
    if bytes[..CACHE_MAGIC.len()] != CACHE_MAGIC {
        return Err(CacheError::BadMagic);
    }

    let version = bytes[CACHE_MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(CacheError::UnsupportedVersion { found: version });
    }

    let cached = match bytes[CACHE_MAGIC.len() + 1] {
        0 => CorpusMode::Plain,
        1 => CorpusMode::Training,
        found => return Err(CacheError::UnknownMode { found }),
    };
    if cached != requested {
        return Err(CacheError::ModeMismatch { cached, requested });
    }

    // The validated mode byte picks the payload type, so the returned shape
    // always matches the header.
    let payload = &bytes[HEADER_LEN..];
    Ok(match cached {
        CorpusMode::Plain => TokenizedCorpus::Plain(bincode::deserialize(payload)?),
        CorpusMode::Training => TokenizedCorpus::Training(bincode::deserialize(payload)?),
    })
}
