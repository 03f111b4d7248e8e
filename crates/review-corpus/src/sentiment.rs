//! Sentiment tag parsing for raw review lines.
//!
//! Every line in a review file starts with a two-character sentiment tag
//! (`+1` for positive) immediately followed by the review body. This module
//! splits the two apart without touching the body.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Width of the sentiment tag in characters.
pub const TAG_WIDTH: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("line is {len} character(s) long, shorter than the {width}-character sentiment tag", width = TAG_WIDTH)]
    TooShort { len: usize },
}

/// Coarse polarity of a review.
///
/// The corpus encodes polarity in the line tag: `+1` is positive and every
/// other tag counts as negative. There is no "unknown" state - the corpus
/// is binary by construction, so unrecognized tags deliberately fall into
/// [`Sentiment::Negative`] rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Label used when building training identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a raw review line into its sentiment and body.
///
/// The first [`TAG_WIDTH`] characters are the tag (`+1` → positive, anything
/// else → negative); the body is everything after them, returned byte-exact
/// with no trimming. Tag inspection is character-based, so multi-byte
/// characters in the tag position are handled safely.
///
/// Lines shorter than the tag are a [`TagError::TooShort`] error - there is
/// no review to recover from them.
pub fn split_tagged_line(line: &str) -> Result<(Sentiment, &str), TagError> {
    let mut chars = line.char_indices();
    for seen in 0..TAG_WIDTH {
        if chars.next().is_none() {
            return Err(TagError::TooShort { len: seen });
        }
    }
    // Byte offset just past the tag.
    let body_start = chars.next().map_or(line.len(), |(idx, _)| idx);

    let sentiment = if &line[..body_start] == "+1" {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };
    Ok((sentiment, &line[body_start..]))
}
