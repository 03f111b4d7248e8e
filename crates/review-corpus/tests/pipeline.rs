//! End-to-end tests for the tokenize-and-cache pipeline.
//!
//! Exercises the full stack the way a caller would: real corpus files on
//! disk, the English cleaner, and cache blobs written next to the sources.

use std::fs;
use std::path::PathBuf;

use review_corpus::{
    cache_exists, CacheError, CorpusCache, CorpusMode, ReviewTokenizer, TokenizedCorpus, CACHE_EXT,
};
use tempfile::TempDir;
use text_cleaner::EnglishCleaner;

fn english_cache() -> CorpusCache<EnglishCleaner> {
    CorpusCache::new(ReviewTokenizer::new(EnglishCleaner::new()))
}

fn write_corpus(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("reviews.data");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn cold_run_tokenizes_and_warm_run_replays() {
    let dir = TempDir::new().unwrap();
    let source = write_corpus(
        &dir,
        &["+1Space, station!", "-1Awful popcorn", "+1Rated 42 1337"],
    );

    assert!(!cache_exists(&source).unwrap());

    let cold = english_cache()
        .load(&source, false, CorpusMode::Training)
        .unwrap();
    assert!(cache_exists(&source).unwrap());
    assert_eq!(cold.len(), 3);

    match &cold {
        TokenizedCorpus::Training(examples) => {
            let ids: Vec<&str> = examples.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["positive_0", "negative_1", "positive_2"]);
            // Punctuation is stripped and case folded by the cleaner.
            assert_eq!(examples[0].tokens, vec!["space", "station"]);
            // Numbers survive cleaning.
            assert!(examples[2].tokens.contains(&"42".to_string()));
            assert!(examples[2].tokens.contains(&"1337".to_string()));
        }
        TokenizedCorpus::Plain(_) => panic!("expected training corpus"),
    }

    let warm = english_cache()
        .load(&source, true, CorpusMode::Training)
        .unwrap();
    assert_eq!(warm, cold);
}

#[test]
fn cached_mode_must_match_requested_mode() {
    let dir = TempDir::new().unwrap();
    let source = write_corpus(&dir, &["+1Space, station!"]);

    english_cache()
        .load(&source, false, CorpusMode::Plain)
        .unwrap();

    let err = english_cache()
        .load(&source, true, CorpusMode::Training)
        .unwrap_err();
    assert!(matches!(
        err,
        CacheError::ModeMismatch {
            cached: CorpusMode::Plain,
            requested: CorpusMode::Training,
        }
    ));

    // Re-tokenizing in the requested mode replaces the blob.
    let corpus = english_cache()
        .load(&source, false, CorpusMode::Training)
        .unwrap();
    assert_eq!(corpus.mode(), CorpusMode::Training);
    let reloaded = english_cache()
        .load(&source, true, CorpusMode::Training)
        .unwrap();
    assert_eq!(reloaded, corpus);
}

#[test]
fn staleness_is_the_callers_decision() {
    let dir = TempDir::new().unwrap();
    let source = write_corpus(&dir, &["+1Space, station!"]);

    let original = english_cache()
        .load(&source, false, CorpusMode::Plain)
        .unwrap();

    // Edit the source under the cache. A cached load still replays the
    // old blob; only a forced re-tokenization picks up the change.
    fs::write(&source, "+1Space, station!\n-1Awful popcorn").unwrap();

    let stale = english_cache()
        .load(&source, true, CorpusMode::Plain)
        .unwrap();
    assert_eq!(stale, original);
    assert_eq!(stale.len(), 1);

    let fresh = english_cache()
        .load(&source, false, CorpusMode::Plain)
        .unwrap();
    assert_eq!(fresh.len(), 2);

    let replayed = english_cache()
        .load(&source, true, CorpusMode::Plain)
        .unwrap();
    assert_eq!(replayed, fresh);
}

#[test]
fn blob_sits_next_to_the_source_file() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("corpora");
    fs::create_dir(&nested).unwrap();
    let source = nested.join("train.data");
    fs::write(&source, "+1Space, station!").unwrap();

    english_cache()
        .load(&source, false, CorpusMode::Plain)
        .unwrap();

    assert!(nested.join("train.tok").exists());
    assert_eq!(source.with_extension(CACHE_EXT), nested.join("train.tok"));
}
