//! End-to-end comparison tests using in-memory embedders.
//!
//! The real model is covered by ignored tests in `transfer::service`.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::semantic::{Embed, EmbeddingError, SimilarityError};
use crate::transfer::combiner::Interpretation;
use crate::transfer::pipeline::assess;
use crate::transfer::{CourseInputs, TransferError};

/// Returns a fixed vector per text and records every text it was asked for.
#[derive(Default)]
struct FakeEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    calls: Mutex<Vec<String>>,
}

impl FakeEmbedder {
    fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Embed for FakeEmbedder {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut calls = self.calls.lock().unwrap();
        texts
            .iter()
            .map(|text| {
                calls.push(text.to_string());
                self.vectors
                    .get(*text)
                    .cloned()
                    .ok_or_else(|| EmbeddingError::EmbeddingFailed(format!("unknown text {text}")))
            })
            .collect()
    }
}

/// Always fails, like a model that ran out of memory.
struct BrokenEmbedder;

impl Embed for BrokenEmbedder {
    fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::EmbeddingFailed("out of memory".to_string()))
    }
}

/// Returns one vector no matter how many texts it gets.
struct ShortBatchEmbedder;

impl Embed for ShortBatchEmbedder {
    fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(vec![vec![1.0, 0.0]])
    }
}

/// Unit vector at the angle whose cosine with [1, 0] is `similarity`.
fn at_similarity(similarity: f64) -> Vec<f32> {
    let sine = (1.0 - similarity * similarity).sqrt();
    vec![similarity as f32, sine as f32]
}

fn embedder_for(description_similarity: f64, title_similarity: f64) -> FakeEmbedder {
    FakeEmbedder::default()
        .with("desc a", vec![1.0, 0.0])
        .with("desc b", at_similarity(description_similarity))
        .with("title a", vec![1.0, 0.0])
        .with("title b", at_similarity(title_similarity))
}

fn inputs() -> CourseInputs {
    CourseInputs::new("desc a", "desc b", "title a", "title b")
}

#[test]
fn test_similar_courses_are_very_high() {
    let embedder = embedder_for(0.70, 0.60);

    let report = assess(&embedder, &inputs()).unwrap();

    assert!((report.description_similarity - 0.70).abs() < 1e-6);
    assert!((report.title_similarity - 0.60).abs() < 1e-6);
    assert!((report.combined_score - 0.8497).abs() < 1e-3);
    assert_eq!(report.interpretation, Interpretation::VeryHigh);
}

#[test]
fn test_loosely_related_courses_are_very_low() {
    let embedder = embedder_for(0.50, 0.50);

    let report = assess(&embedder, &inputs()).unwrap();

    assert!((report.combined_score - 0.1018).abs() < 1e-3);
    assert_eq!(report.interpretation, Interpretation::VeryLow);
}

#[test]
fn test_near_identical_courses() {
    let embedder = embedder_for(0.95, 0.90);

    let report = assess(&embedder, &inputs()).unwrap();

    assert!(report.combined_score > 0.999);
    assert!(report.combined_score < 1.0);
    assert_eq!(report.interpretation, Interpretation::VeryHigh);
}

#[test]
fn test_pairs_are_embedded_together_in_order() {
    let embedder = embedder_for(0.8, 0.8);

    assess(&embedder, &inputs()).unwrap();

    assert_eq!(embedder.calls(), vec!["desc a", "desc b", "title a", "title b"]);
}

#[test]
fn test_untrimmed_text_reaches_embedder() {
    let embedder = FakeEmbedder::default()
        .with("  desc a\n", vec![1.0, 0.0])
        .with("desc b", vec![1.0, 0.0])
        .with("title a", vec![0.0, 1.0])
        .with("\ttitle b", vec![0.0, 1.0]);
    let inputs = CourseInputs::new("  desc a\n", "desc b", "title a", "\ttitle b");

    let report = assess(&embedder, &inputs).unwrap();

    assert!((report.description_similarity - 1.0).abs() < 1e-9);
    assert_eq!(embedder.calls()[0], "  desc a\n");
    assert_eq!(embedder.calls()[3], "\ttitle b");
}

#[test]
fn test_blank_input_never_embeds() {
    let embedder = embedder_for(0.9, 0.9);
    let mut inputs = inputs();
    inputs.title_2 = "   ".to_string();

    let err = assess(&embedder, &inputs).unwrap_err();

    assert!(matches!(err, TransferError::Validation { ref fields } if fields == &vec!["title 2"]));
    assert!(embedder.calls().is_empty());
}

#[test]
fn test_embedding_failure_propagates() {
    let err = assess(&BrokenEmbedder, &inputs()).unwrap_err();

    assert!(matches!(err, TransferError::Embedding(EmbeddingError::EmbeddingFailed(_))));
    assert!(err.to_string().contains("out of memory"));
}

#[test]
fn test_short_batch_is_an_error() {
    let err = assess(&ShortBatchEmbedder, &inputs()).unwrap_err();

    assert!(matches!(
        err,
        TransferError::Embedding(EmbeddingError::UnexpectedBatchSize {
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn test_zero_vector_is_reported() {
    let embedder = FakeEmbedder::default()
        .with("desc a", vec![1.0, 0.0])
        .with("desc b", vec![1.0, 0.0])
        .with("title a", vec![0.0, 0.0])
        .with("title b", vec![1.0, 0.0]);

    let err = assess(&embedder, &inputs()).unwrap_err();

    assert!(matches!(err, TransferError::Similarity(SimilarityError::ZeroNorm)));
}

#[test]
fn test_mismatched_dimensions_are_reported() {
    let embedder = FakeEmbedder::default()
        .with("desc a", vec![1.0, 0.0, 0.0])
        .with("desc b", vec![1.0, 0.0]);

    let err = assess(&embedder, &inputs()).unwrap_err();

    assert!(matches!(
        err,
        TransferError::Similarity(SimilarityError::DimensionMismatch { .. })
    ));
}
