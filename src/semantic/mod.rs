//! Text embedding and vector similarity.
//!
//! # Architecture
//!
//! - `embeddings`: Wraps fastembed for embedding generation
//! - `similarity`: Cosine similarity between two embeddings

pub mod embeddings;
mod similarity;

pub use embeddings::{Embed, EmbeddingError, EmbeddingModel, SUPPORTED_MODELS};
pub use similarity::{cosine_similarity, SimilarityError};

/// Default embedding model name
pub const DEFAULT_MODEL: &str = "all-mpnet-base-v2";
