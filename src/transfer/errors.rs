use crate::semantic::{EmbeddingError, SimilarityError};

#[derive(thiserror::Error, Debug)]
pub enum TransferError {
    #[error("Please fill in all four fields (missing: {})", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("{field} must be a number between -1 and 1, got {value}")]
    InvalidSimilarity { field: &'static str, value: f64 },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),
}

impl TransferError {
    /// Whether the error comes from user input rather than the model.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidSimilarity { .. }
        )
    }
}
