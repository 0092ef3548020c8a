//! Result of one comparison and its console rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::combiner::{self, Interpretation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    pub description_similarity: f64,
    pub title_similarity: f64,
    pub combined_score: f64,
    pub interpretation: Interpretation,
}

impl TransferReport {
    /// Build a report from two similarities.
    pub fn from_similarities(description_similarity: f64, title_similarity: f64) -> Self {
        let combined_score = combiner::combine(description_similarity, title_similarity);
        Self {
            description_similarity,
            title_similarity,
            combined_score,
            interpretation: Interpretation::from_score(combined_score),
        }
    }
}

/// `0.8123 (81.23%)`
pub fn format_score(value: f64) -> String {
    format!("{:.4} ({:.2}%)", value, value * 100.0)
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transferability analysis complete")?;
        writeln!(f)?;
        writeln!(f, "Similarity scores")?;
        writeln!(
            f,
            "  Descriptions similarity: {}",
            format_score(self.description_similarity)
        )?;
        writeln!(f, "  Titles similarity: {}", format_score(self.title_similarity))?;
        writeln!(f)?;
        writeln!(f, "Combined transferability score")?;
        writeln!(f, "  Transfer likelihood: {}", format_score(self.combined_score))?;
        writeln!(f)?;
        write!(f, "Interpretation: {}", self.interpretation)
    }
}
