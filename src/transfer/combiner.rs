//! Logistic combination of description and title similarity.
//!
//! The weights come from a regression fit outside this program and are fixed
//! at compile time.

use serde::{Deserialize, Serialize};

/// Coefficients of a two-feature logistic regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticWeights {
    pub intercept: f64,
    pub description_weight: f64,
    pub title_weight: f64,
}

impl LogisticWeights {
    /// Weights of the course transfer model.
    pub const COURSE_TRANSFER: LogisticWeights = LogisticWeights {
        intercept: -13.969,
        description_weight: 15.533,
        title_weight: 8.048,
    };

    /// Linear predictor (log-odds) for a pair of similarities.
    pub fn logit(&self, description_similarity: f64, title_similarity: f64) -> f64 {
        self.intercept
            + self.description_weight * description_similarity
            + self.title_weight * title_similarity
    }

    /// Probability that the course transfers, strictly inside (0, 1).
    pub fn combine(&self, description_similarity: f64, title_similarity: f64) -> f64 {
        let z = self.logit(description_similarity, title_similarity);
        let p = 1.0 / (1.0 + (-z).exp());

        // f64 saturates to exactly 0 or 1 once |z| is large enough.
        p.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
    }
}

/// Combine two similarities with the course transfer weights.
pub fn combine(description_similarity: f64, title_similarity: f64) -> f64 {
    LogisticWeights::COURSE_TRANSFER.combine(description_similarity, title_similarity)
}

/// Human-readable band for a combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interpretation {
    #[serde(rename = "Very Low Transferability")]
    VeryLow,
    #[serde(rename = "Low Transferability")]
    Low,
    #[serde(rename = "Moderate Transferability")]
    Moderate,
    #[serde(rename = "High Transferability")]
    High,
    #[serde(rename = "Very High Transferability")]
    VeryHigh,
}

impl Interpretation {
    /// Map a combined score to its band. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::VeryHigh
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.4 {
            Self::Moderate
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High Transferability",
            Self::High => "High Transferability",
            Self::Moderate => "Moderate Transferability",
            Self::Low => "Low Transferability",
            Self::VeryLow => "Very Low Transferability",
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
