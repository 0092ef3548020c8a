//! Comparison service owning the process-wide embedding model.
//!
//! The model is loaded on the first valid comparison and reused afterwards.

use once_cell::sync::OnceCell;
use std::path::PathBuf;

use super::errors::TransferError;
use super::pipeline;
use super::report::TransferReport;
use super::validation::{validate_inputs, CourseInputs};
use crate::config::EmbedderConfig;
use crate::semantic::{EmbeddingError, EmbeddingModel};

pub struct TransferService {
    config: EmbedderConfig,
    base_path: PathBuf,
    /// Initialized at most once, even under concurrent first use. A failed
    /// load leaves the cell empty so the next call tries again.
    model: OnceCell<EmbeddingModel>,
}

impl TransferService {
    /// Create a service. No model is loaded until the first comparison.
    ///
    /// # Arguments
    /// * `config` - Embedder configuration
    /// * `base_path` - Base directory; models are cached under `models/`
    pub fn new(config: EmbedderConfig, base_path: PathBuf) -> Self {
        Self {
            config,
            base_path,
            model: OnceCell::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Compare two courses.
    pub fn compare(&self, inputs: &CourseInputs) -> Result<TransferReport, TransferError> {
        let _span = tracing::info_span!("compare", model = %self.config.model).entered();

        // Validate before the model is touched so bad input never triggers a download.
        if let Err(e) = validate_inputs(inputs) {
            log::warn!("{e}");
            return Err(e);
        }

        let model = self.model()?;
        log::debug!(
            "comparing with {} ({} dimensions)",
            model.name(),
            model.dimensions()
        );
        pipeline::assess(model, inputs)
    }

    fn model(&self) -> Result<&EmbeddingModel, EmbeddingError> {
        self.model.get_or_try_init(|| {
            EmbeddingModel::new(
                &self.config.model,
                self.base_path.clone(),
                self.config.show_download_progress,
            )
        })
    }
}
