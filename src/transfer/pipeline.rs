//! validate → embed → compare → combine.

use super::errors::TransferError;
use super::report::TransferReport;
use super::validation::{validate_inputs, CourseInputs};
use crate::semantic::{cosine_similarity, Embed, EmbeddingError};

/// Run one comparison with the given embedder.
///
/// Nothing is embedded unless all four inputs pass validation.
pub fn assess<E>(embedder: &E, inputs: &CourseInputs) -> Result<TransferReport, TransferError>
where
    E: Embed + ?Sized,
{
    validate_inputs(inputs)?;

    let description_similarity =
        pair_similarity(embedder, &inputs.description_1, &inputs.description_2)?;
    log::debug!("description similarity={description_similarity}");

    let title_similarity = pair_similarity(embedder, &inputs.title_1, &inputs.title_2)?;
    log::debug!("title similarity={title_similarity}");

    let report = TransferReport::from_similarities(description_similarity, title_similarity);
    log::debug!(
        "combined score={} interpretation={}",
        report.combined_score,
        report.interpretation
    );

    Ok(report)
}

/// Embed both texts as one batch and compare them.
fn pair_similarity<E>(embedder: &E, first: &str, second: &str) -> Result<f64, TransferError>
where
    E: Embed + ?Sized,
{
    let embeddings = embedder.embed_batch(&[first, second])?;

    match embeddings.as_slice() {
        [a, b] => Ok(cosine_similarity(a, b)?),
        other => Err(EmbeddingError::UnexpectedBatchSize {
            expected: 2,
            got: other.len(),
        }
        .into()),
    }
}
