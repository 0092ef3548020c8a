use super::errors::TransferError;

/// The four texts compared in one run.
#[derive(Clone, Debug, Default)]
pub struct CourseInputs {
    pub description_1: String,
    pub description_2: String,
    pub title_1: String,
    pub title_2: String,
}

impl CourseInputs {
    pub fn new(
        description_1: impl Into<String>,
        description_2: impl Into<String>,
        title_1: impl Into<String>,
        title_2: impl Into<String>,
    ) -> Self {
        Self {
            description_1: description_1.into(),
            description_2: description_2.into(),
            title_1: title_1.into(),
            title_2: title_2.into(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("description 1", &self.description_1),
            ("description 2", &self.description_2),
            ("title 1", &self.title_1),
            ("title 2", &self.title_2),
        ]
    }
}

/// Fails if any input is blank after trimming. The inputs themselves are left
/// untouched for embedding.
pub fn validate_inputs(inputs: &CourseInputs) -> Result<(), TransferError> {
    let missing: Vec<&'static str> = inputs
        .fields()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TransferError::Validation { fields: missing })
    }
}

/// Validates a similarity given directly on the command line.
pub fn validate_similarity(field: &'static str, value: f64) -> Result<f64, TransferError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(TransferError::InvalidSimilarity { field, value });
    }
    Ok(value)
}
