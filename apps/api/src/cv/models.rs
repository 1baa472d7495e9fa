use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{excerpt, AppError, DETAIL_EXCERPT_CHARS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSummary {
    /// Candidate full name.
    pub name: Option<String>,
    /// City, region or country.
    pub location: Option<String>,
    pub work_experience_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Characters of the (possibly truncated) text sent to the model.
    pub extracted_chars: usize,
    pub summary: CvSummary,
}

impl CvSummary {
    /// Validates the model's structured output.
    ///
    /// A mismatch means the model broke its schema contract, which is reported
    /// as `unexpected_error` rather than a provider failure.
    pub fn from_model_output(value: Value) -> Result<Self, AppError> {
        // serde would otherwise fill the struct positionally from an array
        if !value.is_object() {
            return Err(AppError::Unexpected(format!(
                "Model output is not a JSON object: {}",
                excerpt(&value.to_string(), DETAIL_EXCERPT_CHARS)
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| AppError::Unexpected(format!("Model output does not match the CV summary schema: {e}")))
    }
}
