use crate::device_file_picker::interface::ImageFile;
use crate::model_catalog::ModelId;
use serde::Deserialize;
use serde_json::Value;

pub const UNEXPECTED_FAILURE_MESSAGE: &str =
    "Something went wrong while checking the animal. Please try again.";

/// Prediction as reported by the server. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    pub top_class: Option<String>,
    pub probability: Option<f64>,
    /// Kept in the order the server wrote the keys.
    pub all_probs: Option<Vec<(String, f64)>>,
    pub raw_label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    top_class: Option<Value>,
    probability: Option<Value>,
    all_probs: Option<Value>,
    raw_label: Option<Value>,
}

impl ClassificationResult {
    /// Fields with an unexpected JSON type are dropped rather than rejected.
    /// Valid JSON that is not an object (`null`, `[]`, `42`) has no fields at all.
    pub fn from_json(body: &[u8]) -> Result<Self, ClassifyError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ClassifyError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        let response: PredictResponse =
            serde_json::from_value(value).map_err(|e| ClassifyError::Decode(e.to_string()))?;

        let all_probs = response
            .all_probs
            .as_ref()
            .and_then(Value::as_object)
            .map(|probs| {
                probs
                    .iter()
                    .filter_map(|(class, prob)| prob.as_f64().map(|p| (class.clone(), p)))
                    .collect()
            });

        Ok(Self {
            top_class: response
                .top_class
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
            probability: response.probability.as_ref().and_then(Value::as_f64),
            all_probs,
            raw_label: response
                .raw_label
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Server responded with {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    InvalidRequest(String),
}

impl ClassifyError {
    /// Message safe to show in the UI. Technical detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::Status(status) => {
                format!("The server responded with status {}. Please try again.", status)
            }
            ClassifyError::Transport(_)
            | ClassifyError::Decode(_)
            | ClassifyError::InvalidRequest(_) => UNEXPECTED_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub trait ImageClassifier {
    fn classify(
        &self,
        model_id: ModelId,
        image: &ImageFile,
    ) -> Result<ClassificationResult, ClassifyError>;
}
