//! Answer-generation model selection.

use serde::{Deserialize, Serialize};

/// The model used for answer generation.
///
/// Model selection is a static choice between two backend identifiers; there
/// is no routing logic behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiModel {
    /// Low-latency default.
    #[default]
    Fast,
    /// Slower, more thorough generation.
    Deep,
}

impl AiModel {
    /// The backend model identifier submitted with generation requests.
    pub fn model_id(self) -> &'static str {
        match self {
            AiModel::Fast => "openai/gpt-oss-120b",
            AiModel::Deep => "openai/gpt-oss-120b-reasoning",
        }
    }
}
