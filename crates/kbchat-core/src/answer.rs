//! Answer provider contract.
//!
//! The answer provider is an external collaborator: given a query and a model
//! identifier it produces an answer payload, or fails with a generation
//! error. The orchestration layer owns catching that failure and substituting
//! a user-visible fallback message.

use crate::chat::Source;
use crate::model::AiModel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Confidence below which the presentation layer surfaces follow-up chips.
pub const FOLLOW_UP_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// An answer produced by a provider, before access filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// The answer text.
    pub content: String,
    /// Provider confidence in `[0, 1]`.
    pub confidence: f32,
    /// Cited sources, unfiltered.
    pub sources: Vec<Source>,
    /// Suggested follow-up questions.
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

/// Failure modes of an answer provider.
#[derive(Error, Debug)]
pub enum AnswerError {
    /// The provider failed to produce an answer.
    #[error("answer generation failed: {0}")]
    Generation(String),

    /// The provider did not complete within its configured bound.
    #[error("answer generation timed out")]
    Timeout,
}

/// An asynchronous answer provider.
///
/// Contract requirements for any implementation, stub or real:
/// - completes (resolves or fails) within a bounded, configurable time;
/// - does not mutate caller state;
/// - is safely callable concurrently.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Generates an answer for the query using the given model.
    async fn generate_answer(
        &self,
        query: &str,
        model: AiModel,
    ) -> Result<AnswerPayload, AnswerError>;
}

/// True iff the answer's confidence is low enough that follow-up suggestions
/// should be surfaced. Advisory for presentation, not enforced by the store.
pub fn should_show_follow_up(confidence: f32) -> bool {
    confidence < FOLLOW_UP_CONFIDENCE_THRESHOLD
}
