// Answer-generation collaborator interface
// The core hands off a plain question string; formatting, retries, and
// model fallback are the collaborator's concern

use async_trait::async_trait;

/// Errors reported by the answer-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// The service rejected or failed the request
    #[error("answer service failed: {0}")]
    Service(String),
    /// The service returned no usable text
    #[error("answer service returned an empty response")]
    EmptyResponse,
}

/// External service producing a formatted answer for an accepted question.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Generate a formatted answer for `question`.
    async fn generate(&self, question: &str) -> Result<String, AnswerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_error_display() {
        let err = AnswerError::Service("rate limited".to_string());
        assert!(format!("{}", err).contains("rate limited"));

        let err = AnswerError::EmptyResponse;
        assert!(format!("{}", err).contains("empty"));
    }
}
