// Session events for UI-collaborator notification
// Defines event payloads and emission traits for testability

use serde::Serialize;

/// Event names as constants for consistency
pub mod event_names {
    pub const LISTENING_STARTED: &str = "listening_started";
    pub const LISTENING_STOPPED: &str = "listening_stopped";
    pub const QUESTION_ACCEPTED: &str = "question_accepted";
    pub const QUESTION_REJECTED: &str = "question_rejected";
    pub const ANSWER_READY: &str = "answer_ready";
    pub const ANSWER_FAILED: &str = "answer_failed";
}

/// Payload for listening_started event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListeningStartedPayload {
    /// ISO 8601 timestamp when the engine confirmed capture
    pub timestamp: String,
}

/// Payload for listening_stopped event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListeningStoppedPayload {
    /// ISO 8601 timestamp when capture went inactive
    pub timestamp: String,
}

/// Payload for question_accepted event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionAcceptedPayload {
    /// The normalized question text handed to the answer service
    pub question: String,
    /// ISO 8601 timestamp of acceptance
    pub timestamp: String,
}

/// Payload for question_rejected event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionRejectedPayload {
    /// The normalized utterance the classifier discarded
    pub utterance: String,
    /// ISO 8601 timestamp of rejection
    pub timestamp: String,
}

/// Payload for answer_ready event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReadyPayload {
    /// The question that was answered
    pub question: String,
    /// Formatted answer text from the answer service
    pub answer: String,
    /// Time the answer service took, in milliseconds
    pub duration_ms: u64,
}

/// Payload for answer_failed event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnswerFailedPayload {
    /// The question that failed
    pub question: String,
    /// Descriptive error message from the answer service
    pub error: String,
}

/// Trait for emitting capture lifecycle events
/// Allows mocking in tests while a UI collaborator subscribes in production
pub trait CaptureEventEmitter: Send + Sync {
    /// Emit listening_started event
    fn emit_listening_started(&self, payload: ListeningStartedPayload);

    /// Emit listening_stopped event
    fn emit_listening_stopped(&self, payload: ListeningStoppedPayload);
}

/// Trait for emitting question/answer flow events
/// Allows mocking in tests while a UI collaborator subscribes in production
pub trait AnswerEventEmitter: Send + Sync {
    /// Emit question_accepted event
    fn emit_question_accepted(&self, payload: QuestionAcceptedPayload);

    /// Emit question_rejected event
    fn emit_question_rejected(&self, payload: QuestionRejectedPayload);

    /// Emit answer_ready event
    fn emit_answer_ready(&self, payload: AnswerReadyPayload);

    /// Emit answer_failed event
    fn emit_answer_failed(&self, payload: AnswerFailedPayload);
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
