// Speech-engine interface - the opaque platform capability behind capture
// Defines the handle traits, event types, and the session's event sink

use tokio::sync::mpsc;

/// Configuration applied to every capture handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Keep recognizing across utterance boundaries
    pub continuous: bool,
    /// Deliver not-yet-final partial results
    pub interim_results: bool,
    /// BCP 47 locale tag for recognition
    pub language: String,
    /// Maximum recognition alternatives per result
    pub max_alternatives: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            language: "en-IN".to_string(),
            max_alternatives: 1,
        }
    }
}

/// One recognized segment within a result batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSegment {
    /// Transcribed text for this segment
    pub transcript: String,
    /// Whether the segment is finalized or may still change
    pub is_final: bool,
}

/// An incremental batch of recognition results, covering the result range
/// starting at `result_index` in engine delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch {
    /// Index of the first result in this batch
    pub result_index: usize,
    /// Segments in engine order
    pub segments: Vec<ResultSegment>,
}

/// Event reported by the engine for one capture handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine confirmed the handle started
    Started,
    /// The handle terminated (any cause the engine treats as an end)
    Ended,
    /// The engine reported an error; the payload is informational only
    Error(String),
    /// A batch of partial/final recognition results
    Result(ResultBatch),
}

/// An engine event tagged with the generation of the sink it was published
/// into. The session drops events whose generation is no longer current,
/// which is what makes a replaced handle's callbacks unobservable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEvent {
    pub generation: u64,
    pub event: EngineEvent,
}

/// The subscription object a capture handle publishes into.
///
/// Owned logic lives in the session: it mints a sink per handle, stamped
/// with the current generation, and bumping the generation detaches every
/// sink minted before the bump. Publishing into a detached sink is a no-op
/// from the session's point of view.
#[derive(Debug, Clone)]
pub struct EngineEventSink {
    generation: u64,
    tx: mpsc::UnboundedSender<TaggedEvent>,
}

impl EngineEventSink {
    pub(crate) fn new(generation: u64, tx: mpsc::UnboundedSender<TaggedEvent>) -> Self {
        Self { generation, tx }
    }

    /// Generation this sink was minted at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Publish an event. Delivery is best-effort; a closed channel means
    /// the session is gone and the event is dropped.
    pub fn publish(&self, event: EngineEvent) {
        let _ = self.tx.send(TaggedEvent {
            generation: self.generation,
            event,
        });
    }
}

/// Outcome of a best-effort engine call.
///
/// Start/stop requests never fail visibly: a refused request is reported
/// as `Ignored` with a reason the caller may log, and no variant requires
/// handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort {
    /// The request was issued to the engine
    Done,
    /// The request was absorbed without taking effect
    Ignored(String),
}

impl BestEffort {
    pub fn ignored(reason: impl Into<String>) -> Self {
        Self::Ignored(reason.into())
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Errors surfaced by capture setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The platform has no speech-recognition capability. Fatal to the
    /// feature; reported once at session creation, never retried.
    #[error("speech recognition is not supported on this platform")]
    Unsupported,
    /// The engine refused to create a handle
    #[error("failed to create capture handle: {0}")]
    HandleCreation(String),
}

/// A live speech-recognition stream. At most one is active per session;
/// it is discarded and replaced rather than reconfigured.
pub trait CaptureHandle: Send {
    /// Request recognition start. Returns immediately; the outcome is
    /// observed later as an [`EngineEvent::Started`] or not at all.
    fn start(&mut self) -> BestEffort;

    /// Request recognition stop. Returns immediately.
    fn stop(&mut self) -> BestEffort;
}

/// The platform speech-recognition capability.
///
/// Availability is probed once per process and treated as a fixed fact.
pub trait SpeechEngine: Send + Sync {
    /// Whether the platform provides speech recognition at all.
    fn is_supported(&self) -> bool;

    /// Create a fresh handle publishing its events into `events`.
    fn create_handle(
        &self,
        config: &CaptureConfig,
        events: EngineEventSink,
    ) -> Result<Box<dyn CaptureHandle>, CaptureError>;
}
