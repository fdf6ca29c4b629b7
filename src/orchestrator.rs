// Session orchestrator - unified always-listening flow
// Handles: engine event pump → utterance boundary → normalize → classify →
// answer hand-off, plus re-arming capture after processing
//
// This wiring decouples the capture state machine from the classifier and
// the answer collaborator, so each can be exercised on its own.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::answer::AnswerService;
use crate::capture::{BestEffort, CaptureSession, CaptureState, SessionChannels};
use crate::events::{
    current_timestamp, AnswerEventEmitter, AnswerFailedPayload, AnswerReadyPayload,
    CaptureEventEmitter, ListeningStartedPayload, ListeningStoppedPayload,
    QuestionAcceptedPayload, QuestionRejectedPayload,
};
use crate::history::{ChatMessage, MessageStore};
use crate::text::{normalize, QuestionClassifier};

/// Delay before re-arming capture after answer processing settles.
pub const DEFAULT_REARM_DELAY_MS: u64 = 1000;

/// Thin wiring between the capture session, the classifier, and the
/// external answer service.
///
/// The orchestrator owns the single consumer of the session's engine
/// events. When capture goes inactive with a pending transcript, that
/// utterance is taken, normalized, and classified; accepted questions are
/// handed to the [`AnswerService`] and the exchange is appended to an
/// optional [`MessageStore`].
pub struct SessionOrchestrator<C, A>
where
    C: CaptureEventEmitter + 'static,
    A: AnswerEventEmitter + 'static,
{
    session: Arc<Mutex<CaptureSession>>,
    answers: Arc<dyn AnswerService>,
    capture_emitter: Arc<C>,
    answer_emitter: Arc<A>,
    classifier: QuestionClassifier,
    store: Option<Arc<dyn MessageStore>>,
    rearm_delay: Duration,
}

impl<C, A> SessionOrchestrator<C, A>
where
    C: CaptureEventEmitter + Send + Sync + 'static,
    A: AnswerEventEmitter + Send + Sync + 'static,
{
    pub fn new(
        session: Arc<Mutex<CaptureSession>>,
        answers: Arc<dyn AnswerService>,
        capture_emitter: Arc<C>,
        answer_emitter: Arc<A>,
    ) -> Self {
        Self {
            session,
            answers,
            capture_emitter,
            answer_emitter,
            classifier: QuestionClassifier::new(),
            store: None,
            rearm_delay: Duration::from_millis(DEFAULT_REARM_DELAY_MS),
        }
    }

    /// Add a chat-history collaborator (builder pattern)
    pub fn with_message_store(mut self, store: Arc<dyn MessageStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set a custom re-arm delay (builder pattern)
    pub fn with_rearm_delay(mut self, delay: Duration) -> Self {
        self.rearm_delay = delay;
        self
    }

    /// Toggle the always-listening policy. Re-enabling issues an
    /// immediate start so the user does not wait for the next engine end.
    pub fn set_auto_restart(&self, enabled: bool) {
        let mut session = self.session.lock();
        session.set_auto_restart(enabled);
        if enabled {
            let _ = session.try_start();
        }
    }

    /// Switch the preferred input device.
    pub fn set_device(&self, device_id: Option<String>) -> BestEffort {
        self.session.lock().set_device(device_id)
    }

    /// Stop capture and leave it stopped until explicitly re-enabled.
    pub fn stop_listening(&self) -> BestEffort {
        let mut session = self.session.lock();
        session.set_auto_restart(false);
        session.stop()
    }

    /// Dispose the capture session for good.
    pub fn shutdown(&self) {
        self.session.lock().dispose();
    }

    /// Drive the engine event pump until the session is disposed.
    ///
    /// Single consumer: events are applied to the session in delivery
    /// order, capture status transitions are emitted, and each utterance
    /// is processed when capture goes inactive with text pending.
    pub async fn run(self: Arc<Self>, mut channels: SessionChannels) {
        crate::info!("[orchestrator] event pump started");

        while let Some(event) = channels.engine_events.recv().await {
            // Lock scope ends before any await below
            let (previous, next, alive) = {
                let mut session = self.session.lock();
                let previous = session.state();
                session.handle_event(event);
                (previous, session.state(), session.is_alive())
            };
            if !alive {
                break;
            }

            if next == CaptureState::Active && previous != CaptureState::Active {
                self.capture_emitter
                    .emit_listening_started(ListeningStartedPayload {
                        timestamp: current_timestamp(),
                    });
            }

            if previous == CaptureState::Active && next != CaptureState::Active {
                self.capture_emitter
                    .emit_listening_stopped(ListeningStoppedPayload {
                        timestamp: current_timestamp(),
                    });

                // Utterance boundary: capture went inactive, so whatever
                // the session accumulated is the finished utterance
                let pending = {
                    let session = self.session.lock();
                    let text = session.latest_transcript();
                    if !text.trim().is_empty() {
                        session.reset_transcript();
                    }
                    text
                };
                if !pending.trim().is_empty() {
                    self.process_utterance(pending).await;
                }
            }
        }

        crate::info!("[orchestrator] event pump stopped");
    }

    /// Normalize, classify, and (if accepted) answer one utterance.
    async fn process_utterance(&self, raw: String) {
        let question = normalize(&raw);

        if !self.classifier.is_question(&question) {
            crate::debug!("[orchestrator] utterance rejected: '{}'", question);
            self.answer_emitter
                .emit_question_rejected(QuestionRejectedPayload {
                    utterance: question,
                    timestamp: current_timestamp(),
                });
            return;
        }

        crate::info!("[orchestrator] question accepted: '{}'", question);
        self.answer_emitter
            .emit_question_accepted(QuestionAcceptedPayload {
                question: question.clone(),
                timestamp: current_timestamp(),
            });
        if let Some(store) = &self.store {
            store.append(ChatMessage::user(question.clone()));
        }

        let started = Instant::now();
        match self.answers.generate(&question).await {
            Ok(answer) => {
                let duration_ms = started.elapsed().as_millis() as u64;
                crate::info!("[orchestrator] answer ready in {}ms", duration_ms);
                if let Some(store) = &self.store {
                    store.append(ChatMessage::assistant(answer.clone()));
                }
                self.answer_emitter.emit_answer_ready(AnswerReadyPayload {
                    question,
                    answer,
                    duration_ms,
                });
            }
            Err(e) => {
                crate::warn!("[orchestrator] answer generation failed: {}", e);
                self.answer_emitter.emit_answer_failed(AnswerFailedPayload {
                    question,
                    error: e.to_string(),
                });
            }
        }

        // Re-arm listening once processing settles, whatever the answer
        // outcome; capture must appear to keep working throughout
        let session = self.session.clone();
        let delay = self.rearm_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = session.lock();
            if session.is_alive() && session.auto_restart_enabled() {
                let _ = session.try_start();
            }
        });
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
