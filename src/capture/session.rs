// Continuous capture session - owns one live speech-recognition handle and
// keeps it running across engine errors, terminations, and device changes

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, watch};

use crate::text::auto_correct;

use super::device::{DeviceStreamProvider, InputStream};
use super::engine::{
    BestEffort, CaptureConfig, CaptureError, CaptureHandle, EngineEvent, EngineEventSink,
    ResultBatch, SpeechEngine, TaggedEvent,
};

/// Capture session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaptureState {
    /// No start requested; a handle may or may not exist
    Idle,
    /// Start issued, awaiting engine confirmation
    Starting,
    /// Engine confirmed start; transcripts may arrive
    Active,
    /// Explicit stop in flight
    Stopping,
    /// Engine reported an error; no handle guaranteed alive
    Error,
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Receiving ends of a session's output: the engine event stream (to be
/// pumped into [`CaptureSession::handle_event`]) and the latest-transcript
/// watch channel (replace semantics, no history).
pub struct SessionChannels {
    pub engine_events: mpsc::UnboundedReceiver<TaggedEvent>,
    pub transcripts: watch::Receiver<String>,
}

/// State machine for one continuous capture stream.
///
/// Owns at most one [`CaptureHandle`] and at most one dedicated
/// [`InputStream`] at a time. Engine errors are absorbed and answered with
/// an unconditional restart attempt; the only fatal condition is platform
/// non-support, surfaced once at construction. All event callbacks flow
/// through a generation-tagged sink, and bumping the generation detaches a
/// handle atomically: events from a replaced handle are never observable.
pub struct CaptureSession {
    engine: Arc<dyn SpeechEngine>,
    streams: Option<Arc<dyn DeviceStreamProvider>>,
    config: CaptureConfig,
    state: CaptureState,
    handle: Option<Box<dyn CaptureHandle>>,
    input_stream: Option<Box<dyn InputStream>>,
    device_id: Option<String>,
    generation: u64,
    event_tx: Option<mpsc::UnboundedSender<TaggedEvent>>,
    transcript_tx: watch::Sender<String>,
    auto_restart: bool,
    alive: bool,
}

impl CaptureSession {
    /// Create a session against the platform engine.
    ///
    /// Probes engine support once; [`CaptureError::Unsupported`] is the
    /// single fatal condition and is never retried.
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        streams: Option<Arc<dyn DeviceStreamProvider>>,
        config: CaptureConfig,
    ) -> Result<(Self, SessionChannels), CaptureError> {
        if !engine.is_supported() {
            return Err(CaptureError::Unsupported);
        }

        let (event_tx, engine_events) = mpsc::unbounded_channel();
        let (transcript_tx, transcripts) = watch::channel(String::new());

        let session = Self {
            engine,
            streams,
            config,
            state: CaptureState::Idle,
            handle: None,
            input_stream: None,
            device_id: None,
            generation: 0,
            event_tx: Some(event_tx),
            transcript_tx,
            auto_restart: true,
            alive: true,
        };

        Ok((
            session,
            SessionChannels {
                engine_events,
                transcripts,
            },
        ))
    }

    /// Explicit lifecycle entry point: acquire the advisory stream for the
    /// current device hint (if any) and issue the first start.
    pub fn initialize(&mut self) -> BestEffort {
        crate::info!("[capture] initializing session, device={:?}", self.device_id);
        self.acquire_stream();
        self.try_start()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn auto_restart_enabled(&self) -> bool {
        self.auto_restart
    }

    /// Toggle the always-listening policy consulted when the engine ends.
    pub fn set_auto_restart(&mut self, enabled: bool) {
        self.auto_restart = enabled;
    }

    pub fn selected_device(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// The most recently published transcript value.
    pub fn latest_transcript(&self) -> String {
        self.transcript_tx.borrow().clone()
    }

    /// Clear the published transcript after a consumer has taken it.
    pub fn reset_transcript(&self) {
        self.transcript_tx.send_replace(String::new());
    }

    /// Request recognition start, creating a handle if none exists.
    ///
    /// A synchronously refused start (engine not ready, already running)
    /// is a no-op: the outcome is loggable but the session stays in its
    /// previous state.
    pub fn try_start(&mut self) -> BestEffort {
        if !self.alive {
            return BestEffort::ignored("session disposed");
        }

        if self.handle.is_none() {
            let Some(event_tx) = self.event_tx.as_ref() else {
                return BestEffort::ignored("session disposed");
            };
            let sink = EngineEventSink::new(self.generation, event_tx.clone());
            match self.engine.create_handle(&self.config, sink) {
                Ok(handle) => self.handle = Some(handle),
                Err(e) => {
                    crate::debug!("[capture] handle creation refused: {}", e);
                    return BestEffort::ignored(e.to_string());
                }
            }
        }

        let previous = self.state;
        self.state = CaptureState::Starting;
        let outcome = match self.handle.as_mut() {
            Some(handle) => handle.start(),
            None => BestEffort::ignored("no capture handle"),
        };
        if let BestEffort::Ignored(reason) = &outcome {
            crate::debug!("[capture] start ignored: {}", reason);
            self.state = previous;
        }
        outcome
    }

    /// Explicit stop. Detaches event callbacks before the engine stop is
    /// issued, so a stop-triggered end from the old handle can never race
    /// into an auto-restart. Rests at `Idle`.
    pub fn stop(&mut self) -> BestEffort {
        self.state = CaptureState::Stopping;
        self.detach();
        let outcome = match self.handle.as_mut() {
            Some(handle) => handle.stop(),
            None => BestEffort::ignored("no active handle"),
        };
        self.handle = None;
        self.state = CaptureState::Idle;
        crate::debug!("[capture] session stopped");
        outcome
    }

    /// Switch the preferred input device.
    ///
    /// The same id as currently bound is a guarded no-op. Otherwise the
    /// session is fully torn down (callbacks detached, handle stopped,
    /// dedicated stream released) and a fresh handle is created and
    /// started against the new hint. Stream acquisition is advisory and
    /// degrades silently to the default device.
    pub fn set_device(&mut self, device_id: Option<String>) -> BestEffort {
        if !self.alive {
            return BestEffort::ignored("session disposed");
        }
        if self.device_id == device_id {
            crate::debug!("[capture] device unchanged, skipping teardown");
            return BestEffort::ignored("device unchanged");
        }

        crate::info!(
            "[capture] switching device {:?} -> {:?}",
            self.device_id,
            device_id
        );

        self.detach();
        if let Some(handle) = self.handle.as_mut() {
            let _ = handle.stop();
        }
        self.handle = None;
        self.release_stream();
        self.state = CaptureState::Idle;

        self.device_id = device_id;
        self.acquire_stream();
        self.try_start()
    }

    /// Tear the session down for good. Subsequent events and restart
    /// attempts are dropped rather than re-armed.
    pub fn dispose(&mut self) {
        if !self.alive {
            return;
        }
        crate::info!("[capture] disposing session");
        self.alive = false;
        self.detach();
        if let Some(handle) = self.handle.as_mut() {
            let _ = handle.stop();
        }
        self.handle = None;
        self.release_stream();
        // Closing the event channel lets a pump draining it run dry
        self.event_tx = None;
        self.state = CaptureState::Idle;
    }

    /// Apply one engine event. Events from detached sinks (older
    /// generation) and events arriving after disposal are dropped.
    pub fn handle_event(&mut self, tagged: TaggedEvent) {
        if !self.alive {
            crate::trace!("[capture] event after dispose, dropping");
            return;
        }
        if tagged.generation != self.generation {
            crate::trace!(
                "[capture] stale event from generation {} (current {}), dropping",
                tagged.generation,
                self.generation
            );
            return;
        }

        match tagged.event {
            EngineEvent::Started => {
                crate::debug!("[capture] engine confirmed start");
                self.state = CaptureState::Active;
            }
            EngineEvent::Ended => {
                self.state = CaptureState::Idle;
                if self.auto_restart {
                    crate::debug!("[capture] engine ended, restarting");
                    let _ = self.try_start();
                } else {
                    crate::debug!("[capture] engine ended, auto-restart disabled");
                }
            }
            EngineEvent::Error(payload) => {
                // The payload is informational only; the restart policy is
                // unconditional for every engine-reported error
                crate::debug!("[capture] engine error ({}), restarting", payload);
                self.state = CaptureState::Error;
                let _ = self.try_start();
            }
            EngineEvent::Result(batch) => self.publish_transcript(&batch),
        }
    }

    /// Accumulate a result batch into final-then-interim order, run it
    /// through vocabulary auto-correction, and publish it as the current
    /// transcript value (replacing the previous one).
    fn publish_transcript(&mut self, batch: &ResultBatch) {
        let mut final_text = String::new();
        let mut interim_text = String::new();
        for segment in &batch.segments {
            if segment.is_final {
                final_text.push_str(&segment.transcript);
            } else {
                interim_text.push_str(&segment.transcript);
            }
        }

        let combined = auto_correct(&format!("{}{}", final_text, interim_text));
        crate::trace!(
            "[capture] results from index {}: '{}'",
            batch.result_index,
            combined
        );
        self.transcript_tx.send_replace(combined);
    }

    /// Detach every sink minted so far. Must run before a handle is
    /// stopped or replaced so its late events go unobserved.
    fn detach(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn acquire_stream(&mut self) {
        let (Some(provider), Some(device_id)) = (self.streams.as_ref(), self.device_id.as_ref())
        else {
            return;
        };
        match provider.open_stream(device_id) {
            Ok(stream) => {
                crate::debug!("[capture] dedicated stream opened for {}", device_id);
                self.input_stream = Some(stream);
            }
            Err(e) => {
                crate::debug!(
                    "[capture] stream acquisition failed ({}), using default device",
                    e
                );
            }
        }
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.input_stream.take() {
            stream.release();
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
