// Scripted engine and stream-provider stubs shared by session and
// orchestrator tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::device::{DeviceStreamProvider, InputStream, StreamError};
use super::engine::{
    BestEffort, CaptureConfig, CaptureError, CaptureHandle, EngineEvent, EngineEventSink,
    SpeechEngine,
};

/// Test double for the platform speech engine. Records start/stop calls
/// and exposes the latest handle's event sink so tests can play the engine
/// side of the protocol.
pub(crate) struct ScriptedEngine {
    supported: bool,
    starts: Arc<AtomicUsize>,
    stops: Arc<AtomicUsize>,
    handles_created: Arc<AtomicUsize>,
    refuse_starts: Arc<AtomicBool>,
    sink: Arc<Mutex<Option<EngineEventSink>>>,
}

impl ScriptedEngine {
    pub(crate) fn new() -> Self {
        Self {
            supported: true,
            starts: Arc::new(AtomicUsize::new(0)),
            stops: Arc::new(AtomicUsize::new(0)),
            handles_created: Arc::new(AtomicUsize::new(0)),
            refuse_starts: Arc::new(AtomicBool::new(false)),
            sink: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub(crate) fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub(crate) fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub(crate) fn handle_count(&self) -> usize {
        self.handles_created.load(Ordering::SeqCst)
    }

    /// Make subsequent start calls refuse synchronously, the way an engine
    /// refuses a start while already running.
    pub(crate) fn refuse_starts(&self, refuse: bool) {
        self.refuse_starts.store(refuse, Ordering::SeqCst);
    }

    /// Sink of the most recently created handle.
    pub(crate) fn current_sink(&self) -> EngineEventSink {
        self.sink
            .lock()
            .unwrap()
            .clone()
            .expect("no handle created yet")
    }

    /// Publish an event as the most recently created handle.
    pub(crate) fn publish(&self, event: EngineEvent) {
        self.current_sink().publish(event);
    }
}

impl SpeechEngine for ScriptedEngine {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create_handle(
        &self,
        _config: &CaptureConfig,
        events: EngineEventSink,
    ) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        self.handles_created.fetch_add(1, Ordering::SeqCst);
        *self.sink.lock().unwrap() = Some(events);
        Ok(Box::new(ScriptedHandle {
            starts: self.starts.clone(),
            stops: self.stops.clone(),
            refuse_starts: self.refuse_starts.clone(),
        }))
    }
}

struct ScriptedHandle {
    starts: Arc<AtomicUsize>,
    stops: Arc<AtomicUsize>,
    refuse_starts: Arc<AtomicBool>,
}

impl CaptureHandle for ScriptedHandle {
    fn start(&mut self) -> BestEffort {
        if self.refuse_starts.load(Ordering::SeqCst) {
            return BestEffort::ignored("recognizer already running");
        }
        self.starts.fetch_add(1, Ordering::SeqCst);
        BestEffort::Done
    }

    fn stop(&mut self) -> BestEffort {
        self.stops.fetch_add(1, Ordering::SeqCst);
        BestEffort::Done
    }
}

/// Stream provider stub recording open/release ordering.
pub(crate) struct StubStreamProvider {
    log: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl StubStreamProvider {
    pub(crate) fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn fail_acquisition(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl DeviceStreamProvider for StubStreamProvider {
    fn open_stream(&self, device_id: &str) -> Result<Box<dyn InputStream>, StreamError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StreamError::AcquisitionFailed("denied".to_string()));
        }
        self.log.lock().unwrap().push(format!("open:{}", device_id));
        Ok(Box::new(StubStream {
            device_id: device_id.to_string(),
            log: self.log.clone(),
        }))
    }
}

struct StubStream {
    device_id: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl InputStream for StubStream {
    fn release(&mut self) {
        self.log
            .lock()
            .unwrap()
            .push(format!("release:{}", self.device_id));
    }
}
