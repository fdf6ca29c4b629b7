// Continuous speech capture: the engine interface, advisory device
// binding, and the session state machine that keeps a stream alive

mod device;
mod engine;
mod session;

#[cfg(test)]
pub(crate) mod stub;

pub use device::{
    AudioInputDevice, DeviceEnumerator, DeviceStreamProvider, InputStream, StreamError,
};
pub use engine::{
    BestEffort, CaptureConfig, CaptureError, CaptureHandle, EngineEvent, EngineEventSink,
    ResultBatch, ResultSegment, SpeechEngine, TaggedEvent,
};
pub use session::{CaptureSession, CaptureState, SessionChannels};
