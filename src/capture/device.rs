// Audio input device descriptors and advisory stream acquisition
// Binding a recognizer to a specific device is a platform hint, not a
// guarantee; acquisition failure degrades silently to the default device

use serde::{Deserialize, Serialize};

/// An available audio input device, as reported by the platform's
/// enumeration collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioInputDevice {
    /// Opaque platform identifier
    pub id: String,
    /// Human-readable label (may be empty before permission is granted)
    pub label: String,
    /// Whether this is the system default input
    pub is_default: bool,
}

/// Errors from advisory stream acquisition. Never fatal to capture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),
    #[error("failed to acquire audio stream: {0}")]
    AcquisitionFailed(String),
}

/// A dedicated audio stream opened for a specific device. Held only as a
/// hint to steer the recognizer; released on device change and teardown.
pub trait InputStream: Send {
    /// Stop the stream's tracks and release the device.
    fn release(&mut self);
}

/// Collaborator that opens device-bound audio streams.
pub trait DeviceStreamProvider: Send + Sync {
    /// Best-effort: open a dedicated stream for `device_id`.
    fn open_stream(&self, device_id: &str) -> Result<Box<dyn InputStream>, StreamError>;
}

/// Collaborator that enumerates audio input devices for selection UI.
pub trait DeviceEnumerator: Send + Sync {
    /// List available input devices, default device first.
    fn list_input_devices(&self) -> Vec<AudioInputDevice>;
}
