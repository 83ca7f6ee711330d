//! Errors for microphone access and recording.

use thiserror::Error;

/// Failures reported by a [`MediaPlatform`](super::MediaPlatform).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The user or the platform refused microphone access.
    #[error("microphone permission denied")]
    PermissionDenied,

    /// No usable capture device or API.
    #[error("microphone unavailable: {0}")]
    Unavailable(String),

    /// The capture pipeline failed after the device was acquired.
    #[error("audio capture failed: {0}")]
    Capture(String),
}

/// Failures of the [`AudioRecorder`](super::AudioRecorder) lifecycle.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// `start_recording` was called while a recording is active.
    #[error("a recording is already active")]
    AlreadyRecording,

    /// `stop_recording` was called with nothing to stop.
    #[error("no active recording")]
    NoActiveRecording,

    /// Microphone access was refused or capture could not begin.
    #[error("failed to start recording: {0}")]
    StartFailed(#[source] PlatformError),

    /// The platform failed while finalizing a recording.
    #[error("recording failed: {0}")]
    Platform(#[from] PlatformError),
}
