//! Microphone recording.
//!
//! ```text
//!          start_recording            stop_recording
//!   Idle ──────────────────▶ Recording ──────────────▶ Stopped
//!                               ▲                         │
//!                               └──── start_recording ────┘
//! ```
//!
//! Each recording owns its chunk buffer through a `RecordingSession`;
//! the buffer is consumed when the session is finalized, so nothing leaks
//! from one recording into the next.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::blob::{AudioBlob, DEFAULT_AUDIO_MIME};
use super::error::RecorderError;
use super::platform::{CaptureStream, MediaPlatform};

/// Capture hints. Advisory: platforms record at their native format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRecorderOptions {
    /// Preferred sample rate in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// Preferred channel count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
}

/// Lifecycle state of an [`AudioRecorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecorderState {
    /// Never recorded.
    Idle,
    /// A recording is active.
    Recording,
    /// The last recording has been finalized.
    Stopped,
}

/// One active recording: the live stream and the chunks it has produced.
///
/// Dropping a session releases its stream, so an abandoned recording
/// never keeps the microphone open.
struct RecordingSession<S: CaptureStream> {
    stream: S,
    chunks: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl<S: CaptureStream> RecordingSession<S> {
    async fn finish(mut self) -> Result<AudioBlob, RecorderError> {
        let stopped = self.stream.stop().await;
        self.stream.release();
        stopped?;

        let mut buffered = Vec::new();
        while let Some(chunk) = self.chunks.recv().await {
            buffered.push(chunk);
        }

        Ok(AudioBlob::from_chunks(DEFAULT_AUDIO_MIME, buffered))
    }
}

impl<S: CaptureStream> Drop for RecordingSession<S> {
    fn drop(&mut self) {
        self.stream.release();
    }
}

/// Records microphone audio into [`AudioBlob`]s, one recording at a time.
pub struct AudioRecorder<P: MediaPlatform> {
    platform: P,
    options: AudioRecorderOptions,
    session: Option<RecordingSession<P::Stream>>,
    state: RecorderState,
}

impl<P: MediaPlatform> AudioRecorder<P> {
    /// Create a recorder with default options.
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self::with_options(platform, AudioRecorderOptions::default())
    }

    /// Create a recorder with explicit options.
    #[must_use]
    pub fn with_options(platform: P, options: AudioRecorderOptions) -> Self {
        Self {
            platform,
            options,
            session: None,
            state: RecorderState::Idle,
        }
    }

    /// Capture hints this recorder was created with.
    #[must_use]
    pub const fn options(&self) -> &AudioRecorderOptions {
        &self.options
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RecorderState {
        self.state
    }

    /// Whether a recording is active.
    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Acquire the microphone and start buffering audio.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::AlreadyRecording`] if a recording is active,
    /// or [`RecorderError::StartFailed`] if the microphone is refused or
    /// capture cannot begin.
    pub async fn start_recording(&mut self) -> Result<(), RecorderError> {
        if self.session.is_some() {
            return Err(RecorderError::AlreadyRecording);
        }

        let mut stream = self.platform.acquire_microphone().await.map_err(|e| {
            warn!(error = %e, "microphone acquisition failed");
            RecorderError::StartFailed(e)
        })?;

        let (sink, chunks) = mpsc::unbounded_channel();
        if let Err(e) = stream.start(sink) {
            warn!(error = %e, "capture failed to start");
            stream.release();
            return Err(RecorderError::StartFailed(e));
        }

        self.session = Some(RecordingSession { stream, chunks });
        self.state = RecorderState::Recording;
        debug!(options = ?self.options, "recording started");
        Ok(())
    }

    /// Stop the active recording and return everything it captured.
    ///
    /// The session ends even if the platform reports a failure while
    /// stopping.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NoActiveRecording`] if nothing is being
    /// recorded, or [`RecorderError::Platform`] if the stop itself failed.
    pub async fn stop_recording(&mut self) -> Result<AudioBlob, RecorderError> {
        let session = self
            .session
            .take()
            .ok_or(RecorderError::NoActiveRecording)?;
        self.state = RecorderState::Stopped;

        let blob = session.finish().await?;
        debug!(bytes = blob.len(), "recording stopped");
        Ok(blob)
    }
}

impl<P: MediaPlatform + std::fmt::Debug> std::fmt::Debug for AudioRecorder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioRecorder")
            .field("platform", &self.platform)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::error::PlatformError;
    use crate::voice::scripted::{MicrophoneAccess, ScriptedPlatform};

    #[test]
    fn test_new_recorder_is_idle() {
        let recorder = AudioRecorder::new(ScriptedPlatform::new());
        assert_eq!(recorder.state(), RecorderState::Idle);
        assert!(!recorder.is_recording());
        assert_eq!(recorder.options(), &AudioRecorderOptions::default());
    }

    #[test]
    fn test_options_kept() {
        let options = AudioRecorderOptions {
            sample_rate: Some(16_000),
            channels: Some(1),
        };
        let recorder = AudioRecorder::with_options(ScriptedPlatform::new(), options);
        assert_eq!(recorder.options().sample_rate, Some(16_000));
        assert_eq!(recorder.options().channels, Some(1));
    }

    #[tokio::test]
    async fn test_stop_without_start_fails() {
        let mut recorder = AudioRecorder::new(ScriptedPlatform::new());
        let result = recorder.stop_recording().await;
        assert!(matches!(result, Err(RecorderError::NoActiveRecording)));
        assert_eq!(recorder.state(), RecorderState::Idle);
    }

    #[tokio::test]
    async fn test_start_then_stop_concatenates_chunks() {
        let platform = ScriptedPlatform::new().with_chunks(vec![vec![1, 2], vec![3], vec![4, 5]]);
        let mut recorder = AudioRecorder::new(platform.clone());

        recorder.start_recording().await.expect("start");
        assert_eq!(recorder.state(), RecorderState::Recording);
        assert!(recorder.is_recording());

        let blob = recorder.stop_recording().await.expect("stop");
        assert_eq!(blob.data(), &[1, 2, 3, 4, 5]);
        assert_eq!(blob.mime_type(), DEFAULT_AUDIO_MIME);
        assert_eq!(recorder.state(), RecorderState::Stopped);
        assert_eq!(platform.active_streams(), 0);
    }

    #[tokio::test]
    async fn test_second_stop_fails() {
        let platform = ScriptedPlatform::new().with_chunks(vec![vec![9]]);
        let mut recorder = AudioRecorder::new(platform);

        recorder.start_recording().await.expect("start");
        recorder.stop_recording().await.expect("stop");

        let result = recorder.stop_recording().await;
        assert!(matches!(result, Err(RecorderError::NoActiveRecording)));
    }

    #[tokio::test]
    async fn test_double_start_rejected() {
        let platform = ScriptedPlatform::new();
        let mut recorder = AudioRecorder::new(platform.clone());

        recorder.start_recording().await.expect("start");
        let result = recorder.start_recording().await;

        assert!(matches!(result, Err(RecorderError::AlreadyRecording)));
        assert_eq!(recorder.state(), RecorderState::Recording);
        assert_eq!(platform.acquisitions(), 1);
    }

    #[tokio::test]
    async fn test_buffer_reset_between_recordings() {
        let platform = ScriptedPlatform::new().with_chunks(vec![vec![7, 7]]);
        let mut recorder = AudioRecorder::new(platform);

        recorder.start_recording().await.expect("first start");
        let first = recorder.stop_recording().await.expect("first stop");
        recorder.start_recording().await.expect("second start");
        let second = recorder.stop_recording().await.expect("second stop");

        assert_eq!(first.data(), &[7, 7]);
        assert_eq!(second.data(), &[7, 7]);
    }

    #[tokio::test]
    async fn test_denied_microphone_fails_start() {
        let platform = ScriptedPlatform::new().with_access(MicrophoneAccess::Denied);
        let mut recorder = AudioRecorder::new(platform);

        let result = recorder.start_recording().await;

        match result {
            Err(RecorderError::StartFailed(PlatformError::PermissionDenied)) => {}
            other => panic!("Expected StartFailed(PermissionDenied), got: {other:?}"),
        }
        assert_eq!(recorder.state(), RecorderState::Idle);
        assert!(matches!(
            recorder.stop_recording().await,
            Err(RecorderError::NoActiveRecording)
        ));
    }

    #[tokio::test]
    async fn test_capture_failure_releases_stream() {
        let platform = ScriptedPlatform::new().with_failing_capture();
        let mut recorder = AudioRecorder::new(platform.clone());

        let result = recorder.start_recording().await;

        assert!(matches!(
            result,
            Err(RecorderError::StartFailed(PlatformError::Capture(_)))
        ));
        assert_eq!(platform.acquisitions(), 1);
        assert_eq!(platform.active_streams(), 0);
        assert!(!recorder.is_recording());
    }

    #[tokio::test]
    async fn test_stop_failure_still_ends_session() {
        let platform = ScriptedPlatform::new()
            .with_chunks(vec![vec![1]])
            .with_failing_stop();
        let mut recorder = AudioRecorder::new(platform.clone());

        recorder.start_recording().await.expect("start");
        let result = recorder.stop_recording().await;

        assert!(matches!(
            result,
            Err(RecorderError::Platform(PlatformError::Capture(_)))
        ));
        assert_eq!(recorder.state(), RecorderState::Stopped);
        assert!(!recorder.is_recording());
        assert_eq!(platform.active_streams(), 0);
        assert!(matches!(
            recorder.stop_recording().await,
            Err(RecorderError::NoActiveRecording)
        ));
    }

    #[tokio::test]
    async fn test_dropping_recorder_releases_microphone() {
        let platform = ScriptedPlatform::new().with_chunks(vec![vec![1, 2]]);
        let mut recorder = AudioRecorder::new(platform.clone());

        recorder.start_recording().await.expect("start");
        assert_eq!(platform.active_streams(), 1);

        drop(recorder);

        assert_eq!(platform.active_streams(), 0);
        assert_eq!(platform.releases(), 1);
    }

    #[tokio::test]
    async fn test_finished_recording_released_once() {
        let platform = ScriptedPlatform::new();
        let mut recorder = AudioRecorder::new(platform.clone());

        recorder.start_recording().await.expect("start");
        recorder.stop_recording().await.expect("stop");
        drop(recorder);

        assert_eq!(platform.acquisitions(), 1);
        assert_eq!(platform.releases(), 1);
    }
}
