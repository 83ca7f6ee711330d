//! In-process media platform with scripted outcomes.
//!
//! Used for headless runs (no browser, no audio device) and by the tests.
//! Each acquired stream replays the scripted chunks when recording starts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::error::PlatformError;
use super::platform::{CaptureStream, ChunkSink, MediaPlatform, PermissionState};

/// How the scripted platform answers a microphone request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MicrophoneAccess {
    /// Hand out a stream.
    #[default]
    Granted,
    /// Refuse with [`PlatformError::PermissionDenied`].
    Denied,
    /// Refuse with [`PlatformError::Unavailable`].
    Unavailable,
}

#[derive(Debug)]
struct Script {
    access: MicrophoneAccess,
    permission: Option<PermissionState>,
    chunks: Vec<Vec<u8>>,
    fail_capture: bool,
    fail_stop: bool,
    acquired: usize,
    released: usize,
}

/// A [`MediaPlatform`] whose answers are fixed up front.
///
/// Clones share the same script and counters.
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPlatform {
    /// Microphone granted, permission `granted`, no audio.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                access: MicrophoneAccess::Granted,
                permission: Some(PermissionState::Granted),
                chunks: Vec::new(),
                fail_capture: false,
                fail_stop: false,
                acquired: 0,
                released: 0,
            })),
        }
    }

    /// Set how microphone requests are answered.
    #[must_use]
    pub fn with_access(self, access: MicrophoneAccess) -> Self {
        self.script().access = access;
        self
    }

    /// Set the state reported by permission queries.
    #[must_use]
    pub fn with_permission(self, state: PermissionState) -> Self {
        self.script().permission = Some(state);
        self
    }

    /// Make permission queries fail.
    #[must_use]
    pub fn with_failing_permission_query(self) -> Self {
        self.script().permission = None;
        self
    }

    /// Set the chunks each recording delivers.
    #[must_use]
    pub fn with_chunks(self, chunks: Vec<Vec<u8>>) -> Self {
        self.script().chunks = chunks;
        self
    }

    /// Make streams fail when recording starts.
    #[must_use]
    pub fn with_failing_capture(self) -> Self {
        self.script().fail_capture = true;
        self
    }

    /// Make streams fail when recording stops. The audio is lost.
    #[must_use]
    pub fn with_failing_stop(self) -> Self {
        self.script().fail_stop = true;
        self
    }

    /// Number of streams handed out.
    #[must_use]
    pub fn acquisitions(&self) -> usize {
        self.script().acquired
    }

    /// Number of streams released.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.script().released
    }

    /// Streams acquired and not yet released.
    #[must_use]
    pub fn active_streams(&self) -> usize {
        let script = self.script();
        script.acquired - script.released
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl MediaPlatform for ScriptedPlatform {
    type Stream = ScriptedStream;

    async fn acquire_microphone(&self) -> Result<Self::Stream, PlatformError> {
        let mut script = self.script();
        match script.access {
            MicrophoneAccess::Granted => {}
            MicrophoneAccess::Denied => return Err(PlatformError::PermissionDenied),
            MicrophoneAccess::Unavailable => {
                return Err(PlatformError::Unavailable("no input device".to_string()))
            }
        }
        script.acquired += 1;

        Ok(ScriptedStream {
            script: Arc::clone(&self.script),
            chunks: script.chunks.clone(),
            fail_capture: script.fail_capture,
            fail_stop: script.fail_stop,
            sink: None,
            released: false,
        })
    }

    async fn query_microphone_permission(&self) -> Result<PermissionState, PlatformError> {
        self.script()
            .permission
            .ok_or_else(|| PlatformError::Unavailable("permissions API not supported".to_string()))
    }
}

/// Stream handed out by [`ScriptedPlatform`].
#[derive(Debug)]
pub struct ScriptedStream {
    script: Arc<Mutex<Script>>,
    chunks: Vec<Vec<u8>>,
    fail_capture: bool,
    fail_stop: bool,
    sink: Option<ChunkSink>,
    released: bool,
}

#[async_trait(?Send)]
impl CaptureStream for ScriptedStream {
    fn start(&mut self, sink: ChunkSink) -> Result<(), PlatformError> {
        if self.fail_capture {
            return Err(PlatformError::Capture("recorder refused to start".to_string()));
        }
        for chunk in &self.chunks {
            // A closed receiver only means nobody is listening any more.
            let _ = sink.send(chunk.clone());
        }
        self.sink = Some(sink);
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), PlatformError> {
        let sink = self
            .sink
            .take()
            .ok_or_else(|| PlatformError::Capture("stream is not recording".to_string()))?;
        drop(sink);

        if self.fail_stop {
            return Err(PlatformError::Capture("recorder failed to stop".to_string()));
        }
        Ok(())
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.script
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .released += 1;
        }
    }
}
