//! The seam between the voice layer and the host's media APIs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::error::PlatformError;

/// Channel end a capture stream pushes encoded audio chunks into.
///
/// The stream must drop every clone of the sink once its final chunk has
/// been delivered; the recorder treats a closed channel as end of data.
pub type ChunkSink = mpsc::UnboundedSender<Vec<u8>>;

/// Platform authorization for microphone access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Access granted.
    Granted,
    /// Access refused.
    Denied,
    /// The user has not decided yet.
    Prompt,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Prompt => "prompt",
        })
    }
}

/// Capabilities the voice layer consumes from the host.
///
/// Futures are not required to be `Send`: every call is driven from the
/// host's single UI event loop.
#[async_trait(?Send)]
pub trait MediaPlatform {
    /// Live microphone stream type.
    type Stream: CaptureStream;

    /// Ask for the microphone, prompting the user if needed.
    async fn acquire_microphone(&self) -> Result<Self::Stream, PlatformError>;

    /// Read the current microphone permission without prompting.
    async fn query_microphone_permission(&self) -> Result<PermissionState, PlatformError>;
}

/// An acquired microphone that can be recorded from.
#[async_trait(?Send)]
pub trait CaptureStream {
    /// Begin recording, delivering chunks to `sink` in arrival order.
    fn start(&mut self, sink: ChunkSink) -> Result<(), PlatformError>;

    /// Stop recording. Resolves once the platform has signalled the stop;
    /// chunks may still be in flight until the sink is closed.
    async fn stop(&mut self) -> Result<(), PlatformError>;

    /// Release the device (stop all tracks).
    fn release(&mut self);
}
