//! Microphone capture, audio processing and permission checks.
//!
//! All platform access goes through [`MediaPlatform`]. The browser backend
//! lives behind the `wasm` feature; [`ScriptedPlatform`] drives the same
//! code paths in-process.

mod blob;
mod error;
mod permission;
mod platform;
mod processor;
mod recorder;
mod scripted;
#[cfg(feature = "wasm")]
mod web;

pub use blob::{AudioBlob, DEFAULT_AUDIO_MIME};
pub use error::{PlatformError, RecorderError};
pub use permission::{FailSafe, PermissionManager, PermissionStatus};
pub use platform::{CaptureStream, ChunkSink, MediaPlatform, PermissionState};
pub use processor::{AudioProcessor, AudioProcessorOptions};
pub use recorder::{AudioRecorder, AudioRecorderOptions, RecorderState};
pub use scripted::{MicrophoneAccess, ScriptedPlatform, ScriptedStream};
#[cfg(feature = "wasm")]
pub use web::{WebCaptureStream, WebMediaPlatform};
