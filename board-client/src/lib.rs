//! # Voice Board Client
//!
//! Client-side plumbing for Voice Board Canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                board-client                  │
//! ├──────────────────────────────────────────────┤
//! │  Command Router      │  Voice                │
//! │  - POST /api/commands│  - AudioRecorder      │
//! │  - failure → result  │  - AudioProcessor     │
//! │                      │  - PermissionManager  │
//! ├──────────────────────────────────────────────┤
//! │  MediaPlatform: Scripted │ Web (wasm feature)│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every external call is attempted exactly once. Command failures become a
//! `CommandResponse` with `success = false`, permission failures become a
//! [`FailSafe`] default, and recorder misuse is reported as a
//! [`RecorderError`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command_router;
pub mod error;
pub mod voice;

pub use command_router::{CommandRequest, CommandResponse, CommandRouterClient, COMMANDS_PATH};
pub use error::{ClientError, ClientResult};
pub use voice::{
    AudioBlob, AudioProcessor, AudioProcessorOptions, AudioRecorder, AudioRecorderOptions,
    CaptureStream, FailSafe, MediaPlatform, PermissionManager, PermissionState, PermissionStatus,
    PlatformError, RecorderError, RecorderState, ScriptedPlatform,
};

#[cfg(feature = "wasm")]
pub use voice::WebMediaPlatform;

/// Client version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
