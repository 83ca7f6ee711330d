//! # Voice Board Types
//!
//! Plain data shapes shared by every Voice Board crate.
//!
//! None of these types carry behavior beyond construction helpers: they are
//! the transport and display records that the canvas, the client and the
//! demo pass between each other. Field names serialize exactly as the
//! browser side expects them (`camelCase`, `type` for tag fields).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod element;
pub mod geometry;
pub mod structure;

pub use command::VoiceCommand;
pub use element::{AnimationConfig, CanvasElement};
pub use geometry::{Bounds, Position, Size};
pub use structure::{DataStructure, DataStructureType};

/// Board types version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Allocate a fresh string identifier.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
