//! # Voice Board Canvas
//!
//! Library entry point: the [`VoiceBoard`] container, the [`App`] root and
//! re-exports of the canvas components, shared types and client.
//!
//! ```
//! use voice_board::{VoiceBoard, VoiceBoardProps};
//!
//! let board = VoiceBoard::new(VoiceBoardProps::default());
//! assert!(board.render_html().contains("Voice: ✅ Enabled"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod board;

pub use app::App;
pub use board::{Dimension, VoiceBoard, VoiceBoardProps};

pub use board_canvas as canvas;
pub use board_client as client;
pub use board_types as types;

pub use board_canvas::{ArrayCell, ArrayElement, ArrayElementState, CellValue};
pub use board_types::{
    AnimationConfig, Bounds, CanvasElement, DataStructure, DataStructureType, Position, Size,
    VoiceCommand,
};

/// Voice board version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
