//! # Voice Board Canvas Components
//!
//! Presentational components for the data-structure canvas. Components are
//! pure functions of their props: they hold no state of their own, perform
//! no I/O and render to HTML strings the host page mounts.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod array_element;
pub mod html;

pub use array_element::{ArrayCell, ArrayElement, ArrayElementState, CellValue};
