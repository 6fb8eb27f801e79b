//! Core rendering abstractions for platen.
//!
//! This crate provides the pieces shared by rendering backends:
//! - the `RenderError` taxonomy
//! - the `TextDecorator` hook pair bracketing each line's glyph emission
//! - coordinate utilities for the layout-space to output-space transform

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{NoDecoration, TextDecorator};
