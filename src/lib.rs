//! platen renders an already-laid-out page model into a PDF.
//!
//! Layout happens elsewhere: pages arrive with every text line, vector
//! instruction and image fully positioned in a top-left-origin coordinate
//! space. This crate replays that model into PDF content-stream commands,
//! converting coordinates at the point of emission, and writes the final
//! file incrementally.
//!
//! ```no_run
//! use platen::model::{Document, Page, PageSize};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), platen::RenderError> {
//! let document = Document {
//!     pages: vec![Page {
//!         size: PageSize::portrait(595.28, 841.89),
//!         items: vec![],
//!         watermark: None,
//!     }],
//!     images: Default::default(),
//! };
//! platen::render(&document, File::create("out.pdf")?)?;
//! # Ok(())
//! # }
//! ```

pub mod fonts;
pub mod setup;

pub use platen_model as model;
pub use platen_render_core::{NoDecoration, RenderError, TextDecorator};
pub use platen_render_lopdf::render_document;

use platen_model::Document;
use std::io::{Seek, Write};

/// Render a document without text decorations.
pub fn render<W: Write + Seek>(document: &Document, writer: W) -> Result<W, RenderError> {
    render_document(document, &NoDecoration, writer)
}

/// Render a document with a caller-supplied decoration collaborator.
pub fn render_with<W: Write + Seek>(
    document: &Document,
    decorator: &dyn TextDecorator,
    writer: W,
) -> Result<W, RenderError> {
    render_document(document, decorator, writer)
}
