//! lopdf-backed renderer: replays a laid-out page model into raw PDF
//! content-stream operations and writes the finished document.
//!
//! The page model arrives fully positioned; this crate only converts
//! coordinates at the point of emission, maintains graphics-state stack
//! discipline, and serializes the resulting objects.

mod content;
mod document;
mod page;
mod text;
mod vector;
mod watermark;
mod writer;

pub use content::{PageArtifacts, PageContext};
pub use document::{render_document, PhysicalPageState};
pub use page::render_page;
pub use vector::VectorEngine;
pub use watermark::{watermark_placement, WatermarkPlacement};
pub use writer::PdfWriter;
