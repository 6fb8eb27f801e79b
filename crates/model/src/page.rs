use crate::color::Color;
use crate::font::PageFont;
use crate::geometry::Size;
use crate::page_size::PageSize;
use crate::vector::VectorOp;
use std::collections::HashMap;
use std::sync::Arc;

/// One styled run inside a text line. `x_offset` is relative to the line's
/// own x position.
#[derive(Clone)]
pub struct Inline {
    pub text: String,
    pub font: Arc<dyn PageFont>,
    pub font_size: f32,
    /// Fill color; unset means black.
    pub color: Option<Color>,
    pub x_offset: f32,
}

/// A fully measured text line. Inlines are emitted in source order, left to
/// right, and are never reordered or merged.
#[derive(Clone)]
pub struct TextLine {
    pub ascender_height: f32,
    pub inlines: Vec<Inline>,
}

/// A text line positioned in layout space.
#[derive(Clone)]
pub struct PositionedLine {
    pub x: f32,
    pub y: f32,
    pub line: TextLine,
}

/// A diagonal watermark stamped across a page. `measured` is the text's
/// bounding box as measured by the font provider.
#[derive(Clone)]
pub struct Watermark {
    pub text: String,
    pub font: Arc<dyn PageFont>,
    pub font_size: f32,
    pub measured: Size,
}

/// Placement of a pre-measured image resource. Width and height are final;
/// no scaling decisions happen in the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    /// Name of the image resource in [`Document::images`].
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pre-decoded image data registered at document level.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width_px: u32,
    pub height_px: u32,
    pub kind: ImageKind,
}

#[derive(Debug, Clone)]
pub enum ImageKind {
    /// Raw JPEG bytes, embedded as-is.
    Jpeg(Vec<u8>),
    /// Uncompressed 8-bit RGB samples, row-major.
    Rgb8(Vec<u8>),
}

/// One positioned drawable unit on a page.
#[derive(Clone)]
pub enum RenderItem {
    Vector(VectorOp),
    Line(PositionedLine),
    Image(ImageItem),
}

/// A finished page from the layout stage; consumed exactly once, items in
/// source order.
#[derive(Clone)]
pub struct Page {
    pub size: PageSize,
    pub items: Vec<RenderItem>,
    pub watermark: Option<Watermark>,
}

/// A complete laid-out document plus its shared image resources.
#[derive(Clone, Default)]
pub struct Document {
    pub pages: Vec<Page>,
    pub images: HashMap<String, ImageData>,
}
