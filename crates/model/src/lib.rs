//! The immutable page model consumed by the platen renderer.
//!
//! A page model is produced once by an external layout stage: every text
//! line, vector instruction and image arrives fully positioned in layout
//! space (origin at the page's top-left corner, Y increasing downward).
//! The renderer consumes it exactly once and never recomputes positions.

pub mod color;
pub mod font;
pub mod geometry;
pub mod page;
pub mod page_size;
pub mod vector;

pub use color::Color;
pub use font::{FontEncodeError, FontResource, FontRun, PageFont};
pub use geometry::{MarginSpec, Margins, Point, Rect, Size};
pub use page::{
    Document, ImageData, ImageItem, ImageKind, Inline, Page, PositionedLine, RenderItem, TextLine,
    Watermark,
};
pub use page_size::{page_size_preset, Orientation, PageSize};
pub use vector::{Dash, LineJoin, Rotation, VectorOp, VectorPaint, VectorStyle};
