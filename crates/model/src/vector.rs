use crate::color::Color;
use crate::geometry::{Point, Rect};
use serde::Deserialize;

/// Stroke dash pattern. A missing `space` falls back to `length`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Dash {
    pub length: f32,
    #[serde(default)]
    pub space: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stateful styling applied by [`VectorOp::Init`]. Unset fields fall back
/// to their defaults: line width 1, solid stroke, opacity 1, miter join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct VectorStyle {
    #[serde(default)]
    pub line_width: Option<f32>,
    #[serde(default)]
    pub dash: Option<Dash>,
    #[serde(default)]
    pub fill_opacity: Option<f32>,
    #[serde(default)]
    pub stroke_opacity: Option<f32>,
    #[serde(default)]
    pub line_join: Option<LineJoin>,
}

/// Paint request carried by [`VectorOp::End`]. With both colors present the
/// path is filled and stroked; with neither, it is stroked in black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct VectorPaint {
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub stroke: Option<Color>,
}

/// Clockwise rotation in degrees about a layout-space origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rotation {
    pub angle: f32,
    pub origin: Point,
}

/// One vector drawing instruction. Coordinates are layout space; the
/// renderer converts them at the point of emission.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorOp {
    /// Push the current graphics state.
    Save,
    /// Pop the graphics state. Popping an empty stack is a fatal error.
    Restore,
    /// Apply styling to the current state frame.
    Init(VectorStyle),
    /// Paint the path constructed since the last paint.
    End(VectorPaint),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius; `None` or non-positive emits a plain rectangle.
        radius: Option<f32>,
        rotation: Option<Rotation>,
    },
    Ellipse {
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        rotation: Option<Rotation>,
    },
    /// A polyline closes when `close_path` is set or when its first and
    /// last points coincide exactly. Zero points is a no-op.
    Polyline {
        points: Vec<Point>,
        close_path: bool,
        rotation: Option<Rotation>,
    },
    /// A chained quadratic curve: a start point followed by
    /// (control, end) pairs. The layout stage also supplies the curve's
    /// bounding box.
    QuadraticCurve {
        points: Vec<Point>,
        bounding_box: Rect,
    },
}
