use crate::content::PageContext;
use lopdf::Object;
use platen_model::{Color, Point, Rotation, VectorOp, VectorPaint, VectorStyle};
use platen_render_core::RenderError;

/// Cubic approximation constant for quarter-circle arcs.
const KAPPA: f32 = 0.552_284_8;

/// Opacity pair carried through the save/restore stack. Opacity lives in an
/// external graphics state rather than the content stream proper, so the
/// engine mirrors it to know when a `gs` select is actually needed.
#[derive(Clone, Copy, PartialEq)]
struct Frame {
    fill_opacity: f32,
    stroke_opacity: f32,
}

impl Default for Frame {
    fn default() -> Self {
        Self { fill_opacity: 1.0, stroke_opacity: 1.0 }
    }
}

/// Replays vector ops into a page context while tracking graphics-state
/// stack depth. Restore below the base state is a hard error; leftover
/// saves are reported by `depth` so the page renderer can log them.
pub struct VectorEngine {
    page_index: usize,
    stack: Vec<Frame>,
    current: Frame,
}

impl VectorEngine {
    pub fn new(page_index: usize) -> Self {
        Self { page_index, stack: vec![], current: Frame::default() }
    }

    /// Number of saves without a matching restore so far.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn apply(&mut self, op: &VectorOp, ctx: &mut PageContext) -> Result<(), RenderError> {
        match op {
            VectorOp::Save => {
                self.stack.push(self.current);
                ctx.save();
            }
            VectorOp::Restore => {
                let Some(frame) = self.stack.pop() else {
                    return Err(RenderError::UnbalancedGraphicsStack { page: self.page_index });
                };
                self.current = frame;
                ctx.restore();
            }
            VectorOp::Init(style) => self.apply_style(style, ctx),
            VectorOp::End(paint) => Self::paint(paint, ctx),
            VectorOp::Rect { x, y, width, height, radius, rotation } => {
                Self::with_rotation(rotation.as_ref(), ctx, |ctx| {
                    match radius {
                        Some(r) if *r > 0.0 => {
                            Self::rounded_rect_path(*x, *y, *width, *height, *r, ctx)
                        }
                        _ => ctx.op(
                            "re",
                            vec![
                                (*x).into(),
                                ctx.flip(y + height).into(),
                                (*width).into(),
                                (*height).into(),
                            ],
                        ),
                    }
                });
            }
            VectorOp::Ellipse { x, y, rx, ry } => Self::ellipse_path(*x, *y, *rx, *ry, ctx),
            VectorOp::Line { x1, y1, x2, y2, rotation } => {
                Self::with_rotation(rotation.as_ref(), ctx, |ctx| {
                    ctx.op("m", vec![(*x1).into(), ctx.flip(*y1).into()]);
                    ctx.op("l", vec![(*x2).into(), ctx.flip(*y2).into()]);
                });
            }
            VectorOp::Polyline { points, close_path, rotation } => {
                if points.is_empty() {
                    return Ok(());
                }
                Self::with_rotation(rotation.as_ref(), ctx, |ctx| {
                    Self::polyline_path(points, *close_path, ctx)
                });
            }
            VectorOp::QuadraticCurve { points, .. } => Self::quadratic_path(points, ctx),
        }
        Ok(())
    }

    fn apply_style(&mut self, style: &VectorStyle, ctx: &mut PageContext) {
        ctx.op("w", vec![style.line_width.unwrap_or(1.0).into()]);
        match &style.dash {
            Some(dash) => {
                let space = dash.space.unwrap_or(dash.length);
                ctx.op(
                    "d",
                    vec![
                        Object::Array(vec![dash.length.into(), space.into()]),
                        0.into(),
                    ],
                );
            }
            None => ctx.op("d", vec![Object::Array(vec![]), 0.into()]),
        }
        if let Some(join) = style.line_join {
            ctx.op("j", vec![(join as i64).into()]);
        }
        let next = Frame {
            fill_opacity: style.fill_opacity.unwrap_or(1.0),
            stroke_opacity: style.stroke_opacity.unwrap_or(1.0),
        };
        if next != self.current {
            ctx.set_opacity(next.fill_opacity, next.stroke_opacity);
            self.current = next;
        }
    }

    fn paint(paint: &VectorPaint, ctx: &mut PageContext) {
        match (paint.fill, paint.stroke) {
            (Some(fill), Some(stroke)) => {
                ctx.set_fill_color(fill);
                ctx.set_stroke_color(stroke);
                ctx.op("B", vec![]);
            }
            (Some(fill), None) => {
                ctx.set_fill_color(fill);
                ctx.op("f", vec![]);
            }
            (None, stroke) => {
                ctx.set_stroke_color(stroke.unwrap_or(Color::BLACK));
                ctx.op("S", vec![]);
            }
        }
    }

    fn with_rotation(
        rotation: Option<&Rotation>,
        ctx: &mut PageContext,
        path: impl FnOnce(&mut PageContext),
    ) {
        if let Some(rot) = rotation {
            let origin_y = ctx.flip(rot.origin.y);
            ctx.rotate_about(rot.angle, rot.origin.x, origin_y);
        }
        path(ctx);
    }

    fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32, ctx: &mut PageContext) {
        let r = radius.min(width / 2.0).min(height / 2.0);
        let k = KAPPA * r;
        let top = ctx.flip(y);
        let bottom = ctx.flip(y + height);
        let left = x;
        let right = x + width;

        ctx.op("m", vec![(left + r).into(), top.into()]);
        ctx.op("l", vec![(right - r).into(), top.into()]);
        ctx.op(
            "c",
            vec![
                (right - r + k).into(), top.into(),
                right.into(), (top - r + k).into(),
                right.into(), (top - r).into(),
            ],
        );
        ctx.op("l", vec![right.into(), (bottom + r).into()]);
        ctx.op(
            "c",
            vec![
                right.into(), (bottom + r - k).into(),
                (right - r + k).into(), bottom.into(),
                (right - r).into(), bottom.into(),
            ],
        );
        ctx.op("l", vec![(left + r).into(), bottom.into()]);
        ctx.op(
            "c",
            vec![
                (left + r - k).into(), bottom.into(),
                left.into(), (bottom + r - k).into(),
                left.into(), (bottom + r).into(),
            ],
        );
        ctx.op("l", vec![left.into(), (top - r).into()]);
        ctx.op(
            "c",
            vec![
                left.into(), (top - r + k).into(),
                (left + r - k).into(), top.into(),
                (left + r).into(), top.into(),
            ],
        );
        ctx.op("h", vec![]);
    }

    fn ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32, ctx: &mut PageContext) {
        let cy = ctx.flip(cy);
        let kx = KAPPA * rx;
        let ky = KAPPA * ry;

        ctx.op("m", vec![(cx + rx).into(), cy.into()]);
        ctx.op(
            "c",
            vec![
                (cx + rx).into(), (cy + ky).into(),
                (cx + kx).into(), (cy + ry).into(),
                cx.into(), (cy + ry).into(),
            ],
        );
        ctx.op(
            "c",
            vec![
                (cx - kx).into(), (cy + ry).into(),
                (cx - rx).into(), (cy + ky).into(),
                (cx - rx).into(), cy.into(),
            ],
        );
        ctx.op(
            "c",
            vec![
                (cx - rx).into(), (cy - ky).into(),
                (cx - kx).into(), (cy - ry).into(),
                cx.into(), (cy - ry).into(),
            ],
        );
        ctx.op(
            "c",
            vec![
                (cx + kx).into(), (cy - ry).into(),
                (cx + rx).into(), (cy - ky).into(),
                (cx + rx).into(), cy.into(),
            ],
        );
        ctx.op("h", vec![]);
    }

    fn polyline_path(points: &[Point], close_path: bool, ctx: &mut PageContext) {
        let first = points[0];
        ctx.op("m", vec![first.x.into(), ctx.flip(first.y).into()]);
        for point in &points[1..] {
            ctx.op("l", vec![point.x.into(), ctx.flip(point.y).into()]);
        }
        let last = points[points.len() - 1];
        if close_path || (points.len() > 1 && last.x == first.x && last.y == first.y) {
            ctx.op("h", vec![]);
        }
    }

    /// Emit a chain of quadratic segments as cubics via degree elevation.
    /// Points alternate on-curve, control, on-curve, control, ...
    fn quadratic_path(points: &[Point], ctx: &mut PageContext) {
        if points.len() < 3 {
            return;
        }
        let start = points[0];
        ctx.op("m", vec![start.x.into(), ctx.flip(start.y).into()]);
        let mut from = start;
        for pair in points[1..].chunks(2) {
            let [control, to] = pair else { break };
            let c1x = from.x + 2.0 / 3.0 * (control.x - from.x);
            let c1y = from.y + 2.0 / 3.0 * (control.y - from.y);
            let c2x = to.x + 2.0 / 3.0 * (control.x - to.x);
            let c2y = to.y + 2.0 / 3.0 * (control.y - to.y);
            ctx.op(
                "c",
                vec![
                    c1x.into(), ctx.flip(c1y).into(),
                    c2x.into(), ctx.flip(c2y).into(),
                    to.x.into(), ctx.flip(to.y).into(),
                ],
            );
            from = *to;
        }
    }
}
