//! Renders a small two-page document to `simple.pdf`.
//!
//! Run with `cargo run --example simple`; set `RUST_LOG=debug` to watch the
//! orientation handling.

use platen::fonts::{BuiltinFace, BuiltinFont};
use platen::model::{
    Color, Document, Inline, Orientation, Page, PageSize, PositionedLine, RenderItem, Size,
    TextLine, VectorOp, VectorPaint, VectorStyle, Watermark,
};
use platen::RenderError;
use std::collections::HashMap;
use std::fs::File;
use std::sync::Arc;

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let body = Arc::new(BuiltinFont::new("F1", BuiltinFace::Helvetica));
    let heading = Arc::new(BuiltinFont::new("F2", BuiltinFace::TimesBold));

    let line = |x: f32, y: f32, text: &str, font: &Arc<BuiltinFont>, size: f32| {
        RenderItem::Line(PositionedLine {
            x,
            y,
            line: TextLine {
                ascender_height: size * 0.75,
                inlines: vec![Inline {
                    text: text.into(),
                    font: font.clone(),
                    font_size: size,
                    color: None,
                    x_offset: 0.0,
                }],
            },
        })
    };

    let first = Page {
        size: PageSize::portrait(595.28, 841.89),
        items: vec![
            RenderItem::Vector(VectorOp::Save),
            RenderItem::Vector(VectorOp::Init(VectorStyle {
                line_width: Some(1.5),
                ..Default::default()
            })),
            RenderItem::Vector(VectorOp::Rect {
                x: 40.0,
                y: 40.0,
                width: 515.28,
                height: 80.0,
                radius: Some(6.0),
                rotation: None,
            }),
            RenderItem::Vector(VectorOp::End(VectorPaint {
                fill: Some(Color::rgb(235, 235, 245)),
                stroke: Some(Color::BLACK),
            })),
            RenderItem::Vector(VectorOp::Restore),
            line(56.0, 64.0, "Quarterly report", &heading, 24.0),
            line(56.0, 160.0, "All figures in thousands.", &body, 11.0),
        ],
        watermark: Some(Watermark {
            text: "DRAFT".into(),
            font: body.clone(),
            font_size: 96.0,
            measured: Size { width: 320.0, height: 96.0 },
        }),
    };

    // Declared landscape, so the physical dimensions flip for this page
    // and every following one until the orientation changes again.
    let second = Page {
        size: PageSize::new(841.89, 595.28, Orientation::Landscape),
        items: vec![line(56.0, 64.0, "Appendix (landscape)", &heading, 18.0)],
        watermark: None,
    };

    let document = Document {
        pages: vec![first, second],
        images: HashMap::new(),
    };

    platen::render(&document, File::create("simple.pdf")?)?;
    println!("wrote simple.pdf");
    Ok(())
}
