use crate::content::PageContext;
use lopdf::{Object, StringFormat};
use platen_model::{Color, Inline, PageFont, PositionedLine};
use platen_render_core::{RenderError, TextDecorator};

/// Show one encoded run at an absolute baseline position. The Y operand is
/// flipped here; callers pass layout-space coordinates.
pub(crate) fn emit_positioned_run(
    ctx: &mut PageContext,
    font: &dyn PageFont,
    text: &str,
    font_size: f32,
    x: f32,
    baseline_y: f32,
) -> Result<(), RenderError> {
    let run = font.encode(text)?;
    let resource = font.resource();
    let font_name = resource.id.clone();
    ctx.use_font(resource);

    ctx.op("BT", vec![]);
    ctx.op("Td", vec![x.into(), ctx.flip(baseline_y).into()]);
    ctx.op(
        "Tf",
        vec![Object::Name(font_name.into_bytes()), font_size.into()],
    );
    ctx.op(
        "Tj",
        vec![Object::String(run.bytes, StringFormat::Hexadecimal)],
    );
    ctx.op("ET", vec![]);
    Ok(())
}

fn draw_text_run(
    ctx: &mut PageContext,
    run: &Inline,
    line_x: f32,
    line_y: f32,
    ascender: f32,
) -> Result<(), RenderError> {
    // Color goes before the save so consecutive same-colored runs reuse it.
    ctx.set_fill_color(run.color.unwrap_or(Color::BLACK));
    ctx.save();
    emit_positioned_run(
        ctx,
        run.font.as_ref(),
        &run.text,
        run.font_size,
        line_x + run.x_offset,
        line_y + ascender,
    )?;
    ctx.restore();
    Ok(())
}

/// Render one positioned line: background hook, then every run in input
/// order, then the decoration hook.
pub(crate) fn draw_line(
    ctx: &mut PageContext,
    decorator: &dyn TextDecorator,
    positioned: &PositionedLine,
) -> Result<(), RenderError> {
    let page_height = ctx.page_height();
    decorator.draw_background(
        &positioned.line,
        positioned.x,
        positioned.y,
        page_height,
        ctx.content_mut(),
    )?;
    ctx.assume_color_unknown();

    let ascender = positioned.line.ascender_height;
    for run in &positioned.line.inlines {
        draw_text_run(ctx, run, positioned.x, positioned.y, ascender)?;
    }

    decorator.draw_decorations(
        &positioned.line,
        positioned.x,
        positioned.y,
        page_height,
        ctx.content_mut(),
    )?;
    ctx.assume_color_unknown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use platen_model::{FontEncodeError, FontResource, FontRun, TextLine};
    use platen_render_core::NoDecoration;
    use std::sync::Arc;

    struct TestFont;

    impl PageFont for TestFont {
        fn encode(&self, text: &str) -> Result<FontRun, FontEncodeError> {
            if text.contains('\u{2603}') {
                return Err(FontEncodeError {
                    font_id: "F1".into(),
                    reason: "no glyph for U+2603".into(),
                });
            }
            Ok(FontRun { font_id: "F1".into(), bytes: text.as_bytes().to_vec() })
        }

        fn resource(&self) -> FontResource {
            FontResource { id: "F1".into(), base_font: "Helvetica".into() }
        }
    }

    fn line_at(x: f32, y: f32, text: &str) -> PositionedLine {
        PositionedLine {
            x,
            y,
            line: TextLine {
                ascender_height: 9.0,
                inlines: vec![Inline {
                    text: text.into(),
                    font: Arc::new(TestFont),
                    font_size: 12.0,
                    color: None,
                    x_offset: 0.0,
                }],
            },
        }
    }

    #[test]
    fn baseline_lands_below_line_top_by_ascender() {
        let mut ctx = PageContext::new(800.0);
        draw_line(&mut ctx, &NoDecoration, &line_at(10.0, 20.0, "hi")).unwrap();
        let artifacts = ctx.finish();
        let td = artifacts
            .content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        let operands: Vec<f32> = td.operands.iter().map(|o| o.as_f32().unwrap()).collect();
        // 800 - (20 + 9) = 771.
        assert_eq!(operands, [10.0, 771.0]);
    }

    #[test]
    fn run_operations_arrive_in_show_order() {
        let mut ctx = PageContext::new(800.0);
        draw_line(&mut ctx, &NoDecoration, &line_at(0.0, 0.0, "hi")).unwrap();
        let operators: Vec<String> = ctx
            .finish()
            .content
            .operations
            .iter()
            .map(|op| op.operator.clone())
            .collect();
        assert_eq!(operators, ["rg", "q", "BT", "Td", "Tf", "Tj", "ET", "Q"]);
    }

    #[test]
    fn encode_failure_aborts_the_line() {
        let mut ctx = PageContext::new(800.0);
        let err = draw_line(&mut ctx, &NoDecoration, &line_at(0.0, 0.0, "\u{2603}")).unwrap_err();
        assert!(matches!(err, RenderError::FontEncodingFailure { .. }));
    }

    #[test]
    fn fonts_are_recorded_once_per_page() {
        let mut ctx = PageContext::new(800.0);
        draw_line(&mut ctx, &NoDecoration, &line_at(0.0, 0.0, "one")).unwrap();
        draw_line(&mut ctx, &NoDecoration, &line_at(0.0, 20.0, "two")).unwrap();
        let artifacts = ctx.finish();
        assert_eq!(artifacts.fonts.len(), 1);
        assert_eq!(artifacts.fonts[0].id, "F1");
    }
}
