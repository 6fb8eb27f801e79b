use crate::content::{PageArtifacts, PageContext};
use crate::text::draw_line;
use crate::vector::VectorEngine;
use crate::watermark::draw_watermark;
use lopdf::Object;
use platen_model::{ImageItem, Page, RenderItem, Size};
use platen_render_core::{RenderError, TextDecorator};

fn draw_image(ctx: &mut PageContext, image: &ImageItem) {
    ctx.use_image(&image.name);
    ctx.save();
    // Unit image space scaled to the placement box; translate to its
    // bottom-left corner in output space.
    ctx.op(
        "cm",
        vec![
            image.width.into(),
            0.into(),
            0.into(),
            image.height.into(),
            image.x.into(),
            ctx.flip(image.y + image.height).into(),
        ],
    );
    ctx.op("Do", vec![Object::Name(image.name.clone().into_bytes())]);
    ctx.restore();
}

/// Render one page to a content stream plus its resource requirements.
/// Items are replayed strictly in input order; the watermark, when present,
/// is drawn last so it overlays everything.
pub fn render_page(
    page: &Page,
    page_index: usize,
    width: f32,
    height: f32,
    decorator: &dyn TextDecorator,
) -> Result<PageArtifacts, RenderError> {
    let mut ctx = PageContext::new(height);
    let mut engine = VectorEngine::new(page_index);

    for item in &page.items {
        match item {
            RenderItem::Vector(op) => engine.apply(op, &mut ctx)?,
            RenderItem::Line(line) => draw_line(&mut ctx, decorator, line)?,
            RenderItem::Image(image) => draw_image(&mut ctx, image),
        }
    }

    if let Some(watermark) = &page.watermark {
        draw_watermark(&mut ctx, watermark, Size { width, height })?;
    }

    if engine.depth() > 0 {
        log::warn!(
            "page {page_index}: {} graphics-state save(s) without a matching restore",
            engine.depth()
        );
    }

    Ok(ctx.finish())
}
