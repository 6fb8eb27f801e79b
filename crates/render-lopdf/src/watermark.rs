use crate::content::PageContext;
use crate::text::emit_positioned_run;
use platen_model::{Color, Size, Watermark};
use platen_render_core::RenderError;

const WATERMARK_OPACITY: f32 = 0.6;

/// Approximate ascender fraction used to place the watermark baseline
/// inside its measured box.
const BASELINE_FACTOR: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkPlacement {
    /// Diagonal angle in degrees, clockwise in layout space.
    pub angle: f32,
    /// Top-left of the measured text box, layout space.
    pub x: f32,
    pub y: f32,
}

/// Place the watermark along the page diagonal: rotated to match the
/// diagonal's slope, centered horizontally, pulled up a quarter of its
/// measured height so the rotated text reads centered.
pub fn watermark_placement(page: Size, measured: Size) -> WatermarkPlacement {
    WatermarkPlacement {
        angle: page.height.atan2(page.width).to_degrees(),
        x: page.width / 2.0 - measured.width / 2.0,
        y: page.height / 2.0 - measured.height / 4.0,
    }
}

pub(crate) fn draw_watermark(
    ctx: &mut PageContext,
    watermark: &Watermark,
    page: Size,
) -> Result<(), RenderError> {
    let placement = watermark_placement(page, watermark.measured);
    ctx.set_fill_color(Color::BLACK);
    ctx.save();
    ctx.set_opacity(WATERMARK_OPACITY, WATERMARK_OPACITY);
    ctx.rotate_about(placement.angle, page.width / 2.0, ctx.flip(page.height / 2.0));
    emit_positioned_run(
        ctx,
        watermark.font.as_ref(),
        &watermark.text,
        watermark.font_size,
        placement.x,
        placement.y + BASELINE_FACTOR * watermark.font_size,
    )?;
    ctx.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_follows_page_diagonal() {
        let placement = watermark_placement(
            Size { width: 600.0, height: 800.0 },
            Size { width: 200.0, height: 40.0 },
        );
        assert!((placement.angle - 53.13).abs() < 0.01);
        assert_eq!(placement.x, 200.0);
        assert_eq!(placement.y, 390.0);
    }

    #[test]
    fn square_page_rotates_forty_five_degrees() {
        let placement = watermark_placement(
            Size { width: 500.0, height: 500.0 },
            Size { width: 100.0, height: 20.0 },
        );
        assert!((placement.angle - 45.0).abs() < 1e-4);
    }
}
