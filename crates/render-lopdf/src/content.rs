use lopdf::content::{Content, Operation};
use lopdf::Object;
use platen_model::{Color, FontResource};
use platen_render_core::utils::{flip_y, round_degrees};
use std::collections::{BTreeMap, BTreeSet};

/// Resource name for an opacity graphics state, derived from the fill and
/// stroke alphas in integer percent. The name doubles as the registry key,
/// so equal opacities share one resource entry.
pub(crate) fn opacity_gs_name(fill: f32, stroke: f32) -> String {
    format!(
        "GS{:03}{:03}",
        (fill * 100.0).round() as i64,
        (stroke * 100.0).round() as i64
    )
}

/// Per-page emission context: the content stream under construction plus
/// the resource names the page has touched.
pub struct PageContext {
    content: Content,
    page_height: f32,
    fill_color: Option<Color>,
    used_fonts: BTreeMap<String, FontResource>,
    used_images: BTreeSet<String>,
    used_opacities: BTreeMap<String, (f32, f32)>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            content: Content { operations: vec![] },
            page_height,
            fill_color: None,
            used_fonts: BTreeMap::new(),
            used_images: BTreeSet::new(),
            used_opacities: BTreeMap::new(),
        }
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    /// Convert a layout-space Y to output space for this page.
    pub fn flip(&self, y: f32) -> f32 {
        flip_y(y, self.page_height)
    }

    pub fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    /// Direct access for decoration hooks. Anything they emit may change
    /// the fill color, so the cache is dropped afterwards by the caller.
    pub fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    /// Forget the cached fill color so the next set re-emits it.
    pub fn assume_color_unknown(&mut self) {
        self.fill_color = None;
    }

    pub fn save(&mut self) {
        self.op("q", vec![]);
    }

    /// Emit a state restore. The restored state may carry any fill color,
    /// so the cache is invalidated.
    pub fn restore(&mut self) {
        self.op("Q", vec![]);
        self.fill_color = None;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.fill_color != Some(color) {
            let (r, g, b) = color.normalized();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.fill_color = Some(color);
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        let (r, g, b) = color.normalized();
        self.op("RG", vec![r.into(), g.into(), b.into()]);
    }

    /// Select a named opacity graphics state, registering it for the
    /// document's resource dictionary.
    pub fn set_opacity(&mut self, fill: f32, stroke: f32) {
        let name = opacity_gs_name(fill, stroke);
        self.op("gs", vec![Object::Name(name.clone().into_bytes())]);
        self.used_opacities.insert(name, (fill, stroke));
    }

    /// Rotate about an output-space origin. Layout angles increase
    /// clockwise while the PDF rotation operator increases
    /// counter-clockwise, so the angle is negated; it is rounded to two
    /// decimals first.
    pub fn rotate_about(&mut self, angle_deg: f32, origin_x: f32, origin_y: f32) {
        let rad = round_degrees(-angle_deg).to_radians();
        let (sin, cos) = rad.sin_cos();
        let e = origin_x - origin_x * cos + origin_y * sin;
        let f = origin_y - origin_x * sin - origin_y * cos;
        self.op(
            "cm",
            vec![cos.into(), sin.into(), (-sin).into(), cos.into(), e.into(), f.into()],
        );
    }

    pub fn use_font(&mut self, resource: FontResource) {
        self.used_fonts.insert(resource.id.clone(), resource);
    }

    pub fn use_image(&mut self, name: &str) {
        self.used_images.insert(name.to_string());
    }

    pub fn finish(self) -> PageArtifacts {
        PageArtifacts {
            content: self.content,
            fonts: self.used_fonts.into_values().collect(),
            images: self.used_images,
            opacities: self.used_opacities,
        }
    }
}

/// Everything one rendered page hands back to the document writer: the
/// content stream and the resources it referenced.
#[derive(Debug)]
pub struct PageArtifacts {
    pub content: Content,
    pub fonts: Vec<FontResource>,
    pub images: BTreeSet<String>,
    pub opacities: BTreeMap<String, (f32, f32)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_names_are_stable() {
        assert_eq!(opacity_gs_name(0.6, 1.0), "GS060100");
        assert_eq!(opacity_gs_name(1.0, 0.25), "GS100025");
    }

    #[test]
    fn rotation_matrix_pivots_about_origin() {
        let mut ctx = PageContext::new(800.0);
        // Layout angle 90 degrees clockwise about (10, 10) in output space.
        ctx.rotate_about(90.0, 10.0, 10.0);
        let artifacts = ctx.finish();
        let op = &artifacts.content.operations[0];
        assert_eq!(op.operator, "cm");
        let operands: Vec<f32> = op.operands.iter().map(|o| o.as_f32().unwrap()).collect();
        // cos(-90) = 0, sin(-90) = -1; e = 10 - 0 + 10*(-1) = 0, f = 10 + 10 - 0 = 20.
        assert!(operands[0].abs() < 1e-6);
        assert!((operands[1] + 1.0).abs() < 1e-6);
        assert!(operands[4].abs() < 1e-4);
        assert!((operands[5] - 20.0).abs() < 1e-4);
    }

    #[test]
    fn fill_color_cache_drops_on_restore() {
        let mut ctx = PageContext::new(100.0);
        ctx.set_fill_color(Color::rgb(255, 0, 0));
        ctx.set_fill_color(Color::rgb(255, 0, 0));
        ctx.save();
        ctx.restore();
        ctx.set_fill_color(Color::rgb(255, 0, 0));
        let ops: Vec<String> = ctx
            .finish()
            .content
            .operations
            .iter()
            .map(|op| op.operator.clone())
            .collect();
        assert_eq!(ops, ["rg", "q", "Q", "rg"]);
    }
}
