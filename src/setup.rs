//! Document-level options resolved before any page renders.

use platen_model::{page_size_preset, MarginSpec, Margins, Orientation, PageSize};
use platen_render_core::RenderError;
use serde::Deserialize;

const DEFAULT_PAGE_SIZE: &str = "A4";
const DEFAULT_MARGIN: f32 = 40.0;

/// Page size request: a preset name or explicit portrait dimensions in
/// points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageSizeSpec {
    Named(String),
    Custom { width: f32, height: f32 },
}

/// Options shared by every page of a document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentOptions {
    #[serde(default)]
    pub page_size: Option<PageSizeSpec>,
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default)]
    pub margins: Option<MarginSpec>,
}

fn default_orientation() -> Orientation {
    Orientation::Portrait
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            page_size: None,
            orientation: Orientation::Portrait,
            margins: None,
        }
    }
}

impl DocumentOptions {
    /// Resolve to concrete page dimensions and margins. Landscape swaps
    /// the preset's portrait dimensions; unknown preset names and margin
    /// lists of the wrong length are errors.
    pub fn resolve(&self) -> Result<(PageSize, Margins), RenderError> {
        let (width, height) = match &self.page_size {
            None => page_size_preset(DEFAULT_PAGE_SIZE)
                .ok_or_else(|| RenderError::UnrecognizedPageSize(DEFAULT_PAGE_SIZE.into()))?,
            Some(PageSizeSpec::Named(name)) => page_size_preset(name)
                .ok_or_else(|| RenderError::UnrecognizedPageSize(name.clone()))?,
            Some(PageSizeSpec::Custom { width, height }) => (*width, *height),
        };
        let (width, height) = match self.orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape if width < height => (height, width),
            Orientation::Landscape => (width, height),
        };

        let margins = match &self.margins {
            None => Margins::all(DEFAULT_MARGIN),
            Some(spec) => spec
                .expand()
                .ok_or(RenderError::InvalidPageMarginShape(spec.arity()))?,
        };

        Ok((PageSize::new(width, height, self.orientation), margins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_portrait_a4_with_uniform_margins() {
        let (size, margins) = DocumentOptions::default().resolve().unwrap();
        assert_eq!((size.width, size.height), (595.28, 841.89));
        assert_eq!(size.orientation, Orientation::Portrait);
        assert_eq!(margins, Margins::all(DEFAULT_MARGIN));
    }

    #[test]
    fn landscape_swaps_preset_dimensions() {
        let options = DocumentOptions {
            page_size: Some(PageSizeSpec::Named("letter".into())),
            orientation: Orientation::Landscape,
            margins: None,
        };
        let (size, _) = options.resolve().unwrap();
        assert_eq!((size.width, size.height), (792.0, 612.0));
    }

    #[test]
    fn unknown_preset_name_is_reported() {
        let options = DocumentOptions {
            page_size: Some(PageSizeSpec::Named("A11".into())),
            ..Default::default()
        };
        let err = options.resolve().unwrap_err();
        assert!(matches!(err, RenderError::UnrecognizedPageSize(name) if name == "A11"));
    }

    #[test]
    fn three_element_margin_list_is_rejected() {
        let options = DocumentOptions {
            margins: Some(MarginSpec::List(vec![1.0, 2.0, 3.0])),
            ..Default::default()
        };
        let err = options.resolve().unwrap_err();
        assert!(matches!(err, RenderError::InvalidPageMarginShape(3)));
    }

    #[test]
    fn options_deserialize_from_json() {
        let options: DocumentOptions = serde_json::from_str(
            r#"{ "page_size": "a5", "orientation": "landscape", "margins": [10, 20] }"#,
        )
        .unwrap();
        let (size, margins) = options.resolve().unwrap();
        assert_eq!((size.width, size.height), (595.28, 419.53));
        assert_eq!(margins, Margins::symmetric(10.0, 20.0));
    }

    #[test]
    fn custom_dimensions_pass_through() {
        let options: DocumentOptions = serde_json::from_str(
            r#"{ "page_size": { "width": 300, "height": 500 } }"#,
        )
        .unwrap();
        let (size, _) = options.resolve().unwrap();
        assert_eq!((size.width, size.height), (300.0, 500.0));
    }
}
