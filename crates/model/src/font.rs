use thiserror::Error;

/// An encoded show-text payload: the bytes to place in a show-text command
/// plus the resource identifier of the font that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FontRun {
    pub font_id: String,
    pub bytes: Vec<u8>,
}

/// Description of a font for the document's font-resource table.
#[derive(Debug, Clone, PartialEq)]
pub struct FontResource {
    /// Resource name referenced by font-selection commands ("F1", ...).
    pub id: String,
    /// PostScript base font name.
    pub base_font: String,
}

#[derive(Debug, Clone, Error)]
#[error("font {font_id} cannot encode text: {reason}")]
pub struct FontEncodeError {
    pub font_id: String,
    pub reason: String,
}

/// Capability attached to each text run by the font-provider collaborator.
/// Glyph metrics and encoding tables live behind this seam; the renderer
/// only sees opaque encoded bytes and a resource entry to register.
pub trait PageFont: Send + Sync {
    /// Encode `text` into show-text bytes for this font.
    fn encode(&self, text: &str) -> Result<FontRun, FontEncodeError>;

    /// The resource entry to register when this font is used on a page.
    fn resource(&self) -> FontResource;
}
