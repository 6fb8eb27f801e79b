use platen_model::FontEncodeError;
use thiserror::Error;

/// Errors surfaced by document rendering. All variants are fatal at this
/// layer: rendering is deterministic, so retrying with the same input
/// reproduces the same failure, and the partial output is discarded by the
/// caller.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("restore without matching save on page {page}")]
    UnbalancedGraphicsStack { page: usize },
    #[error("font {font_id} cannot encode text: {reason}")]
    FontEncodingFailure { font_id: String, reason: String },
    #[error("unrecognized page size: {0}")]
    UnrecognizedPageSize(String),
    #[error("page margins must be one number or a 2- or 4-element list, got {0} values")]
    InvalidPageMarginShape(usize),
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<FontEncodeError> for RenderError {
    fn from(err: FontEncodeError) -> Self {
        RenderError::FontEncodingFailure { font_id: err.font_id, reason: err.reason }
    }
}
