use crate::error::RenderError;
use lopdf::content::Content;
use platen_model::TextLine;

/// Hooks supplied by the text-decoration collaborator. Each hook is called
/// exactly once per line: backgrounds before any glyph is shown,
/// decorations after the last run, so backgrounds never occlude glyphs and
/// glyphs never occlude decoration ink.
pub trait TextDecorator {
    /// Draw highlight/background boxes under the line.
    fn draw_background(
        &self,
        line: &TextLine,
        x: f32,
        y: f32,
        page_height: f32,
        content: &mut Content,
    ) -> Result<(), RenderError>;

    /// Draw underline/strikethrough/overline geometry over the line.
    fn draw_decorations(
        &self,
        line: &TextLine,
        x: f32,
        y: f32,
        page_height: f32,
        content: &mut Content,
    ) -> Result<(), RenderError>;
}

/// Decorator that draws nothing.
pub struct NoDecoration;

impl TextDecorator for NoDecoration {
    fn draw_background(
        &self,
        _line: &TextLine,
        _x: f32,
        _y: f32,
        _page_height: f32,
        _content: &mut Content,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_decorations(
        &self,
        _line: &TextLine,
        _x: f32,
        _y: f32,
        _page_height: f32,
        _content: &mut Content,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
