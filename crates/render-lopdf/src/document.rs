use crate::page::render_page;
use crate::writer::PdfWriter;
use platen_model::{Document, Orientation, PageSize};
use platen_render_core::{RenderError, TextDecorator};
use std::io::{Seek, Write};
use std::mem;

/// Physical page dimensions carried across the document. The first page
/// fixes them; later pages only flip them when their declared orientation
/// disagrees, so explicit custom sizes are never overwritten mid-document.
pub struct PhysicalPageState {
    width: f32,
    height: f32,
}

impl PhysicalPageState {
    pub fn new(size: PageSize) -> Self {
        Self { width: size.width, height: size.height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    /// Swap the dimensions when the declared orientation differs from the
    /// current physical one. Returns whether a swap happened.
    pub fn adjust_for(&mut self, declared: Orientation) -> bool {
        if self.orientation() != declared {
            mem::swap(&mut self.width, &mut self.height);
            true
        } else {
            false
        }
    }
}

/// Render every page of the document and write the finished PDF.
pub fn render_document<W: Write + Seek>(
    document: &Document,
    decorator: &dyn TextDecorator,
    writer: W,
) -> Result<W, RenderError> {
    let mut pdf = PdfWriter::new(writer)?;

    let mut image_names: Vec<&String> = document.images.keys().collect();
    image_names.sort();
    for name in image_names {
        pdf.add_image(name, &document.images[name]);
    }

    let mut physical: Option<PhysicalPageState> = None;
    for (index, page) in document.pages.iter().enumerate() {
        let state = match &mut physical {
            None => physical.insert(PhysicalPageState::new(page.size)),
            Some(state) => {
                let declared = page.size.orientation;
                if state.adjust_for(declared) {
                    log::debug!(
                        "page {index}: switching to {declared:?} ({} x {})",
                        state.width(),
                        state.height()
                    );
                }
                state
            }
        };
        let artifacts = render_page(page, index, state.width(), state.height(), decorator)?;
        pdf.write_page(artifacts, state.width(), state.height())?;
    }

    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_change_swaps_dimensions_once() {
        let mut state = PhysicalPageState::new(PageSize::portrait(600.0, 800.0));
        assert_eq!(state.orientation(), Orientation::Portrait);
        assert!(state.adjust_for(Orientation::Landscape));
        assert_eq!((state.width(), state.height()), (800.0, 600.0));
        assert!(!state.adjust_for(Orientation::Landscape));
        assert_eq!((state.width(), state.height()), (800.0, 600.0));
    }

    #[test]
    fn matching_orientation_keeps_custom_size() {
        let mut state = PhysicalPageState::new(PageSize::portrait(300.0, 500.0));
        assert!(!state.adjust_for(Orientation::Portrait));
        assert_eq!((state.width(), state.height()), (300.0, 500.0));
    }
}
