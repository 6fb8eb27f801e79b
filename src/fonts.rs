//! The fourteen-ish standard faces every PDF viewer ships, exposed as
//! [`PageFont`] implementations that encode to WinAnsi bytes.

use platen_model::{FontEncodeError, FontResource, FontRun, PageFont};

/// A built-in Type1 face. These require no font embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    Courier,
    CourierBold,
}

impl BuiltinFace {
    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFace::Helvetica => "Helvetica",
            BuiltinFace::HelveticaBold => "Helvetica-Bold",
            BuiltinFace::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFace::TimesRoman => "Times-Roman",
            BuiltinFace::TimesBold => "Times-Bold",
            BuiltinFace::TimesItalic => "Times-Italic",
            BuiltinFace::Courier => "Courier",
            BuiltinFace::CourierBold => "Courier-Bold",
        }
    }
}

/// WinAnsi (CP1252) code for a character, if it has one. The 0x80..0x9F
/// block is remapped; 0xA0..0xFF matches Latin-1.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' => Some(c as u8),
        '\u{A0}'..='\u{FF}' => Some(c as u32 as u8),
        '\u{20AC}' => Some(0x80),
        '\u{201A}' => Some(0x82),
        '\u{0192}' => Some(0x83),
        '\u{201E}' => Some(0x84),
        '\u{2026}' => Some(0x85),
        '\u{2020}' => Some(0x86),
        '\u{2021}' => Some(0x87),
        '\u{02C6}' => Some(0x88),
        '\u{2030}' => Some(0x89),
        '\u{0160}' => Some(0x8A),
        '\u{2039}' => Some(0x8B),
        '\u{0152}' => Some(0x8C),
        '\u{017D}' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{02DC}' => Some(0x98),
        '\u{2122}' => Some(0x99),
        '\u{0161}' => Some(0x9A),
        '\u{203A}' => Some(0x9B),
        '\u{0153}' => Some(0x9C),
        '\u{017E}' => Some(0x9E),
        '\u{0178}' => Some(0x9F),
        _ => None,
    }
}

/// A built-in face registered under a content-stream resource id such as
/// `F1`. Characters outside WinAnsi fail the run rather than degrading to
/// a replacement glyph.
pub struct BuiltinFont {
    id: String,
    face: BuiltinFace,
}

impl BuiltinFont {
    pub fn new(id: impl Into<String>, face: BuiltinFace) -> Self {
        Self { id: id.into(), face }
    }
}

impl PageFont for BuiltinFont {
    fn encode(&self, text: &str) -> Result<FontRun, FontEncodeError> {
        let mut bytes = Vec::with_capacity(text.len());
        for c in text.chars() {
            match win_ansi_byte(c) {
                Some(byte) => bytes.push(byte),
                None => {
                    return Err(FontEncodeError {
                        font_id: self.id.clone(),
                        reason: format!("no WinAnsi code for {c:?} (U+{:04X})", c as u32),
                    })
                }
            }
        }
        Ok(FontRun { font_id: self.id.clone(), bytes })
    }

    fn resource(&self) -> FontResource {
        FontResource {
            id: self.id.clone(),
            base_font: self.face.base_font().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        let font = BuiltinFont::new("F1", BuiltinFace::Helvetica);
        let run = font.encode("Hello, world!").unwrap();
        assert_eq!(run.bytes, b"Hello, world!");
        assert_eq!(run.font_id, "F1");
    }

    #[test]
    fn cp1252_punctuation_remaps() {
        assert_eq!(win_ansi_byte('\u{20AC}'), Some(0x80));
        assert_eq!(win_ansi_byte('\u{2014}'), Some(0x97));
        assert_eq!(win_ansi_byte('\u{E9}'), Some(0xE9));
    }

    #[test]
    fn unmapped_character_fails_with_the_font_id() {
        let font = BuiltinFont::new("F2", BuiltinFace::TimesRoman);
        let err = font.encode("snow \u{2603}").unwrap_err();
        assert_eq!(err.font_id, "F2");
        assert!(err.reason.contains("U+2603"));
    }

    #[test]
    fn resource_names_the_postscript_face() {
        let font = BuiltinFont::new("F1", BuiltinFace::CourierBold);
        assert_eq!(font.resource().base_font, "Courier-Bold");
    }
}
