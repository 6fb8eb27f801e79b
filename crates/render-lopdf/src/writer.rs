use crate::content::PageArtifacts;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream};
use platen_model::{ImageData, ImageKind};
use platen_render_core::RenderError;
use std::collections::BTreeMap;
use std::io::{Seek, Write};

/// Incremental PDF writer. Pages stream out as rendered; fonts, images and
/// opacity states accumulate into a single document-level resource
/// dictionary shared by every page, which is what makes repeated font use
/// across pages idempotent.
pub struct PdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    resources_id: ObjectId,
    pages_id: ObjectId,
    catalog_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: BTreeMap<String, String>,
    images: BTreeMap<String, ObjectId>,
    ext_gstates: BTreeMap<String, (f32, f32)>,
    objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> PdfWriter<W> {
    pub fn new(mut writer: W) -> Result<Self, RenderError> {
        writer.write_all("%PDF-1.7\n%âãÏÓ\n".as_bytes())?;
        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 3,
            resources_id: (1, 0),
            pages_id: (2, 0),
            catalog_id: (3, 0),
            page_ids: Vec::new(),
            fonts: BTreeMap::new(),
            images: BTreeMap::new(),
            ext_gstates: BTreeMap::new(),
            objects: BTreeMap::new(),
        })
    }

    fn next_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    fn buffer(&mut self, object: Object) -> ObjectId {
        let id = self.next_id();
        self.objects.insert(id, object);
        id
    }

    /// Register image data under its resource name. Re-adding a name is a
    /// no-op.
    pub fn add_image(&mut self, name: &str, image: &ImageData) {
        if self.images.contains_key(name) {
            return;
        }
        let (filter, data) = match &image.kind {
            ImageKind::Jpeg(data) => (Some("DCTDecode"), data.clone()),
            ImageKind::Rgb8(data) => (None, data.clone()),
        };
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width_px as i64,
            "Height" => image.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        if let Some(filter) = filter {
            dict.set("Filter", filter);
        }
        let id = self.buffer(Object::Stream(Stream::new(dict, data)));
        self.images.insert(name.to_string(), id);
    }

    /// Append one rendered page. Its resource references merge into the
    /// shared dictionary; an image name no page registered is an error.
    pub fn write_page(
        &mut self,
        artifacts: PageArtifacts,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        for name in &artifacts.images {
            if !self.images.contains_key(name) {
                return Err(RenderError::Pdf(format!("image resource not registered: {name}")));
            }
        }
        for font in artifacts.fonts {
            self.fonts.entry(font.id).or_insert(font.base_font);
        }
        self.ext_gstates.extend(artifacts.opacities);

        let encoded = artifacts
            .content
            .encode()
            .map_err(|e| RenderError::Pdf(format!("content stream encoding: {e}")))?;
        let content_id = self.buffer(Object::Stream(Stream::new(dictionary! {}, encoded)));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer(page_dict.into());
        self.page_ids.push(page_id);
        Ok(())
    }

    fn resources_dict(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (id, base_font) in &self.fonts {
            fonts.set(
                id.clone(),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font.as_str(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }

        let mut resources = dictionary! { "Font" => fonts };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.images {
                xobjects.set(name.clone(), Object::Reference(*id));
            }
            resources.set("XObject", xobjects);
        }
        if !self.ext_gstates.is_empty() {
            let mut states = Dictionary::new();
            for (name, (fill, stroke)) in &self.ext_gstates {
                states.set(
                    name.clone(),
                    dictionary! {
                        "Type" => "ExtGState",
                        "ca" => *fill,
                        "CA" => *stroke,
                    },
                );
            }
            resources.set("ExtGState", states);
        }
        resources
    }

    /// Write the deferred objects, cross-reference table and trailer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        self.objects.insert(self.resources_id, self.resources_dict().into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.objects.insert(self.pages_id, pages_dict.into());
        self.objects.insert(
            self.catalog_id,
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );

        for (id, object) in &self.objects {
            let offset = self.writer.stream_position()?;
            self.xref.insert(
                id.0,
                XrefEntry::Normal { offset: offset as u32, generation: id.1 },
            );
            write!(self.writer, "{} {} obj\n", id.0, id.1)?;
            serialize::object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        serialize::xref(&mut self.writer, &self.xref)?;

        let trailer = dictionary! {
            "Size" => self.xref.size as i64,
            "Root" => self.catalog_id,
        };
        writeln!(self.writer, "trailer")?;
        serialize::dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod serialize {
    use lopdf::xref::{Xref, XrefEntry};
    use lopdf::{Dictionary, Object, StringFormat};
    use std::collections::BTreeMap;
    use std::io::{self, Write};

    pub fn object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    writer.write_all(b"<")?;
                    for byte in s {
                        write!(writer, "{:02X}", byte)?;
                    }
                    writer.write_all(b">")
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    self::object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Object ids here are allocated densely from 1, so a single section
    /// starting at 0 covers the table; any gap becomes a free entry.
    pub fn xref(writer: &mut dyn Write, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", xref.size)?;
        for id in 0..xref.size {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?;
                }
                _ => writeln!(writer, "0000000000 65535 f ")?,
            }
        }
        Ok(())
    }
}
