//! Shared helpers: render into memory and parse the result back with lopdf
//! so assertions run against what a PDF consumer actually sees.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as PdfDocument, Object};
use platen_model::Document;
use std::io::Cursor;

pub fn render_to_pdf(document: &Document) -> PdfDocument {
    let cursor = platen::render(document, Cursor::new(Vec::new())).expect("render failed");
    PdfDocument::load_mem(&cursor.into_inner()).expect("output did not parse")
}

/// Decoded content-stream operations of a page, 1-based page number.
pub fn page_ops(doc: &PdfDocument, page_number: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let raw = doc.get_page_content(page_id).expect("page content");
    Content::decode(&raw).expect("content decode").operations
}

pub fn media_box(doc: &PdfDocument, page_number: u32) -> (f32, f32) {
    let pages = doc.get_pages();
    let page = doc.get_dictionary(pages[&page_number]).expect("page dict");
    let mb = page
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .expect("MediaBox");
    (mb[2].as_f32().unwrap(), mb[3].as_f32().unwrap())
}

pub fn count_ops(ops: &[Operation], operator: &str) -> usize {
    ops.iter().filter(|op| op.operator == operator).count()
}

pub fn find_op<'a>(ops: &'a [Operation], operator: &str) -> Option<&'a Operation> {
    ops.iter().find(|op| op.operator == operator)
}

pub fn operands_f32(op: &Operation) -> Vec<f32> {
    op.operands.iter().map(|o| o.as_float().unwrap()).collect()
}

/// The shared resources dictionary of a page, following the indirect
/// reference.
pub fn page_resources<'a>(doc: &'a PdfDocument, page_number: u32) -> &'a Dictionary {
    let pages = doc.get_pages();
    let page = doc.get_dictionary(pages[&page_number]).expect("page dict");
    match page.get(b"Resources").expect("Resources") {
        Object::Reference(id) => doc.get_dictionary(*id).expect("resources dict"),
        Object::Dictionary(dict) => dict,
        other => panic!("unexpected Resources object: {other:?}"),
    }
}

pub fn resource_subdict<'a>(
    doc: &'a PdfDocument,
    page_number: u32,
    key: &str,
) -> Option<&'a Dictionary> {
    let resources = page_resources(doc, page_number);
    let entry = resources.get(key.as_bytes()).ok()?;
    match entry {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}
