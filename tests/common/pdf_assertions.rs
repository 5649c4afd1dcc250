#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Decoded content-stream operations of one page
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|raw| Content::decode(&raw).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Strings shown with `Tj` on a page, decoded as Latin-1
pub fn shown_text(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_operations(doc, page_num)
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => {
                Some(bytes.iter().map(|&b| char::from(b)).collect::<String>())
            }
            _ => None,
        })
        .collect()
}

/// `[x, y, w, h]` of every rectangle appended with `re` on a page, in drawing order
pub fn stroked_rects(doc: &LopdfDocument, page_num: u32) -> Vec<[f32; 4]> {
    page_operations(doc, page_num)
        .into_iter()
        .filter(|op| op.operator == "re")
        .filter_map(|op| {
            let values: Vec<f32> = op.operands.iter().filter_map(|o| o.as_float().ok()).collect();
            <[f32; 4]>::try_from(values).ok()
        })
        .collect()
}

/// Base font names referenced from the page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Some(resources) = page.get(b"Resources").ok().and_then(|r| resolve_dict(doc, r)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve_dict(doc, f)) else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Some(base) = resolve_dict(doc, font)
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(base).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a lopdf::Dictionary> {
    match obj.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => obj.as_dict().ok(),
    }
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page = doc.get_dictionary(*pages.get(&page_num)?).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// Assert that a page shows a string exactly
#[macro_export]
macro_rules! assert_pdf_shows_text {
    ($pdf:expr, $text:expr) => {
        let shown = $crate::common::pdf_assertions::shown_text(&$pdf.doc, 1);
        assert!(
            shown.iter().any(|s| s == $text),
            "PDF should show '{}', but shown strings were: {:?}",
            $text,
            shown
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $name:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f == $name),
            "PDF should reference font '{}', fonts found: {:?}",
            $name,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 0.01,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 0.01,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
