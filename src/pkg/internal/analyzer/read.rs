use lopdf::Document;

use crate::prelude::Result;

/// Decodes every page in page order and concatenates the text. Any load or
/// per-page decode failure fails the whole extraction; the caller turns that
/// into the sentinel text.
pub fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    let doc = Document::load_mem(data)?;
    let pages = doc.get_pages();
    let mut text = String::new();
    for page_num in pages.keys() {
        text.push_str(&doc.extract_text(&[*page_num])?);
    }
    Ok(text)
}
