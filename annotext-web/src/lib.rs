//! Annotext Web - WebAssembly bindings for the annotated text renderer
//!
//! Annotations cross the JS boundary as JSON arrays in the same shape the
//! core serializes them: `{ start, end, styleId }` and `{ start, end, id }`.

use wasm_bindgen::prelude::*;

use annotext_core::{Document, RenderedDocument, SemanticAnnotation, TypographicAnnotation};

/// Install the panic hook once the module is loaded
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::debug_1(&"annotext initialized".into());
}

/// Render `text`, which starts at absolute offset `text_offset`
///
/// Only malformed JSON is an error; annotation coordinates are never rejected.
#[wasm_bindgen]
pub fn render(
    text: &str,
    text_offset: usize,
    typography_json: &str,
    semantics_json: &str,
) -> Result<String, JsValue> {
    let typography: Vec<TypographicAnnotation> = parse_list(typography_json, "typography")?;
    let semantics: Vec<SemanticAnnotation> = parse_list(semantics_json, "semantics")?;
    Ok(annotext_core::render(text, text_offset, &typography, &semantics))
}

/// Render a full JSON document line by line, returning the rendered segments as JSON
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(document_json: &str) -> Result<String, JsValue> {
    let doc: Document = annotext_core::from_json(document_json).map_err(to_js_error)?;
    let rendered = RenderedDocument::by_line(&doc);
    annotext_core::rendered_to_json(&rendered).map_err(to_js_error)
}

/// Escape a plain-text run the way rendered text runs are escaped
#[wasm_bindgen(js_name = escapeText)]
pub fn escape_text(text: &str) -> String {
    annotext_core::escape_text(text).into_owned()
}

fn parse_list<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<Vec<T>, JsValue> {
    // An empty argument means no annotations of that family
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| {
        let message = format!("Invalid {what} JSON: {e}");
        web_sys::console::warn_1(&message.as_str().into());
        JsValue::from_str(&message)
    })
}

fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}
