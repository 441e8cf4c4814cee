use listmarkup::{Context, RenderError};
use wasm_bindgen::prelude::*;

/// Renders a JS data literal such as `["p", {class: "x"}, "text"]`.
/// `context` may be `undefined` or a plain object.
#[wasm_bindgen]
pub fn render(content: JsValue, context: JsValue) -> Result<String, JsError> {
  let content: serde_json::Value = serde_wasm_bindgen::from_value(content)
    .map_err(|err| JsError::new(&err.to_string()))?;

  let context = if context.is_undefined() || context.is_null() {
    Context::new()
  } else {
    serde_wasm_bindgen::from_value(context).map_err(|err| JsError::new(&err.to_string()))?
  };

  listmarkup::render_json(content, &context).map_err(|err| JsError::new(&err.to_string()))
}

/// Same as [`render`], with both arguments given as JSON text.
#[wasm_bindgen(js_name = renderJson)]
pub fn render_json(content: &str, context: &str) -> Result<String, JsError> {
  render_json_text(content, context).map_err(|err| JsError::new(&err.to_string()))
}

/// An empty `context` renders with no context values.
fn render_json_text(content: &str, context: &str) -> Result<String, RenderError> {
  let context = if context.trim().is_empty() {
    Context::new()
  } else {
    Context::from_json(context)?
  };

  listmarkup::render_json_str(content, &context)
}
