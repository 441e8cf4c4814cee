//! HTML rendering of [`Content`] trees.

use crate::error::RenderError;
use crate::model::{Content, Context};
use std::io::Write;

pub mod attributes;
pub mod fragments;
pub mod html;

pub use fragments::{render_content, render_iterable, render_tag, Fragments};
pub use html::is_void_element;

/// Renders every item in order and concatenates the markup.
///
/// Nothing is returned on failure; the error names the node that caused
/// it.
pub fn render<'a, I>(content: I, context: &Context) -> Result<String, RenderError>
where
  I: IntoIterator,
  I::Item: Into<Content<'a>>,
{
  let mut output = String::new();

  for item in content {
    for fragment in render_content(item.into(), context) {
      match fragment {
        Ok(fragment) => output.push_str(&fragment),
        Err(err) => {
          tracing::debug!(error = %err, "render failed");
          return Err(err);
        }
      }
    }
  }

  Ok(output)
}

/// Like [`render`], but writes each fragment as soon as it is produced.
pub fn write_html<'a, I, W>(
  content: I,
  context: &Context,
  writer: &mut W,
) -> Result<(), RenderError>
where
  I: IntoIterator,
  I::Item: Into<Content<'a>>,
  W: Write,
{
  for item in content {
    for fragment in render_content(item.into(), context) {
      let fragment = fragment.map_err(|err| {
        tracing::debug!(error = %err, "render failed");
        err
      })?;
      writer.write_all(fragment.as_bytes())?;
    }
  }

  Ok(())
}

/// Renders a JSON data literal, e.g. `["p", {"class": "x"}, "text"]`.
pub fn render_json(content: serde_json::Value, context: &Context) -> Result<String, RenderError> {
  render([Content::from(content)], context)
}

pub fn render_json_str(content: &str, context: &Context) -> Result<String, RenderError> {
  let value: serde_json::Value = serde_json::from_str(content)?;
  render_json(value, context)
}
