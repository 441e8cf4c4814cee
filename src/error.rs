//! Errors raised while rendering content.

use crate::shorthand::Rule;

/// Failure of a render call. Rendering stops at the first error and any
/// output produced so far should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// A sequence had no head element. `parent` is the shorthand of the
  /// nearest enclosing tag, `None` at the top level.
  #[error("empty content sequence{}", inside(.parent))]
  EmptySequence { parent: Option<String> },

  #[error("malformed content: {reason} (found {found})")]
  MalformedContent {
    reason: &'static str,
    found: &'static str,
  },

  #[error("invalid tag shorthand `{shorthand}`")]
  InvalidShorthand {
    shorthand: String,
    #[source]
    source: Box<pest::error::Error<Rule>>,
  },

  /// Writing rendered output failed.
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

fn inside(parent: &Option<String>) -> String {
  match parent {
    Some(tag) => format!(" inside `{}`", tag),
    None => String::new(),
  }
}
