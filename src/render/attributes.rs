use crate::model::{Attributes, Value};
use crate::shorthand::Shorthand;

/// Folds the shorthand's id and classes into the explicit attribute map.
///
/// A shorthand id replaces an explicit `id`. Classes are the shorthand's,
/// then the explicit ones, without de-duplication. Keys already present
/// keep their position; new keys are appended.
pub fn merge_attributes(shorthand: &Shorthand, mut extra: Attributes) -> Attributes {
  if let Some(id) = &shorthand.id {
    extra.insert("id".into(), Value::String(id.clone()));
  }

  let mut classes = shorthand.classes.clone();
  if let Some(value) = extra.get("class") {
    classes.extend(value.class_tokens());
  }

  if !classes.is_empty() {
    extra.insert("class".into(), Value::String(classes.join(" ")));
  }

  extra
}
