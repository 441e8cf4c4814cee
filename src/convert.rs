use crate::model::{Content, Sequence, Value};
use serde_json::Value as Json;

/// JSON arrays become sequences, objects become attribute maps and `null`
/// is absent content. Object keys keep their document order.
impl<'a> From<Json> for Content<'a> {
  fn from(value: Json) -> Content<'a> {
    match value {
      Json::Null => Content::Absent,
      Json::String(text) => Content::Text(text.into()),
      Json::Array(items) => Content::Sequence(Sequence::lazy(items)),
      Json::Object(map) => {
        Content::Attributes(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
      }
      Json::Bool(value) => Content::scalar(value),
      Json::Number(number) => Content::scalar(number),
    }
  }
}
