use super::Attributes;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// An attribute or context value.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  #[default]
  Null,
  Boolean(bool),
  /// Kept as parsed, so `1.0` stays `1.0` and large integers stay exact.
  Number(Number),
  String(String),
  Array(Vec<Value>),
  Hash(Attributes),
}

impl Value {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(value) => Some(value),
      _ => None,
    }
  }

  /// Class tokens contributed by this value when it sits under the `class`
  /// attribute. Strings are split on whitespace, array elements are taken
  /// verbatim.
  pub fn class_tokens(&self) -> Vec<String> {
    match self {
      Value::String(value) => value.split_whitespace().map(str::to_owned).collect(),
      Value::Array(values) => values.iter().map(ToString::to_string).collect(),
      Value::Null | Value::Boolean(false) => vec![],
      other => vec![other.to_string()],
    }
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.into())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

macro_rules! number_value {
  ($($ty:ty),+) => {
    $(impl From<$ty> for Value {
      fn from(value: $ty) -> Value {
        Value::Number(value.into())
      }
    })+
  };
}

number_value!(i32, i64, u32, u64, usize);

/// Non-finite floats have no JSON number form and are kept as their text.
impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Number::from_f64(value).map_or_else(|| Value::String(value.to_string()), Value::Number)
  }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(value: Vec<T>) -> Value {
    Value::Array(value.into_iter().map(Into::into).collect())
  }
}

impl From<Attributes> for Value {
  fn from(value: Attributes) -> Value {
    Value::Hash(value)
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
  }
}

impl From<serde_json::Value> for Value {
  fn from(value: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match value {
      Json::Null => Value::Null,
      Json::Bool(value) => Value::Boolean(value),
      Json::Number(number) => Value::Number(number),
      Json::String(value) => Value::String(value),
      Json::Array(values) => Value::Array(values.into_iter().map(Value::from).collect()),
      Json::Object(map) => Value::Hash(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
    }
  }
}

/// Formats a value as it appears inside a quoted attribute. Hashes become
/// inline style declarations.
impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::Null => Ok(()),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Number(value) => write!(f, "{}", value),
      Value::String(value) => f.write_str(value),
      Value::Array(values) => {
        for (index, value) in values.iter().enumerate() {
          if index > 0 {
            f.write_str(" ")?;
          }
          write!(f, "{}", value)?;
        }
        Ok(())
      }
      Value::Hash(declarations) => {
        for (index, (key, value)) in declarations.iter().enumerate() {
          if index > 0 {
            f.write_str(" ")?;
          }
          write!(f, "{}: {};", key, value)?;
        }
        Ok(())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn booleans_format_lowercase() {
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(false).to_string(), "false");
  }

  #[test]
  fn hash_formats_as_style() {
    let style = Value::from(attrs! { "color" => "red", "margin" => 0 });
    assert_eq!(style.to_string(), "color: red; margin: 0;");
  }

  #[test]
  fn class_tokens_from_string_and_array() {
    assert_eq!(Value::from(" a  b ").class_tokens(), vec!["a", "b"]);
    assert_eq!(Value::from(vec!["x y", "z"]).class_tokens(), vec!["x y", "z"]);
    assert!(Value::Null.class_tokens().is_empty());
    assert_eq!(Value::from(3).class_tokens(), vec!["3"]);
  }

  #[test]
  fn json_numbers_are_kept_exact() {
    let value: Value = serde_json::from_str("[1, 1.0, 1.5, 18446744073709551615]").unwrap();
    assert_eq!(value.to_string(), "1 1.0 1.5 18446744073709551615");

    let value = Value::from(serde_json::json!([1, 1.5, "x", null]));
    assert_eq!(
      value,
      Value::Array(vec![1.into(), 1.5.into(), "x".into(), Value::Null])
    );
  }

  #[test]
  fn rust_numbers_format_like_json() {
    assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(Value::from(2.0).to_string(), "2.0");
    assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
  }

  #[test]
  fn deserializes_untagged() {
    let value: Value = serde_json::from_str(r#"{"b": [true, 2], "a": "x"}"#).unwrap();
    let keys: Vec<_> = match &value {
      Value::Hash(map) => map.keys().cloned().collect(),
      _ => vec![],
    };
    assert_eq!(keys, vec!["b", "a"]);
  }
}
