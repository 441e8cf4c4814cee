use super::{Attributes, Value};
use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// Read-only values handed to every invocable node during a render.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
  values: Attributes,
}

impl Context {
  pub fn new() -> Context {
    Context::default()
  }

  pub fn from_json(input: &str) -> Result<Context, RenderError> {
    Ok(serde_json::from_str(input)?)
  }

  pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Context {
    self.values.insert(key.into(), value.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.values.get(key)
  }

  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Value::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.values.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Context {
    Context {
      values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl From<Attributes> for Context {
  fn from(values: Attributes) -> Context {
    Context { values }
  }
}
