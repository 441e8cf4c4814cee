use indexmap::IndexMap;

pub mod content;
pub mod context;
pub mod value;

pub use content::{Content, Sequence};
pub use context::Context;
pub use value::Value;

/// Attribute map, kept in insertion order.
pub type Attributes = IndexMap<String, Value>;
