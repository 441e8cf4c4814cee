//! Render nested data literals as HTML.
//!
//! A tag node is a sequence whose head is a tag shorthand
//! (`tag#id.class`), optionally followed by an attribute map, followed by
//! child content:
//!
//! ```
//! use listmarkup::{attrs, markup, render, Context};
//!
//! let page = markup![
//!   "#main.card",
//!   attrs! { "class" => "wide" },
//!   markup!["img", attrs! { "src" => "a.png" }],
//!   markup!["p", "hello"],
//! ];
//!
//! assert_eq!(
//!   render([page], &Context::new()).unwrap(),
//!   r#"<div class="card wide" id="main"><img src="a.png"><p>hello</p></div>"#
//! );
//! ```
//!
//! Text is emitted verbatim, without escaping.

#[macro_use]
extern crate pest_derive;
extern crate pest;

#[macro_use]
pub mod macros;
pub mod convert;
pub mod error;
pub mod model;
pub mod render;
pub mod shorthand;

pub use error::RenderError;
pub use model::{Attributes, Content, Context, Sequence, Value};
pub use render::{
  is_void_element, render, render_content, render_iterable, render_json, render_json_str,
  render_tag, write_html, Fragments,
};
