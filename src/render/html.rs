use crate::model::Attributes;
use std::fmt::Write;

static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// `<name key="value" ...>`. Values are not escaped, and void elements get
/// no trailing slash.
pub fn open_tag(name: &str, attributes: &Attributes) -> String {
  let mut output = format!("<{}", name);

  for (key, value) in attributes {
    // Writing into a String cannot fail.
    let _ = write!(output, " {}=\"{}\"", key, value);
  }

  output.push('>');
  output
}

pub fn close_tag(name: &str) -> String {
  format!("</{}>", name)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn void_table() {
    assert!(is_void_element("img"));
    assert!(is_void_element("wbr"));
    assert!(!is_void_element("div"));
    assert!(!is_void_element("IMG"));
  }

  #[test]
  fn open_tag_serializes_in_order() {
    let attrs = attrs! {
      "data-attr" => "123",
      "checked" => true,
      "style" => attrs! { "color" => "red" }
    };

    assert_eq!(
      open_tag("input", &attrs),
      r#"<input data-attr="123" checked="true" style="color: red;">"#
    );
  }

  #[test]
  fn open_tag_without_attributes() {
    assert_eq!(open_tag("p", &attrs! {}), "<p>");
    assert_eq!(close_tag("p"), "</p>");
  }
}
