//! Parser for CSS-selector-like tag shorthands such as `div#main.card`.
//!
//! The first `.`-separated segment holds the tag name and an optional
//! `#id`; every later segment is a class, taken verbatim. A shorthand that
//! starts with `#` or `.` is rendered as a `div`.

use crate::error::RenderError;
use pest::iterators::Pair;
use pest::Parser;
use std::borrow::Cow;

#[derive(Parser)]
#[grammar = "shorthand.pest"]
struct ShorthandParser;

#[derive(PartialEq, Debug, Default)]
pub struct Shorthand {
  pub tag: String,
  pub id: Option<String>,
  pub classes: Vec<String>,
}

pub fn normalize(input: &str) -> Cow<'_, str> {
  if input.starts_with('#') || input.starts_with('.') {
    Cow::Owned(format!("div{}", input))
  } else {
    Cow::Borrowed(input)
  }
}

/// Parses a shorthand. More than one `#` in the tag segment, or a missing
/// tag name, is rejected.
pub fn parse(input: &str) -> Result<Shorthand, RenderError> {
  let normalized = normalize(input);
  let mut pairs =
    ShorthandParser::parse(Rule::Shorthand, &normalized).map_err(|err| {
      RenderError::InvalidShorthand {
        shorthand: input.to_owned(),
        source: Box::new(err),
      }
    })?;

  Ok(pairs.next().map(convert_shorthand).unwrap_or_default())
}

fn convert_shorthand(pair: Pair<Rule>) -> Shorthand {
  let mut shorthand = Shorthand::default();

  for item in pair.into_inner() {
    match item.as_rule() {
      Rule::TagName => shorthand.tag = item.as_str().to_owned(),
      Rule::Id => shorthand.id = Some(item.as_str().to_owned()),
      Rule::Class => shorthand.classes.push(item.as_str().to_owned()),
      _ => (),
    }
  }

  shorthand
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn shorthand(tag: &str, id: Option<&str>, classes: &[&str]) -> Shorthand {
    Shorthand {
      tag: tag.into(),
      id: id.map(Into::into),
      classes: classes.iter().map(|c| c.to_string()).collect(),
    }
  }

  #[test]
  fn parse_plain_tag() {
    assert_eq!(parse("p").unwrap(), shorthand("p", None, &[]));
  }

  #[test]
  fn parse_tag_with_id_and_classes() {
    assert_eq!(
      parse("section#main.card.wide").unwrap(),
      shorthand("section", Some("main"), &["card", "wide"])
    );
  }

  #[test]
  fn parse_defaults_to_div() {
    assert_eq!(parse("#my.test").unwrap(), shorthand("div", Some("my"), &["test"]));
    assert_eq!(parse(".test").unwrap(), shorthand("div", None, &["test"]));
  }

  #[test]
  fn parse_keeps_hash_inside_class_segment() {
    assert_eq!(parse("a.b#c").unwrap(), shorthand("a", None, &["b#c"]));
  }

  #[test]
  fn parse_keeps_empty_segments() {
    assert_eq!(parse("p..x").unwrap(), shorthand("p", None, &["", "x"]));
    assert_eq!(parse("p#").unwrap(), shorthand("p", Some(""), &[]));
  }

  #[test]
  fn parse_rejects_second_id() {
    let err = parse("div#a#b").unwrap_err();
    assert!(matches!(
      err,
      RenderError::InvalidShorthand { ref shorthand, .. } if shorthand == "div#a#b"
    ));
  }

  #[test]
  fn parse_rejects_empty_shorthand() {
    assert!(matches!(parse(""), Err(RenderError::InvalidShorthand { .. })));
  }

  #[test]
  fn normalize_only_touches_bare_selectors() {
    assert_eq!(normalize("#x"), "div#x");
    assert_eq!(normalize("span.x"), "span.x");
  }
}
