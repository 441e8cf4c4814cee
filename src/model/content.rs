use super::{Attributes, Context};
use std::borrow::Cow;
use std::fmt;
use std::iter;

pub type InvocableFn<'a> = Box<dyn FnOnce(&Context) -> Content<'a> + 'a>;

/// A value the renderer knows how to turn into markup.
///
/// A `Sequence` whose first element is `Text` is a tag node
/// (`["p", {attrs}, children...]`). A `Sequence` whose first element is
/// another `Sequence` groups sibling trees without a wrapper tag.
pub enum Content<'a> {
  Absent,
  /// Raw markup, emitted as is.
  Text(Cow<'a, str>),
  Invocable(InvocableFn<'a>),
  Sequence(Sequence<'a>),
  Attributes(Attributes),
  Scalar(Box<dyn fmt::Display + 'a>),
}

impl<'a> Content<'a> {
  /// Content produced on demand from the render context.
  pub fn invocable<F>(f: F) -> Content<'a>
  where
    F: FnOnce(&Context) -> Content<'a> + 'a,
  {
    Content::Invocable(Box::new(f))
  }

  /// A single-pass sequence pulled from `items` while rendering.
  pub fn lazy<I>(items: I) -> Content<'a>
  where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Into<Content<'a>> + 'a,
  {
    Content::Sequence(Sequence::lazy(items))
  }

  pub fn scalar(value: impl fmt::Display + 'a) -> Content<'a> {
    Content::Scalar(Box::new(value))
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Content::Absent => "absent",
      Content::Text(_) => "text",
      Content::Invocable(_) => "invocable",
      Content::Sequence(_) => "sequence",
      Content::Attributes(_) => "attribute map",
      Content::Scalar(_) => "scalar",
    }
  }
}

impl<'a> fmt::Debug for Content<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Content::Absent => f.write_str("Absent"),
      Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
      Content::Invocable(_) => f.write_str("Invocable(..)"),
      Content::Sequence(seq) => fmt::Debug::fmt(seq, f),
      Content::Attributes(attrs) => f.debug_tuple("Attributes").field(attrs).finish(),
      Content::Scalar(value) => f.debug_tuple("Scalar").field(&value.to_string()).finish(),
    }
  }
}

impl<'a> From<&'a str> for Content<'a> {
  fn from(value: &'a str) -> Content<'a> {
    Content::Text(value.into())
  }
}

impl<'a> From<String> for Content<'a> {
  fn from(value: String) -> Content<'a> {
    Content::Text(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Content<'a> {
  fn from(value: Cow<'a, str>) -> Content<'a> {
    Content::Text(value)
  }
}

impl<'a> From<Attributes> for Content<'a> {
  fn from(value: Attributes) -> Content<'a> {
    Content::Attributes(value)
  }
}

impl<'a> From<Sequence<'a>> for Content<'a> {
  fn from(value: Sequence<'a>) -> Content<'a> {
    Content::Sequence(value)
  }
}

impl<'a> From<()> for Content<'a> {
  fn from(_: ()) -> Content<'a> {
    Content::Absent
  }
}

impl<'a, T: Into<Content<'a>>> From<Option<T>> for Content<'a> {
  fn from(value: Option<T>) -> Content<'a> {
    value.map_or(Content::Absent, Into::into)
  }
}

impl<'a, T: Into<Content<'a>> + 'a> From<Vec<T>> for Content<'a> {
  fn from(value: Vec<T>) -> Content<'a> {
    Content::Sequence(Sequence::lazy(value))
  }
}

macro_rules! scalar_content {
  ($($ty:ty),+) => {
    $(impl<'a> From<$ty> for Content<'a> {
      fn from(value: $ty) -> Content<'a> {
        Content::scalar(value)
      }
    })+
  };
}

scalar_content!(bool, char, i32, i64, u32, u64, usize, f32, f64);

/// An ordered, single-pass run of content.
///
/// Lists and lazy iterators share this representation; either way the
/// elements are pulled once, in order, and the sequence is dropped once
/// it reports exhaustion.
pub struct Sequence<'a> {
  items: Box<dyn Iterator<Item = Content<'a>> + 'a>,
}

impl<'a> Sequence<'a> {
  pub fn empty() -> Sequence<'a> {
    Sequence {
      items: Box::new(iter::empty()),
    }
  }

  pub fn lazy<I>(items: I) -> Sequence<'a>
  where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Into<Content<'a>> + 'a,
  {
    Sequence {
      items: Box::new(items.into_iter().map(Into::<Content<'a>>::into)),
    }
  }

  /// Puts a peeked element back in front of the remaining ones.
  pub fn prepend(self, first: Content<'a>) -> Sequence<'a> {
    Sequence {
      items: Box::new(iter::once(first).chain(self.items)),
    }
  }
}

impl<'a> Iterator for Sequence<'a> {
  type Item = Content<'a>;

  fn next(&mut self) -> Option<Content<'a>> {
    self.items.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.items.size_hint()
  }
}

impl<'a> From<Vec<Content<'a>>> for Sequence<'a> {
  fn from(value: Vec<Content<'a>>) -> Sequence<'a> {
    Sequence {
      items: Box::new(value.into_iter()),
    }
  }
}

impl<'a> FromIterator<Content<'a>> for Sequence<'a> {
  fn from_iter<I: IntoIterator<Item = Content<'a>>>(iter: I) -> Sequence<'a> {
    Sequence::from(iter.into_iter().collect::<Vec<_>>())
  }
}

impl<'a> fmt::Debug for Sequence<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("Sequence(..)")
  }
}
