use super::attributes::merge_attributes;
use super::html::{close_tag, is_void_element, open_tag};
use crate::error::RenderError;
use crate::model::{Attributes, Content, Context, Sequence};
use crate::shorthand;
use std::borrow::Cow;
use std::rc::Rc;

/// Shorthand of the tag whose children are being rendered, if any.
type Parent = Option<Rc<str>>;

enum Frame<'a> {
  Node(Content<'a>, Parent),
  Tag(Cow<'a, str>, Sequence<'a>),
  Children(Sequence<'a>, Parent),
  Close(String),
}

/// Lazy, single-pass stream of markup fragments.
///
/// Pending work lives on an explicit stack, so deeply nested content does
/// not grow the call stack. After yielding an error the stream ends.
pub struct Fragments<'c, 'a> {
  context: &'c Context,
  stack: Vec<Frame<'a>>,
}

impl<'c, 'a> Fragments<'c, 'a> {
  fn new(context: &'c Context, frame: Frame<'a>) -> Self {
    Fragments {
      context,
      stack: vec![frame],
    }
  }

  fn fail(&mut self, err: RenderError) -> Option<Result<Cow<'a, str>, RenderError>> {
    self.stack.clear();
    Some(Err(err))
  }

  fn dispatch(
    &mut self,
    node: Content<'a>,
    parent: Parent,
  ) -> Result<Option<Cow<'a, str>>, RenderError> {
    match node {
      Content::Absent => Ok(Some(Cow::Borrowed(""))),
      Content::Text(text) => Ok(Some(text)),
      Content::Invocable(f) => {
        tracing::trace!("invoking content callable");
        self.stack.push(Frame::Node(f(self.context), parent));
        Ok(None)
      }
      Content::Sequence(seq) => self.iterable(seq, parent),
      Content::Attributes(_) => Err(RenderError::MalformedContent {
        reason: "attribute map outside of a tag",
        found: "attribute map",
      }),
      Content::Scalar(value) => Ok(Some(Cow::Owned(value.to_string()))),
    }
  }

  fn iterable(
    &mut self,
    mut seq: Sequence<'a>,
    parent: Parent,
  ) -> Result<Option<Cow<'a, str>>, RenderError> {
    match seq.next() {
      None => Err(RenderError::EmptySequence {
        parent: parent.map(|tag| tag.to_string()),
      }),
      Some(Content::Text(tag)) => self.tag(tag, seq).map(Some),
      Some(Content::Sequence(head)) => {
        self.stack.push(Frame::Children(seq, parent.clone()));
        self.stack.push(Frame::Node(Content::Sequence(head), parent));
        Ok(None)
      }
      Some(other) => Err(RenderError::MalformedContent {
        reason: "sequence head is neither a tag name nor a nested sequence",
        found: other.kind(),
      }),
    }
  }

  fn tag(
    &mut self,
    tag: Cow<'a, str>,
    mut remainder: Sequence<'a>,
  ) -> Result<Cow<'a, str>, RenderError> {
    let (extra, children) = match remainder.next() {
      None => (Attributes::new(), Sequence::empty()),
      Some(Content::Attributes(extra)) => (extra, remainder),
      Some(first) => (Attributes::new(), remainder.prepend(first)),
    };

    let shorthand = shorthand::parse(&tag)?;
    let attributes = merge_attributes(&shorthand, extra);
    tracing::trace!(tag = %shorthand.tag, "opening tag");

    if !is_void_element(&shorthand.tag) {
      self.stack.push(Frame::Close(close_tag(&shorthand.tag)));
    }
    self.stack.push(Frame::Children(children, Some(Rc::from(&*tag))));

    Ok(Cow::Owned(open_tag(&shorthand.tag, &attributes)))
  }
}

impl<'c, 'a> Iterator for Fragments<'c, 'a> {
  type Item = Result<Cow<'a, str>, RenderError>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(frame) = self.stack.pop() {
      let step = match frame {
        Frame::Close(tag) => return Some(Ok(Cow::Owned(tag))),
        Frame::Children(mut seq, parent) => {
          if let Some(child) = seq.next() {
            self.stack.push(Frame::Children(seq, parent.clone()));
            self.stack.push(Frame::Node(child, parent));
          }
          continue;
        }
        Frame::Node(node, parent) => self.dispatch(node, parent),
        Frame::Tag(tag, remainder) => self.tag(tag, remainder).map(Some),
      };

      match step {
        Ok(Some(fragment)) => return Some(Ok(fragment)),
        Ok(None) => continue,
        Err(err) => return self.fail(err),
      }
    }

    None
  }
}

/// Renders any content value, see [`Content`] for the accepted shapes.
pub fn render_content<'c, 'a>(node: Content<'a>, context: &'c Context) -> Fragments<'c, 'a> {
  Fragments::new(context, Frame::Node(node, None))
}

/// Renders a sequence: a tag node when its head is text, otherwise a
/// group of sibling trees whose head is itself a sequence.
pub fn render_iterable<'c, 'a>(seq: Sequence<'a>, context: &'c Context) -> Fragments<'c, 'a> {
  Fragments::new(context, Frame::Node(Content::Sequence(seq), None))
}

/// Renders one element from its shorthand and the rest of its node: an
/// optional attribute map followed by children.
pub fn render_tag<'c, 'a>(
  tag: impl Into<Cow<'a, str>>,
  remainder: Sequence<'a>,
  context: &'c Context,
) -> Fragments<'c, 'a> {
  Fragments::new(context, Frame::Tag(tag.into(), remainder))
}
