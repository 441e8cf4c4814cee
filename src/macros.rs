/// Builds an [`Attributes`](crate::model::Attributes) map, keeping the
/// order the pairs are written in.
///
/// ```
/// use listmarkup::{attrs, model::Value};
///
/// let attrs = attrs! { "src" => "a.png", "checked" => true };
/// assert_eq!(attrs.get("checked"), Some(&Value::Boolean(true)));
/// ```
#[macro_export]
macro_rules! attrs {
  () => {
    $crate::model::Attributes::new()
  };

  ($($key:expr => $value:expr),+ $(,)?) => {
    $crate::model::Attributes::from_iter([
      $((::std::string::String::from($key), $crate::model::Value::from($value)),)+
    ])
  };
}

/// Builds a sequence content node from its elements.
///
/// ```
/// use listmarkup::{markup, render, Context};
///
/// let page = markup!["ul", markup!["li", "A"], markup!["li", "B"]];
/// assert_eq!(render([page], &Context::new()).unwrap(), "<ul><li>A</li><li>B</li></ul>");
/// ```
#[macro_export]
macro_rules! markup {
  ($($item:expr),* $(,)?) => {{
    let items: ::std::vec::Vec<$crate::model::Content> =
      ::std::vec![$($crate::model::Content::from($item)),*];
    $crate::model::Content::Sequence($crate::model::Sequence::from(items))
  }};
}
