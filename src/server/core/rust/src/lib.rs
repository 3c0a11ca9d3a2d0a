/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod document;
pub mod errors;
pub mod factory;
pub mod negotiate;
pub mod page;
pub mod prop;
pub mod request;
pub mod shared;
pub mod version;

// Re-exports for ergonomic use
pub use config::{DEFAULT_ENVIRONMENT, ErrorPageConfig, InertiaConfig, manifest_version};
pub use document::{RootView, ShellView, escape_html, root_element};
pub use errors::{BoxError, InertiaError};
pub use factory::ResponseFactory;
pub use negotiate::{JSON_HEADERS, Negotiated, document_context, negotiate};
pub use page::{DEFAULT_ROOT_VIEW, Page, PageResponse};
pub use prop::{LazyFn, Prop, Props};
pub use request::{
  PageRequest, X_INERTIA, X_INERTIA_LOCATION, X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA,
  X_INERTIA_VERSION,
};
pub use shared::{ERRORS_KEY, ErrorBags, SharedProps, format_errors};
pub use version::{VersionCheck, check_version};

/// Build a [`Props`] map from `key => value` pairs.
///
/// ```
/// use inertia_server::{Prop, props};
///
/// let props = props! {
///   "title" => "Dashboard",
///   "stats" => Prop::lazy(|| 42),
/// };
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
  () => { $crate::Props::new() };
  ($($key:expr => $value:expr),+ $(,)?) => {{
    let mut props = $crate::Props::new();
    $( props.insert($key, $value); )+
    props
  }};
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn props_macro_builds_ordered_map() {
    let props = props! { "b" => 1, "a" => "x" };
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "a"]);
  }

  #[test]
  fn props_macro_empty() {
    assert!(props! {}.is_empty());
  }

  #[test]
  fn end_to_end_partial_json() {
    let shared = SharedProps::new();
    shared.share_validation_errors(|| None);
    let factory = ResponseFactory::new(InertiaConfig::default(), shared).unwrap();
    let response = factory.render("Users/Index", props! { "users" => json!([1, 2]) });

    let request = PageRequest::get("/users")
      .with_header(X_INERTIA, "true")
      .with_header(X_INERTIA_PARTIAL_COMPONENT, "Users/Index")
      .with_header(X_INERTIA_PARTIAL_DATA, "errors");
    let negotiated = negotiate(response, &request).unwrap();
    assert_eq!(
      serde_json::to_value(negotiated.page()).unwrap(),
      json!({"component": "Users/Index", "props": {"errors": {}}, "url": "/users", "version": null})
    );
  }
}
