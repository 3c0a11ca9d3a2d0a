/* src/server/core/rust/src/document.rs */

use serde_json::{Map, Value};

use crate::errors::InertiaError;
use crate::page::Page;

/// Renders the full HTML document for a first visit.
///
/// `context` is the view data merged with `page`; template engines read
/// document-level variables from it. Implemented for plain closures so hosts
/// can hand over their engine without a wrapper type.
pub trait RootView: Send + Sync {
  fn render(
    &self,
    view: &str,
    page: &Page,
    context: &Map<String, Value>,
  ) -> Result<String, InertiaError>;
}

impl<F> RootView for F
where
  F: Fn(&str, &Page, &Map<String, Value>) -> Result<String, InertiaError> + Send + Sync,
{
  fn render(
    &self,
    view: &str,
    page: &Page,
    context: &Map<String, Value>,
  ) -> Result<String, InertiaError> {
    self(view, page, context)
  }
}

/// Minimal HTML5 shell holding only the root element. Ignores the view name.
#[derive(Debug, Clone)]
pub struct ShellView {
  pub root_element_id: String,
}

impl ShellView {
  pub fn new(root_element_id: impl Into<String>) -> Self {
    Self { root_element_id: root_element_id.into() }
  }
}

impl Default for ShellView {
  fn default() -> Self {
    Self::new("app")
  }
}

impl RootView for ShellView {
  fn render(
    &self,
    _view: &str,
    page: &Page,
    context: &Map<String, Value>,
  ) -> Result<String, InertiaError> {
    let title = context
      .get("title")
      .and_then(Value::as_str)
      .map(|t| format!("<title>{}</title>", escape_html(t)))
      .unwrap_or_default();
    let root = root_element(page, &self.root_element_id)?;
    Ok(format!(
      "<!DOCTYPE html><html><head><meta charset=\"utf-8\">{title}</head><body>{root}</body></html>"
    ))
  }
}

/// `<div id="..." data-page="...">` carrying the JSON-encoded page for client bootstrap.
pub fn root_element(page: &Page, id: &str) -> Result<String, InertiaError> {
  let json = serde_json::to_string(page)?;
  Ok(format!(r#"<div id="{}" data-page="{}"></div>"#, escape_html(id), escape_html(&json)))
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn page() -> Page {
    let props = json!({"quote": "a \"b\" <c> & 'd'"});
    Page {
      component: "Home".into(),
      props: props.as_object().cloned().unwrap(),
      url: "/".into(),
      version: Some("v1".into()),
    }
  }

  fn unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
      .replace("&lt;", "<")
      .replace("&gt;", ">")
      .replace("&#x27;", "'")
      .replace("&amp;", "&")
  }

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    assert_eq!(escape_html("plain"), "plain");
  }

  #[test]
  fn root_element_embeds_exact_page_json() {
    let html = root_element(&page(), "app").unwrap();
    let attr = html
      .strip_prefix(r#"<div id="app" data-page=""#)
      .and_then(|rest| rest.strip_suffix(r#""></div>"#))
      .unwrap();
    assert!(!attr.contains('"'));
    let decoded: Page = serde_json::from_str(&unescape(attr)).unwrap();
    assert_eq!(decoded, page());
  }

  #[test]
  fn shell_view_renders_title_and_root() {
    let mut context = Map::new();
    context.insert("title".into(), json!("Home <1>"));
    let html = ShellView::new("root").render("app", &page(), &context).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Home &lt;1&gt;</title>"));
    assert!(html.contains(r#"<div id="root" data-page=""#));
  }

  #[test]
  fn shell_view_without_title() {
    let html = ShellView::default().render("app", &page(), &Map::new()).unwrap();
    assert!(!html.contains("<title>"));
    assert!(html.contains(r#"id="app""#));
  }

  #[test]
  fn closures_are_root_views() {
    let view = |name: &str, page: &Page, _: &Map<String, Value>| -> Result<String, InertiaError> {
      Ok(format!("{name}:{}", page.component))
    };
    assert_eq!(view.render("layout", &page(), &Map::new()).unwrap(), "layout:Home");
  }
}
