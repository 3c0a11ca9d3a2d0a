/* src/server/core/rust/src/negotiate.rs */

use serde_json::{Map, Value};

use crate::errors::InertiaError;
use crate::page::{Page, PageResponse};
use crate::request::PageRequest;

/// Headers attached to every JSON page response.
pub const JSON_HEADERS: [(&str, &str); 2] = [("vary", "Accept"), ("x-inertia", "true")];

/// Outcome of negotiation, independent of any web framework.
#[derive(Debug, Clone, PartialEq)]
pub enum Negotiated {
  /// Bare page object for an in-place client update.
  Json { page: Page, status: u16 },
  /// Full HTML document rendered through `root_view`.
  Document { root_view: String, page: Page, view_data: Map<String, Value>, status: u16 },
}

impl Negotiated {
  pub fn page(&self) -> &Page {
    match self {
      Self::Json { page, .. } | Self::Document { page, .. } => page,
    }
  }

  pub fn status(&self) -> u16 {
    match self {
      Self::Json { status, .. } | Self::Document { status, .. } => *status,
    }
  }

  pub fn is_json(&self) -> bool {
    matches!(self, Self::Json { .. })
  }

  pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
    match self {
      Self::Json { .. } => &JSON_HEADERS,
      Self::Document { .. } => &[],
    }
  }
}

/// Template context for a document: view data plus `page`.
/// `page` always holds the page object, even if view data used the same key.
pub fn document_context(
  page: &Page,
  view_data: &Map<String, Value>,
) -> Result<Map<String, Value>, InertiaError> {
  let mut context = view_data.clone();
  context.insert("page".to_string(), serde_json::to_value(page)?);
  Ok(context)
}

/// Decide the representation for `request` and resolve the page.
pub fn negotiate(
  mut response: PageResponse,
  request: &PageRequest,
) -> Result<Negotiated, InertiaError> {
  let status = response.status();
  let (root_view, view_data) = response.take_document();
  let page = response.into_page(request)?;

  if request.is_inertia() {
    return Ok(Negotiated::Json { page, status });
  }
  Ok(Negotiated::Document { root_view, page, view_data, status })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::prop::Prop;
  use crate::request::{X_INERTIA, X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA};

  fn dashboard() -> PageResponse {
    PageResponse::new("Dashboard")
      .with("user", json!({"name": "ada"}))
      .with("stats", Prop::lazy(|| json!({"visits": 10})))
      .with_root_view("layouts/app")
      .with_view_data("title", "Dashboard")
      .with_version(Some("v2".into()))
  }

  #[test]
  fn plain_request_gets_document() {
    let negotiated = negotiate(dashboard(), &PageRequest::get("/dashboard")).unwrap();
    let Negotiated::Document { root_view, page, view_data, status } = negotiated else {
      panic!("expected document");
    };
    assert_eq!(root_view, "layouts/app");
    assert_eq!(status, 200);
    let context = document_context(&page, &view_data).unwrap();
    assert_eq!(context["title"], json!("Dashboard"));
    assert_eq!(
      context["page"],
      json!({
        "component": "Dashboard",
        "props": {"user": {"name": "ada"}, "stats": {"visits": 10}},
        "url": "/dashboard",
        "version": "v2",
      })
    );
  }

  #[test]
  fn inertia_request_gets_json_with_headers() {
    let request = PageRequest::get("/dashboard").with_header(X_INERTIA, "true");
    let negotiated = negotiate(dashboard(), &request).unwrap();
    assert!(negotiated.is_json());
    assert_eq!(negotiated.status(), 200);
    assert_eq!(negotiated.headers(), &[("vary", "Accept"), ("x-inertia", "true")]);
    assert_eq!(
      Value::Object(negotiated.page().props.clone()),
      json!({"user": {"name": "ada"}, "stats": {"visits": 10}})
    );
  }

  #[test]
  fn document_has_no_protocol_headers() {
    let negotiated = negotiate(dashboard(), &PageRequest::get("/")).unwrap();
    assert!(negotiated.headers().is_empty());
  }

  #[test]
  fn falsy_inertia_header_degrades_to_document() {
    let request = PageRequest::get("/dashboard").with_header(X_INERTIA, "0");
    assert!(!negotiate(dashboard(), &request).unwrap().is_json());
  }

  #[test]
  fn partial_json_response() {
    let request = PageRequest::get("/dashboard")
      .with_header(X_INERTIA, "true")
      .with_header(X_INERTIA_PARTIAL_COMPONENT, "Dashboard")
      .with_header(X_INERTIA_PARTIAL_DATA, "stats");
    let negotiated = negotiate(dashboard(), &request).unwrap();
    assert_eq!(Value::Object(negotiated.page().props.clone()), json!({"stats": {"visits": 10}}));
  }

  #[test]
  fn page_key_overrides_view_data() {
    let response = PageResponse::new("Home").with_view_data("page", "shadowed");
    let Negotiated::Document { page, view_data, .. } =
      negotiate(response, &PageRequest::get("/")).unwrap()
    else {
      panic!("expected document");
    };
    let context = document_context(&page, &view_data).unwrap();
    assert_eq!(context["page"]["component"], json!("Home"));
  }

  #[test]
  fn status_is_carried_through() {
    let response = PageResponse::new("Error").with("status", 404).with_status(404);
    let request = PageRequest::get("/missing").with_header(X_INERTIA, "true");
    assert_eq!(negotiate(response, &request).unwrap().status(), 404);
  }

  #[test]
  fn lazy_failure_propagates() {
    let response = PageResponse::new("Home").with("x", Prop::try_lazy(|| Err::<i64, _>("nope")));
    assert!(negotiate(response, &PageRequest::get("/")).is_err());
  }
}
