/* src/server/adapter/axum/src/extract.rs */

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, Uri, header};
use inertia_server::{PageRequest, Props, X_INERTIA, request::is_truthy};

use crate::InertiaState;
use crate::response::InertiaResponse;

/// `X-Inertia` present and truthy.
pub fn is_inertia(headers: &HeaderMap) -> bool {
  headers.get(X_INERTIA).and_then(|v| v.to_str().ok()).is_some_and(is_truthy)
}

/// Copy method, path+query, full URL and headers out of Axum request parts.
/// Nested routers strip their prefix from `parts.uri`, so `OriginalUri` wins when present.
pub fn page_request(parts: &Parts) -> PageRequest {
  let uri = parts.extensions.get::<OriginalUri>().map_or(&parts.uri, |o| &o.0);
  let path_and_query = uri.path_and_query().map_or("/", PathAndQuery::as_str);

  let mut request = PageRequest::new(parts.method.as_str(), path_and_query);
  // First value per name; non-UTF-8 values are treated as absent.
  for name in parts.headers.keys() {
    if let Some(value) = parts.headers.get(name).and_then(|v| v.to_str().ok()) {
      request = request.with_header(name.as_str(), value);
    }
  }
  if let Some(url) = full_url(uri, &parts.headers) {
    request = request.with_full_url(url);
  }
  request
}

fn full_url(uri: &Uri, headers: &HeaderMap) -> Option<String> {
  if uri.scheme().is_some() && uri.authority().is_some() {
    return Some(uri.to_string());
  }
  let host = headers.get(header::HOST)?.to_str().ok()?;
  let scheme =
    headers.get("x-forwarded-proto").and_then(|v| v.to_str().ok()).unwrap_or("http");
  let path_and_query = uri.path_and_query().map_or("/", PathAndQuery::as_str);
  Some(format!("{scheme}://{host}{path_and_query}"))
}

/// Handler-side entry point: captures the request and renders pages against it.
///
/// ```ignore
/// async fn dashboard(inertia: Inertia) -> InertiaResponse {
///   inertia.render("Dashboard", props! { "stats" => Prop::lazy(load_stats) })
/// }
/// ```
#[derive(Clone)]
pub struct Inertia {
  state: InertiaState,
  request: PageRequest,
}

impl Inertia {
  pub fn new(state: InertiaState, request: PageRequest) -> Self {
    Self { state, request }
  }

  pub fn request(&self) -> &PageRequest {
    &self.request
  }

  pub fn is_inertia(&self) -> bool {
    self.request.is_inertia()
  }

  pub fn state(&self) -> &InertiaState {
    &self.state
  }

  /// Shared props merged with `props`, negotiated when the response is returned.
  pub fn render(&self, component: impl Into<String>, props: Props) -> InertiaResponse {
    let response = self.state.factory().render(component, props);
    InertiaResponse::new(response, self.request.clone(), self.state.views_arc())
  }
}

impl<S> FromRequestParts<S> for Inertia
where
  InertiaState: FromRef<S>,
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    Ok(Self::new(InertiaState::from_ref(state), page_request(parts)))
  }
}
