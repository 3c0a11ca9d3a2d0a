/* src/server/adapter/axum/src/response.rs */

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use inertia_server::{
  InertiaError, Negotiated, PageRequest, PageResponse, RootView, document_context, negotiate,
};

use crate::error::AxumError;

/// Marker placed in the extensions of every negotiated page response.
#[derive(Clone, Copy, Debug)]
pub struct RenderedPage;

/// A page response bound to the request it answers. Negotiated on `into_response`.
pub struct InertiaResponse {
  response: PageResponse,
  request: PageRequest,
  views: Arc<dyn RootView>,
}

impl InertiaResponse {
  pub fn new(response: PageResponse, request: PageRequest, views: Arc<dyn RootView>) -> Self {
    Self { response, request, views }
  }

  pub fn with_view_data(
    mut self,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    self.response = self.response.with_view_data(key, value);
    self
  }

  pub fn with_status(mut self, status: StatusCode) -> Self {
    self.response = self.response.with_status(status.as_u16());
    self
  }

  /// Adjust the underlying page response before negotiation.
  pub fn map(mut self, f: impl FnOnce(PageResponse) -> PageResponse) -> Self {
    self.response = f(self.response);
    self
  }

  pub fn page_response(&self) -> &PageResponse {
    &self.response
  }
}

impl IntoResponse for InertiaResponse {
  fn into_response(self) -> Response {
    respond(self.response, &self.request, self.views.as_ref())
      .unwrap_or_else(|err| AxumError(err).into_response())
  }
}

pub(crate) fn respond(
  response: PageResponse,
  request: &PageRequest,
  views: &dyn RootView,
) -> Result<Response, InertiaError> {
  let negotiated = negotiate(response, request)?;
  let status = StatusCode::from_u16(negotiated.status()).unwrap_or(StatusCode::OK);

  let headers = negotiated.headers();

  let mut res = match negotiated {
    Negotiated::Json { page, .. } => (status, axum::Json(page)).into_response(),
    Negotiated::Document { root_view, page, view_data, .. } => {
      let context = document_context(&page, &view_data)?;
      let html = views.render(&root_view, &page, &context)?;
      (status, Html(html)).into_response()
    }
  };
  for &(name, value) in headers {
    res.headers_mut().insert(HeaderName::from_static(name), HeaderValue::from_static(value));
  }
  res.extensions_mut().insert(RenderedPage);
  Ok(res)
}
