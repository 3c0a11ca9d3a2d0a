/* src/server/adapter/axum/src/middleware.rs */

use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use inertia_server::{VersionCheck, X_INERTIA_LOCATION, check_version};

use crate::InertiaState;
use crate::error::AxumError;
use crate::extract::page_request;
use crate::response::{RenderedPage, respond};

/// Stale-client guard. Runs before the handler so no prop work is spent on a
/// request that will be answered with a forced full reload.
///
/// Install with `axum::middleware::from_fn_with_state(state, version_gate)`.
pub async fn version_gate(State(state): State<InertiaState>, req: Request, next: Next) -> Response {
  let (parts, body) = req.into_parts();
  let page_req = page_request(&parts);

  match check_version(&page_req, state.factory().version()) {
    VersionCheck::Pass => next.run(Request::from_parts(parts, body)).await,
    VersionCheck::Conflict { location } => conflict(&location),
  }
}

fn conflict(location: &str) -> Response {
  let value = HeaderValue::from_str(location).unwrap_or_else(|_| {
    tracing::warn!(location, "location is not a valid header value, using /");
    HeaderValue::from_static("/")
  });
  let mut res = StatusCode::CONFLICT.into_response();
  res.headers_mut().insert(HeaderName::from_static(X_INERTIA_LOCATION), value);
  res
}

/// Re-render configured error statuses as the error page component.
/// Responses that already are pages are left alone.
pub async fn error_pages(State(state): State<InertiaState>, req: Request, next: Next) -> Response {
  if !state.factory().config().error_pages_active() {
    return next.run(req).await;
  }

  let (parts, body) = req.into_parts();
  let page_req = page_request(&parts);
  let res = next.run(Request::from_parts(parts, body)).await;

  let status = res.status().as_u16();
  if !state.factory().config().renders_error_page(status)
    || res.extensions().get::<RenderedPage>().is_some()
  {
    return res;
  }

  tracing::debug!(status, uri = page_req.uri(), "rendering error page");
  respond(state.factory().render_error(status), &page_req, state.views())
    .unwrap_or_else(|err| AxumError(err).into_response())
}
