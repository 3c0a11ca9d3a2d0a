/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inertia_server::InertiaError;

/// Newtype wrapper to implement `IntoResponse` for `InertiaError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for InertiaError`
/// when both types are foreign to this crate.
///
/// Handlers can return `Result<InertiaResponse, AxumError>` and use `?` on core calls.
#[derive(Debug)]
pub struct AxumError(pub InertiaError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    tracing::error!(code = err.code(), error = %err, "page response failed");
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.to_string(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<InertiaError> for AxumError {
  fn from(err: InertiaError) -> Self {
    Self(err)
  }
}
