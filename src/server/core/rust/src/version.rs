/* src/server/core/rust/src/version.rs */

use crate::request::PageRequest;

/// Result of comparing the client's asset version with the server's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
  Pass,
  /// Stale client: answer 409 with `X-Inertia-Location: location`.
  Conflict { location: String },
}

/// Only GET navigations carrying `X-Inertia` are checked; everything else passes.
pub fn check_version(request: &PageRequest, current: Option<&str>) -> VersionCheck {
  if !request.is_inertia() || !request.method().eq_ignore_ascii_case("GET") {
    return VersionCheck::Pass;
  }

  let current = current.unwrap_or("");
  if request.client_version() == current {
    return VersionCheck::Pass;
  }

  tracing::debug!(
    client = request.client_version(),
    server = current,
    url = request.full_url(),
    "asset version conflict"
  );
  VersionCheck::Conflict { location: request.full_url().to_string() }
}
