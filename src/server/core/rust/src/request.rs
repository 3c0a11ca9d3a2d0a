/* src/server/core/rust/src/request.rs */

/// Marks a protocol-aware request; on responses, marks a JSON page.
pub const X_INERTIA: &str = "x-inertia";
/// Asset version the client last saw.
pub const X_INERTIA_VERSION: &str = "x-inertia-version";
/// Comma-separated prop keys requested by a partial reload.
pub const X_INERTIA_PARTIAL_DATA: &str = "x-inertia-partial-data";
/// Component a partial reload believes it is updating.
pub const X_INERTIA_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";
/// Target of a forced full-page visit after a version conflict.
pub const X_INERTIA_LOCATION: &str = "x-inertia-location";

/// Framework-agnostic view of the incoming request.
///
/// Adapters copy method, path+query and headers out of their native request
/// type; everything the negotiation needs is read through this struct.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
  method: String,
  uri: String,
  full_url: Option<String>,
  headers: Vec<(String, String)>,
}

impl PageRequest {
  pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
    Self { method: method.into(), uri: uri.into(), full_url: None, headers: Vec::new() }
  }

  pub fn get(uri: impl Into<String>) -> Self {
    Self::new("GET", uri)
  }

  /// Add a header. Names are matched case-insensitively; a repeated name
  /// replaces the earlier value.
  pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
    let name = name.as_ref().to_ascii_lowercase();
    let value = value.into();
    match self.headers.iter_mut().find(|(n, _)| *n == name) {
      Some(entry) => entry.1 = value,
      None => self.headers.push((name, value)),
    }
    self
  }

  pub fn with_full_url(mut self, url: impl Into<String>) -> Self {
    self.full_url = Some(url.into());
    self
  }

  pub fn method(&self) -> &str {
    &self.method
  }

  /// Server-observed path and query, e.g. `/users?page=2`.
  pub fn uri(&self) -> &str {
    &self.uri
  }

  /// Absolute URL of the request, falling back to the path and query.
  pub fn full_url(&self) -> &str {
    self.full_url.as_deref().unwrap_or(&self.uri)
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(n, _)| n.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }

  /// `X-Inertia` present with a truthy value (non-empty, not `"0"`).
  pub fn is_inertia(&self) -> bool {
    self.header(X_INERTIA).is_some_and(is_truthy)
  }

  pub fn client_version(&self) -> &str {
    self.header(X_INERTIA_VERSION).unwrap_or("")
  }

  pub fn partial_data(&self) -> Option<&str> {
    self.header(X_INERTIA_PARTIAL_DATA)
  }

  pub fn partial_component(&self) -> Option<&str> {
    self.header(X_INERTIA_PARTIAL_COMPONENT)
  }

  /// Keys requested by a partial reload of `component`, or `None` when the
  /// full prop set applies (headers missing, blank, or naming another component).
  pub fn partial_keys(&self, component: &str) -> Option<Vec<&str>> {
    if self.partial_component()? != component {
      return None;
    }
    let keys: Vec<&str> =
      self.partial_data()?.split(',').map(str::trim).filter(|k| !k.is_empty()).collect();
    if keys.is_empty() { None } else { Some(keys) }
  }
}

pub fn is_truthy(value: &str) -> bool {
  !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn header_lookup_is_case_insensitive() {
    let req = PageRequest::get("/").with_header("X-Inertia", "true");
    assert_eq!(req.header("x-inertia"), Some("true"));
    assert_eq!(req.header("X-INERTIA"), Some("true"));
  }

  #[test]
  fn repeated_header_replaces_value() {
    let req = PageRequest::get("/")
      .with_header("X-Inertia-Version", "a")
      .with_header("x-inertia-version", "b");
    assert_eq!(req.client_version(), "b");
  }

  #[test]
  fn inertia_flag_truthiness() {
    assert!(PageRequest::get("/").with_header(X_INERTIA, "true").is_inertia());
    assert!(PageRequest::get("/").with_header(X_INERTIA, "1").is_inertia());
    assert!(!PageRequest::get("/").with_header(X_INERTIA, "").is_inertia());
    assert!(!PageRequest::get("/").with_header(X_INERTIA, "0").is_inertia());
    assert!(!PageRequest::get("/").is_inertia());
  }

  #[test]
  fn client_version_defaults_to_empty() {
    assert_eq!(PageRequest::get("/").client_version(), "");
  }

  #[test]
  fn full_url_falls_back_to_uri() {
    let req = PageRequest::get("/users?page=2");
    assert_eq!(req.full_url(), "/users?page=2");
    let req = req.with_full_url("https://example.com/users?page=2");
    assert_eq!(req.full_url(), "https://example.com/users?page=2");
  }

  #[test]
  fn partial_keys_require_matching_component() {
    let req = PageRequest::get("/")
      .with_header(X_INERTIA_PARTIAL_DATA, "users,stats")
      .with_header(X_INERTIA_PARTIAL_COMPONENT, "Dashboard");
    assert_eq!(req.partial_keys("Dashboard"), Some(vec!["users", "stats"]));
    assert_eq!(req.partial_keys("Settings"), None);
  }

  #[test]
  fn partial_keys_need_both_headers() {
    let only_data = PageRequest::get("/").with_header(X_INERTIA_PARTIAL_DATA, "users");
    assert_eq!(only_data.partial_keys("Dashboard"), None);

    let only_component =
      PageRequest::get("/").with_header(X_INERTIA_PARTIAL_COMPONENT, "Dashboard");
    assert_eq!(only_component.partial_keys("Dashboard"), None);
  }

  #[test]
  fn blank_partial_data_means_no_restriction() {
    for raw in ["", " ", ",", " , ,"] {
      let req = PageRequest::get("/")
        .with_header(X_INERTIA_PARTIAL_DATA, raw)
        .with_header(X_INERTIA_PARTIAL_COMPONENT, "Dashboard");
      assert_eq!(req.partial_keys("Dashboard"), None, "raw = {raw:?}");
    }
  }

  #[test]
  fn partial_keys_trim_and_skip_empty_entries() {
    let req = PageRequest::get("/")
      .with_header(X_INERTIA_PARTIAL_DATA, " users ,,stats,")
      .with_header(X_INERTIA_PARTIAL_COMPONENT, "Dashboard");
    assert_eq!(req.partial_keys("Dashboard"), Some(vec!["users", "stats"]));
  }
}
