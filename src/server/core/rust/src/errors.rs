/* src/server/core/rust/src/errors.rs */

/// Error type returned by lazy prop computations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum InertiaError {
  /// A lazy prop failed. `key` is the dotted path of the prop inside the page.
  #[error("prop '{key}' failed: {source}")]
  Prop {
    key: String,
    #[source]
    source: BoxError,
  },

  #[error("serialization failed: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("root view '{view}' failed to render: {message}")]
  Render { view: String, message: String },

  #[error("config error: {0}")]
  Config(String),
}

impl InertiaError {
  pub fn prop(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
    Self::Prop { key: key.into(), source: source.into() }
  }

  pub fn render(view: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Render { view: view.into(), message: message.into() }
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::Prop { .. } => "PROP_FAILED",
      Self::Serialize(_) => "SERIALIZE_FAILED",
      Self::Render { .. } => "RENDER_FAILED",
      Self::Config(_) => "CONFIG_ERROR",
    }
  }

  /// Every failure in this layer is a server fault.
  pub fn status(&self) -> u16 {
    500
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prop_error_display_names_key() {
    let err = InertiaError::prop("user.posts", "db down");
    assert_eq!(err.to_string(), "prop 'user.posts' failed: db down");
    assert_eq!(err.code(), "PROP_FAILED");
  }

  #[test]
  fn prop_error_keeps_source() {
    let err = InertiaError::prop("stats", "timeout");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("timeout"));
  }

  #[test]
  fn all_errors_map_to_500() {
    assert_eq!(InertiaError::config("bad").status(), 500);
    assert_eq!(InertiaError::render("app", "missing").status(), 500);
    assert_eq!(InertiaError::prop("a", "b").status(), 500);
  }

  #[test]
  fn render_display_format() {
    let err = InertiaError::render("app", "template not found");
    assert_eq!(err.to_string(), "root view 'app' failed to render: template not found");
  }
}
