/* src/server/core/rust/src/factory.rs */

use std::sync::Arc;

use crate::config::InertiaConfig;
use crate::errors::InertiaError;
use crate::page::PageResponse;
use crate::prop::Props;
use crate::shared::SharedProps;

/// Builds page responses with shared props, root view and asset version applied.
///
/// Created once at bootstrap and handed to the request-handling layer.
#[derive(Clone, Debug)]
pub struct ResponseFactory {
  config: Arc<InertiaConfig>,
  version: Option<String>,
  shared: SharedProps,
}

impl ResponseFactory {
  /// Resolves the asset version once; it stays fixed for the process.
  pub fn new(config: InertiaConfig, shared: SharedProps) -> Result<Self, InertiaError> {
    let version = config.resolve_version()?;
    tracing::info!(version = version.as_deref().unwrap_or(""), "asset version resolved");
    Ok(Self { config: Arc::new(config), version, shared })
  }

  pub fn config(&self) -> &InertiaConfig {
    &self.config
  }

  pub fn shared(&self) -> &SharedProps {
    &self.shared
  }

  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }

  /// Shared props overlaid with `props`; handler props win on collisions.
  pub fn render(&self, component: impl Into<String>, props: Props) -> PageResponse {
    let mut merged = self.shared.snapshot();
    merged.merge(props);
    PageResponse::new(component)
      .with_props(merged)
      .with_root_view(self.config.root_view.clone())
      .with_version(self.version.clone())
  }

  /// Page for an error status, used when error pages are enabled.
  pub fn render_error(&self, status: u16) -> PageResponse {
    self
      .render(self.config.error.component.clone(), Props::new().with("status", u32::from(status)))
      .with_status(status)
  }
}
