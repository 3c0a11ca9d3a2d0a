/* src/server/adapter/axum/src/lib.rs */

mod error;
mod extract;
mod middleware;
mod response;
mod router;

use std::sync::Arc;

use inertia_server::{ResponseFactory, RootView, ShellView};

/// Re-export inertia-server core for convenience
pub use inertia_server;

pub use error::AxumError;
pub use extract::{Inertia, is_inertia, page_request};
pub use middleware::{error_pages, version_gate};
pub use response::{InertiaResponse, RenderedPage};
pub use router::InertiaRouterExt;

/// Everything the adapter needs per request. Cheap to clone; build once at bootstrap.
#[derive(Clone)]
pub struct InertiaState {
  factory: ResponseFactory,
  views: Arc<dyn RootView>,
}

impl InertiaState {
  pub fn new(factory: ResponseFactory, views: impl RootView + 'static) -> Self {
    Self { factory, views: Arc::new(views) }
  }

  /// Use the built-in HTML shell as the root view.
  pub fn with_shell(factory: ResponseFactory) -> Self {
    let shell = ShellView::new(factory.config().root_element_id.clone());
    Self::new(factory, shell)
  }

  pub fn factory(&self) -> &ResponseFactory {
    &self.factory
  }

  pub fn views(&self) -> &dyn RootView {
    self.views.as_ref()
  }

  pub(crate) fn views_arc(&self) -> Arc<dyn RootView> {
    self.views.clone()
  }
}
