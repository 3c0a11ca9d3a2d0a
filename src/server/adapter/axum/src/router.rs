/* src/server/adapter/axum/src/router.rs */

use axum::Router;
use axum::extract::FromRef;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use inertia_server::Props;

use crate::InertiaState;
use crate::extract::Inertia;
use crate::middleware::{error_pages, version_gate};

/// Extension trait wiring the protocol into an Axum router.
pub trait InertiaRouterExt {
  /// GET route rendering a fixed component with fixed props.
  #[must_use]
  fn inertia(self, path: &str, component: impl Into<String>, props: Props) -> Self;

  /// Install the version gate (outermost) and the error-page middleware
  /// around every route registered so far.
  #[must_use]
  fn with_inertia(self, state: InertiaState) -> Self;
}

impl<S> InertiaRouterExt for Router<S>
where
  S: Clone + Send + Sync + 'static,
  InertiaState: FromRef<S>,
{
  fn inertia(self, path: &str, component: impl Into<String>, props: Props) -> Self {
    let component = component.into();
    self.route(
      path,
      get(move |inertia: Inertia| {
        let component = component.clone();
        let props = props.clone();
        async move { inertia.render(component, props) }
      }),
    )
  }

  fn with_inertia(self, state: InertiaState) -> Self {
    self
      .layer(from_fn_with_state(state.clone(), error_pages))
      .layer(from_fn_with_state(state, version_gate))
  }
}
