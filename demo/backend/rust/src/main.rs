/* demo/backend/rust/src/main.rs */

mod pages;

use std::path::Path;

use axum::Router;
use axum::routing::get;
use inertia_server::{InertiaConfig, ResponseFactory, SharedProps, props};
use inertia_server_axum::{InertiaRouterExt, InertiaState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("inertia_server=debug,demo_backend_rust=debug,info")),
    )
    .init();

  let mut config = match std::env::var("INERTIA_CONFIG") {
    Ok(path) => InertiaConfig::load(Path::new(&path))?,
    Err(_) => InertiaConfig { version: Some("demo".into()), ..InertiaConfig::default() },
  };
  if let Ok(environment) = std::env::var("APP_ENV") {
    config.environment = environment;
  }

  let shared = SharedProps::new();
  shared.share("app", props! { "name" => "Inertia demo" });
  shared.share_validation_errors(|| None);

  let state = InertiaState::with_shell(ResponseFactory::new(config, shared)?);
  let app = Router::new()
    .inertia("/", "Home", props! { "greeting" => "Hello from Rust" })
    .route("/users", get(pages::users::index))
    .route("/users/{id}", get(pages::users::show))
    .with_inertia(state.clone())
    .with_state(state);

  let addr = std::env::var("DEMO_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
  let listener = tokio::net::TcpListener::bind(&addr).await?;
  tracing::info!(%addr, "demo listening");
  axum::serve(listener, app).await?;
  Ok(())
}
