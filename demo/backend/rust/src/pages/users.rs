/* demo/backend/rust/src/pages/users.rs */

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inertia_server::{Prop, props};
use inertia_server_axum::{AxumError, Inertia, InertiaResponse};
use serde::Serialize;

#[derive(Clone, Serialize)]
pub struct User {
  pub id: u32,
  pub name: &'static str,
  pub email: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar: Option<&'static str>,
}

const USERS: &[User] = &[
  User {
    id: 1,
    name: "Alice",
    email: "alice@example.com",
    avatar: Some("https://example.com/alice.png"),
  },
  User { id: 2, name: "Bob", email: "bob@example.com", avatar: None },
  User { id: 3, name: "Charlie", email: "charlie@example.com", avatar: None },
];

pub async fn index(inertia: Inertia) -> Result<InertiaResponse, AxumError> {
  let users = Prop::serialize(USERS)?;
  Ok(
    inertia
      .render(
        "Users/Index",
        props! {
          "users" => users,
          // Only computed on a full visit or a partial reload that asks for it.
          "total" => Prop::lazy(|| {
            tracing::debug!("counting users");
            USERS.len() as u64
          }),
        },
      )
      .with_view_data("title", "Users"),
  )
}

pub async fn show(inertia: Inertia, Path(id): Path<u32>) -> Result<Response, AxumError> {
  let Some(user) = USERS.iter().find(|u| u.id == id) else {
    return Ok(StatusCode::NOT_FOUND.into_response());
  };
  let user = Prop::serialize(user)?;
  Ok(inertia.render("Users/Show", props! { "user" => user }).into_response())
}
