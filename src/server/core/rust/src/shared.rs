/* src/server/core/rust/src/shared.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::prop::{Prop, Props};

/// Well-known key filled from the host's validation-failure flow.
pub const ERRORS_KEY: &str = "errors";

/// Bag name -> field -> messages, as held by the host's session.
pub type ErrorBags = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Props merged into every page. Registered at bootstrap, read per response.
///
/// Clones share the same underlying map; the lock allows registration while
/// requests are in flight (last writer wins).
#[derive(Clone, Default)]
pub struct SharedProps {
  inner: Arc<RwLock<Props>>,
}

impl SharedProps {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn share(&self, key: impl Into<String>, prop: impl Into<Prop>) {
    self.inner.write().insert(key, prop);
  }

  pub fn share_many(&self, props: Props) {
    self.inner.write().merge(props);
  }

  pub fn get(&self, key: &str) -> Option<Prop> {
    self.inner.read().get(key).cloned()
  }

  pub fn contains(&self, key: &str) -> bool {
    self.inner.read().contains_key(key)
  }

  /// Current entries, unevaluated. Lazy entries run at negotiation time.
  pub fn snapshot(&self) -> Props {
    self.inner.read().clone()
  }

  /// Register the `errors` prop from `source` unless the host already shared one.
  pub fn share_validation_errors<F>(&self, source: F)
  where
    F: Fn() -> Option<ErrorBags> + Send + Sync + 'static,
  {
    let mut props = self.inner.write();
    if props.contains_key(ERRORS_KEY) {
      return;
    }
    props.insert(ERRORS_KEY, Prop::lazy(move || format_errors(source().as_ref())));
  }
}

impl std::fmt::Debug for SharedProps {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let props = self.inner.read();
    f.debug_struct("SharedProps").field("keys", &props.keys().collect::<Vec<_>>()).finish()
  }
}

/// First message per field, per bag. A `default` bag is returned on its own;
/// otherwise bags are keyed by name. No pending errors gives `{}`.
pub fn format_errors(bags: Option<&ErrorBags>) -> Value {
  let Some(bags) = bags else {
    return Value::Object(Map::new());
  };

  let mut flattened: Map<String, Value> = bags
    .iter()
    .map(|(bag, fields)| {
      let first: Map<String, Value> = fields
        .iter()
        .filter_map(|(field, messages)| {
          messages.first().map(|m| (field.clone(), Value::String(m.clone())))
        })
        .collect();
      (bag.clone(), Value::Object(first))
    })
    .collect();

  match flattened.remove("default") {
    Some(default) => default,
    None => Value::Object(flattened),
  }
}
