/* src/server/core/rust/src/prop.rs */

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{BoxError, InertiaError};
use crate::page::PageResponse;
use crate::request::PageRequest;

pub type LazyFn = Arc<dyn Fn() -> Result<Prop, BoxError> + Send + Sync>;

/// A prop value as handed to a page, before resolution.
#[derive(Clone)]
pub enum Prop {
  Value(Value),
  /// Computed only if the prop survives partial selection.
  Lazy(LazyFn),
  /// Nested page; substituted by its own `{component, props, url, version}`.
  Page(Box<PageResponse>),
  Object(Props),
  List(Vec<Prop>),
}

impl Prop {
  pub fn value(value: impl Into<Value>) -> Self {
    Self::Value(value.into())
  }

  pub fn lazy<F, T>(f: F) -> Self
  where
    F: Fn() -> T + Send + Sync + 'static,
    T: Into<Prop>,
  {
    Self::Lazy(Arc::new(move || Ok(f().into())))
  }

  pub fn try_lazy<F, T, E>(f: F) -> Self
  where
    F: Fn() -> Result<T, E> + Send + Sync + 'static,
    T: Into<Prop>,
    E: Into<BoxError>,
  {
    Self::Lazy(Arc::new(move || f().map(Into::into).map_err(Into::into)))
  }

  /// Convert a structured object into its plain mapping/sequence form.
  pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, InertiaError> {
    Ok(Self::Value(serde_json::to_value(value)?))
  }

  pub fn is_lazy(&self) -> bool {
    matches!(self, Self::Lazy(_))
  }

  /// Resolve depth-first into a plain JSON value. `path` names this prop in errors.
  pub fn resolve(self, request: &PageRequest, path: &str) -> Result<Value, InertiaError> {
    match self {
      Self::Value(value) => Ok(value),
      Self::Lazy(f) => f().map_err(|e| InertiaError::prop(path, e))?.resolve(request, path),
      Self::Page(page) => Ok(serde_json::to_value(page.into_page(request)?)?),
      Self::Object(props) => props.resolve(request, path).map(Value::Object),
      Self::List(items) => items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| item.resolve(request, &child_path(path, &idx.to_string())))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array),
    }
  }
}

fn child_path(parent: &str, key: &str) -> String {
  if parent.is_empty() { key.to_string() } else { format!("{parent}.{key}") }
}

impl fmt::Debug for Prop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
      Self::Lazy(_) => f.write_str("Lazy(..)"),
      Self::Page(p) => f.debug_tuple("Page").field(p).finish(),
      Self::Object(props) => f.debug_tuple("Object").field(props).finish(),
      Self::List(items) => f.debug_tuple("List").field(items).finish(),
    }
  }
}

impl From<Value> for Prop {
  fn from(value: Value) -> Self {
    Self::Value(value)
  }
}

macro_rules! impl_prop_from_scalar {
  ($($ty:ty),* $(,)?) => {
    $(
      impl From<$ty> for Prop {
        fn from(value: $ty) -> Self {
          Self::Value(Value::from(value))
        }
      }
    )*
  };
}

impl_prop_from_scalar!(&str, String, bool, i32, i64, u32, u64, f64);

impl From<PageResponse> for Prop {
  fn from(page: PageResponse) -> Self {
    Self::Page(Box::new(page))
  }
}

impl From<Props> for Prop {
  fn from(props: Props) -> Self {
    Self::Object(props)
  }
}

impl From<Vec<Prop>> for Prop {
  fn from(items: Vec<Prop>) -> Self {
    Self::List(items)
  }
}

/// Ordered prop mapping with unique keys.
#[derive(Clone, Debug, Default)]
pub struct Props {
  entries: Vec<(String, Prop)>,
}

impl Props {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or overwrite. An overwritten key keeps its original position.
  pub fn insert(&mut self, key: impl Into<String>, prop: impl Into<Prop>) {
    let key = key.into();
    let prop = prop.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some(entry) => entry.1 = prop,
      None => self.entries.push((key, prop)),
    }
  }

  pub fn with(mut self, key: impl Into<String>, prop: impl Into<Prop>) -> Self {
    self.insert(key, prop);
    self
  }

  pub fn get(&self, key: &str) -> Option<&Prop> {
    self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(k, _)| k.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Overlay `other` on top of `self`; `other` wins on key collisions.
  pub fn merge(&mut self, other: Props) {
    for (key, prop) in other.entries {
      self.insert(key, prop);
    }
  }

  /// Keep only `keys`, in declaration order. Unknown keys are ignored.
  pub fn only(self, keys: &[&str]) -> Props {
    let entries = self.entries.into_iter().filter(|(k, _)| keys.contains(&k.as_str())).collect();
    Props { entries }
  }

  pub fn resolve(
    self,
    request: &PageRequest,
    prefix: &str,
  ) -> Result<Map<String, Value>, InertiaError> {
    let mut out = Map::new();
    for (key, prop) in self.entries {
      let value = prop.resolve(request, &child_path(prefix, &key))?;
      out.insert(key, value);
    }
    Ok(out)
  }
}

impl IntoIterator for Props {
  type Item = (String, Prop);
  type IntoIter = std::vec::IntoIter<(String, Prop)>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<K: Into<String>, P: Into<Prop>> FromIterator<(K, P)> for Props {
  fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
    let mut props = Props::new();
    for (key, prop) in iter {
      props.insert(key, prop);
    }
    props
  }
}
