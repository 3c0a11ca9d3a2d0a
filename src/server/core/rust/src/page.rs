/* src/server/core/rust/src/page.rs */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::InertiaError;
use crate::prop::{Prop, Props};
use crate::request::PageRequest;

pub const DEFAULT_ROOT_VIEW: &str = "app";

/// Wire form of one screen, embedded in HTML or returned as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
  pub component: String,
  pub props: Map<String, Value>,
  /// Server-observed path and query.
  pub url: String,
  pub version: Option<String>,
}

/// A component plus unresolved props, waiting to be negotiated against a request.
#[derive(Debug, Clone)]
pub struct PageResponse {
  component: String,
  props: Props,
  root_view: String,
  version: Option<String>,
  view_data: Map<String, Value>,
  status: u16,
}

impl PageResponse {
  pub fn new(component: impl Into<String>) -> Self {
    Self {
      component: component.into(),
      props: Props::new(),
      root_view: DEFAULT_ROOT_VIEW.to_string(),
      version: None,
      view_data: Map::new(),
      status: 200,
    }
  }

  pub fn with(mut self, key: impl Into<String>, prop: impl Into<Prop>) -> Self {
    self.props.insert(key, prop);
    self
  }

  pub fn with_props(mut self, props: Props) -> Self {
    self.props.merge(props);
    self
  }

  /// Template variable for the full document, outside the page payload.
  pub fn with_view_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.view_data.insert(key.into(), value.into());
    self
  }

  pub fn with_root_view(mut self, view: impl Into<String>) -> Self {
    self.root_view = view.into();
    self
  }

  pub fn with_version(mut self, version: Option<String>) -> Self {
    self.version = version;
    self
  }

  pub fn with_status(mut self, status: u16) -> Self {
    self.status = status;
    self
  }

  pub fn component(&self) -> &str {
    &self.component
  }

  pub fn props(&self) -> &Props {
    &self.props
  }

  pub fn root_view(&self) -> &str {
    &self.root_view
  }

  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }

  pub fn view_data(&self) -> &Map<String, Value> {
    &self.view_data
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  /// Restrict props for a matching partial reload, then resolve what is left.
  /// Restriction happens first so excluded lazy props never run.
  pub fn into_page(self, request: &PageRequest) -> Result<Page, InertiaError> {
    let props = match request.partial_keys(&self.component) {
      Some(keys) => {
        tracing::debug!(component = %self.component, keys = ?keys, "partial reload");
        self.props.only(&keys)
      }
      None => self.props,
    };

    Ok(Page {
      props: props.resolve(request, "")?,
      component: self.component,
      url: request.uri().to_string(),
      version: self.version,
    })
  }

  /// Split off the document-only fields, leaving what becomes the page.
  pub(crate) fn take_document(&mut self) -> (String, Map<String, Value>) {
    (std::mem::take(&mut self.root_view), std::mem::take(&mut self.view_data))
  }
}
