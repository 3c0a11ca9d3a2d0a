/* src/server/core/rust/src/config.rs */

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::errors::InertiaError;
use crate::page::DEFAULT_ROOT_VIEW;

pub const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
  /// Explicit asset version. Takes precedence over `asset_manifest`.
  pub version: Option<String>,
  /// Build manifest whose SHA-256 digest becomes the asset version.
  pub asset_manifest: Option<PathBuf>,
  pub root_view: String,
  /// `id` of the element the client mounts on.
  pub root_element_id: String,
  /// Deployment environment the process runs in, matched against `error.environments`.
  pub environment: String,
  pub error: ErrorPageConfig,
}

impl Default for InertiaConfig {
  fn default() -> Self {
    Self {
      version: None,
      asset_manifest: None,
      root_view: DEFAULT_ROOT_VIEW.to_string(),
      root_element_id: "app".to_string(),
      environment: DEFAULT_ENVIRONMENT.to_string(),
      error: ErrorPageConfig::default(),
    }
  }
}

/// Re-render selected error statuses as a page component.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ErrorPageConfig {
  pub enabled: bool,
  pub component: String,
  pub status_codes: Vec<u16>,
  /// Environments in which error pages replace the original response.
  pub environments: Vec<String>,
}

impl Default for ErrorPageConfig {
  fn default() -> Self {
    Self {
      enabled: false,
      component: "Error".to_string(),
      status_codes: vec![500, 503, 404, 403],
      environments: vec![DEFAULT_ENVIRONMENT.to_string()],
    }
  }
}

impl ErrorPageConfig {
  pub fn active_in(&self, environment: &str) -> bool {
    self.enabled && self.environments.iter().any(|e| e == environment)
  }

  pub fn handles(&self, status: u16, environment: &str) -> bool {
    self.active_in(environment) && self.status_codes.contains(&status)
  }
}

impl InertiaConfig {
  pub fn from_toml_str(content: &str) -> Result<Self, InertiaError> {
    toml::from_str(content).map_err(|e| InertiaError::config(e.to_string()))
  }

  pub fn load(path: &Path) -> Result<Self, InertiaError> {
    let content = std::fs::read_to_string(path)
      .map_err(|e| InertiaError::config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&content)
      .map_err(|e| InertiaError::config(format!("failed to parse {}: {e}", path.display())))
  }

  /// Error pages enabled for the configured environment.
  pub fn error_pages_active(&self) -> bool {
    self.error.active_in(&self.environment)
  }

  pub fn renders_error_page(&self, status: u16) -> bool {
    self.error.handles(status, &self.environment)
  }

  /// Explicit version, else the manifest digest, else none.
  pub fn resolve_version(&self) -> Result<Option<String>, InertiaError> {
    if let Some(ref v) = self.version {
      return Ok(Some(v.clone()));
    }
    match self.asset_manifest {
      Some(ref path) => manifest_version(path).map(Some),
      None => Ok(None),
    }
  }
}

/// Hex SHA-256 of the manifest file contents.
pub fn manifest_version(path: &Path) -> Result<String, InertiaError> {
  let bytes = std::fs::read(path).map_err(|e| {
    InertiaError::config(format!("failed to read asset manifest {}: {e}", path.display()))
  })?;
  Ok(hex::encode(Sha256::digest(&bytes)))
}
