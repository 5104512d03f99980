//! Client configuration

use serde::{Deserialize, Serialize};

/// Keyspace scope used by delete-by-pattern scans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanScope {
  /// Scan the whole store; matches may include keys outside this client's prefix
  #[default]
  Store,
  /// Scan only keys under this client's prefix
  Namespace,
}

impl std::fmt::Display for ScanScope {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ScanScope::Store => write!(f, "store"),
      ScanScope::Namespace => write!(f, "namespace"),
    }
  }
}

impl std::str::FromStr for ScanScope {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "store" | "global" => Ok(ScanScope::Store),
      "namespace" | "prefix" => Ok(ScanScope::Namespace),
      _ => Err(format!("Unknown scan scope: {}", s)),
    }
  }
}

/// Configuration for one client, identifying one namespace in one store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
  /// Store host
  #[serde(default = "default_host")]
  pub host: String,

  /// Store port
  #[serde(default = "default_port")]
  pub port: u16,

  /// Logical database number
  #[serde(default)]
  pub database: u8,

  /// Prefix prepended to every logical key
  #[serde(default)]
  pub prefix: String,

  /// Keyspace scope for delete-by-pattern scans
  #[serde(default)]
  pub scan_scope: ScanScope,

  /// Maximum SCAN round trips per delete-by-pattern call before giving up;
  /// `None` trusts the store to terminate the scan on its own. One round
  /// trip always runs, so the minimum meaningful limit is 1 (`Some(0)`
  /// behaves like `Some(1)`, not like `None`)
  #[serde(default)]
  pub scan_round_limit: Option<u64>,
}

fn default_host() -> String {
  "localhost".to_string()
}

fn default_port() -> u16 {
  6379
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      database: 0,
      prefix: String::new(),
      scan_scope: ScanScope::default(),
      scan_round_limit: None,
    }
  }
}

impl ClientConfig {
  /// Generate the store connection URL
  pub fn connection_url(&self) -> String {
    format!("redis://{}:{}/{}", self.host, self.port, self.database)
  }
}
