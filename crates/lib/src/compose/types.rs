//! Output records for the regenerated stack document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::COMPOSE_VERSION;
use crate::docker::{Labels, MountKind};

/// The complete stack document.
///
/// Uses [`BTreeMap`] for every keyed section so serialization order is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDocument {
  pub version: String,
  pub services: BTreeMap<String, StackService>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub networks: Option<BTreeMap<String, StackNetwork>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub volumes: Option<BTreeMap<String, StackVolume>>,
}

impl StackDocument {
  /// Create a document from its sections, dropping empty network and volume
  /// sections.
  pub fn new(
    services: BTreeMap<String, StackService>,
    networks: BTreeMap<String, StackNetwork>,
    volumes: BTreeMap<String, StackVolume>,
  ) -> Self {
    Self {
      version: COMPOSE_VERSION.to_string(),
      services,
      networks: (!networks.is_empty()).then_some(networks),
      volumes: (!volumes.is_empty()).then_some(volumes),
    }
  }
}

/// A single service entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackService {
  /// Image reference without digest pin.
  pub image: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ports: Option<Vec<StackPort>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub environment: Option<Vec<String>>,
  /// Container labels.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub labels: Option<Labels>,
  /// Pre-stack network names.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub networks: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub volumes: Option<Vec<StackMount>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deploy: Option<Deploy>,
}

/// A port in long syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackPort {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub published: Option<u16>,
  pub target: u16,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub protocol: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mode: Option<String>,
}

/// A mount in long syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackMount {
  #[serde(rename = "type")]
  pub kind: MountKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
  pub target: String,
}

impl StackMount {
  /// The source name when this mount refers to a named volume.
  pub fn volume_name(&self) -> Option<&str> {
    match self.kind {
      MountKind::Volume => self.source.as_deref(),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
  Replicated,
  Global,
}

/// Replication, service labels and placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deploy {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mode: Option<DeployMode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub replicas: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub labels: Option<Labels>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub placement: Option<DeployPlacement>,
}

impl Deploy {
  /// Returns true if no field carries content.
  pub fn is_empty(&self) -> bool {
    self.mode.is_none() && self.replicas.is_none() && self.labels.is_none() && self.placement.is_none()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployPlacement {
  pub constraints: Vec<String>,
}

/// A top-level network entry: either created by the stack with a driver,
/// or pre-existing and marked external.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackNetwork {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub driver: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external: Option<bool>,
}

/// A top-level volume entry, same shape as [`StackNetwork`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackVolume {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub driver: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external: Option<bool>,
}

impl StackNetwork {
  pub fn driver(driver: Option<String>) -> Self {
    Self { driver, external: None }
  }

  pub fn external() -> Self {
    Self {
      driver: None,
      external: Some(true),
    }
  }
}

impl StackVolume {
  pub fn driver(driver: Option<String>) -> Self {
    Self { driver, external: None }
  }

  pub fn external() -> Self {
    Self {
      driver: None,
      external: Some(true),
    }
  }
}
