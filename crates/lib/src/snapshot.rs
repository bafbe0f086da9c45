//! Loading a cluster snapshot from inspect output.
//!
//! A snapshot is a service list plus the network and volume lists those
//! services reference, each stored as a JSON array exactly as the
//! orchestrator's `inspect` commands print it. Missing network or volume
//! files stand for empty lists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::assemble::compose;
use crate::compose::StackDocument;
use crate::docker::{Network, Service, Volume};
use crate::error::ComposeError;
use crate::resolve::{NetworkMap, VolumeMap, referenced_network_ids, referenced_volume_names};

#[derive(Debug, Error)]
pub enum SnapshotError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error(transparent)]
  Compose(#[from] ComposeError),
}

/// Services, networks and volumes captured from one cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
  pub services: Vec<Service>,
  #[serde(default)]
  pub networks: Vec<Network>,
  #[serde(default)]
  pub volumes: Vec<Volume>,
}

impl ClusterSnapshot {
  pub fn new(services: Vec<Service>, networks: Vec<Network>, volumes: Vec<Volume>) -> Self {
    Self {
      services,
      networks,
      volumes,
    }
  }

  /// Load a snapshot from a service list and optional network and volume lists.
  pub fn from_files(
    services: &Path,
    networks: Option<&Path>,
    volumes: Option<&Path>,
  ) -> Result<Self, SnapshotError> {
    let services: Vec<Service> = read_json(services)?;
    let networks: Vec<Network> = networks.map(read_json).transpose()?.unwrap_or_default();
    let volumes: Vec<Volume> = volumes.map(read_json).transpose()?.unwrap_or_default();

    debug!(
      services = services.len(),
      networks = networks.len(),
      volumes = volumes.len(),
      "loaded cluster snapshot"
    );

    Ok(Self::new(services, networks, volumes))
  }

  /// Network ids the services are attached to.
  pub fn network_ids(&self) -> Vec<String> {
    referenced_network_ids(&self.services)
  }

  /// Orchestrator names of the volumes the services mount.
  pub fn volume_names(&self) -> Vec<String> {
    referenced_volume_names(&self.services)
  }

  /// Build the lookup tables and generate the stack document.
  pub fn compose(self) -> Result<StackDocument, ComposeError> {
    let networks = NetworkMap::from_networks(self.networks);
    let volumes = VolumeMap::from_volumes(self.volumes)?;
    compose(&self.services, &networks, &volumes)
  }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
  let content = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
    path: path.to_path_buf(),
    source,
  })
}
