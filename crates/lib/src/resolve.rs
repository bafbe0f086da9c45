//! Lookup tables for networks and volumes, and resolution of service
//! references against them.
//!
//! Both tables are built once per translation run from the descriptor lists
//! and passed explicitly to the translator and assembler. A reference that
//! does not resolve is a hard error: it means the snapshot is inconsistent.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::docker::{MountKind, Network, Service, Volume};
use crate::error::ComposeError;
use crate::names::normalize_name;

/// Networks keyed by orchestrator id.
#[derive(Debug, Clone, Default)]
pub struct NetworkMap {
  networks: BTreeMap<String, Network>,
}

impl NetworkMap {
  /// Build the table from network inspect output. Ids are used verbatim.
  pub fn from_networks(networks: impl IntoIterator<Item = Network>) -> Self {
    let networks: BTreeMap<_, _> = networks.into_iter().map(|n| (n.id.clone(), n)).collect();
    debug!(count = networks.len(), "built network map");
    Self { networks }
  }

  pub fn get(&self, id: &str) -> Option<&Network> {
    self.networks.get(id)
  }

  pub fn len(&self) -> usize {
    self.networks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.networks.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Network> {
    self.networks.values()
  }

  /// Resolve every network `service` is attached to, in attachment order.
  ///
  /// # Errors
  ///
  /// Returns [`ComposeError::DanglingNetworkReference`] for the first
  /// attachment whose id is not in the table.
  pub fn resolve_service_networks(&self, service: &Service) -> Result<Vec<&Network>, ComposeError> {
    service
      .network_targets()
      .map(|id| {
        self
          .get(id)
          .ok_or_else(|| ComposeError::DanglingNetworkReference(id.to_string()))
      })
      .collect()
  }
}

/// Volumes keyed by their pre-stack name.
#[derive(Debug, Clone, Default)]
pub struct VolumeMap {
  volumes: BTreeMap<String, Volume>,
}

impl VolumeMap {
  /// Build the table from volume inspect output.
  ///
  /// Each descriptor's name is normalized in place before insertion, so keys
  /// always match the names produced by mount translation.
  ///
  /// # Errors
  ///
  /// Returns [`ComposeError::MalformedVolumeEntry`] if a descriptor has no
  /// name or an empty one.
  pub fn from_volumes(volumes: impl IntoIterator<Item = Volume>) -> Result<Self, ComposeError> {
    let mut table = BTreeMap::new();

    for (index, mut volume) in volumes.into_iter().enumerate() {
      let name = match volume.name.as_deref() {
        Some(name) if !name.is_empty() => normalize_name(name, volume.labels.as_ref()).to_string(),
        _ => return Err(ComposeError::MalformedVolumeEntry { index }),
      };

      volume.name = Some(name.clone());
      if table.insert(name.clone(), volume).is_some() {
        warn!(volume = %name, "duplicate volume name after normalization, keeping the later one");
      }
    }

    debug!(count = table.len(), "built volume map");
    Ok(Self { volumes: table })
  }

  pub fn get(&self, name: &str) -> Option<&Volume> {
    self.volumes.get(name)
  }

  pub fn len(&self) -> usize {
    self.volumes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.volumes.is_empty()
  }

  /// Resolve a volume mount source (already normalized) to its descriptor.
  ///
  /// # Errors
  ///
  /// Returns [`ComposeError::DanglingVolumeReference`] if no volume has that name.
  pub fn resolve_mount(&self, source: &str) -> Result<&Volume, ComposeError> {
    self
      .get(source)
      .ok_or_else(|| ComposeError::DanglingVolumeReference(source.to_string()))
  }
}

/// Network ids referenced by `services`, so a caller can inspect only those.
///
/// Ordered by first reference; each id appears once.
pub fn referenced_network_ids(services: &[Service]) -> Vec<String> {
  dedup_ordered(services.iter().flat_map(Service::network_targets))
}

/// Orchestrator names of the volumes mounted by `services`, so a caller can
/// inspect only those.
///
/// Names are the mount sources as deployed, not normalized. Only volume
/// mounts with a source count. Ordered by first reference; each name appears
/// once.
pub fn referenced_volume_names(services: &[Service]) -> Vec<String> {
  dedup_ordered(
    services
      .iter()
      .flat_map(Service::mounts)
      .filter(|m| m.kind == MountKind::Volume)
      .filter_map(|m| m.source.as_deref()),
  )
}

fn dedup_ordered<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
  let mut seen = HashSet::new();
  items.filter(|item| seen.insert(*item)).map(str::to_string).collect()
}
