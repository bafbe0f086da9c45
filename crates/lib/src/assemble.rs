//! Assembly of the full stack document.
//!
//! Translates every service, then emits top-level network and volume entries
//! for exactly the resources those services reference.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::compose::{StackDocument, StackNetwork, StackService, StackVolume};
use crate::docker::{Service, Volume};
use crate::error::ComposeError;
use crate::names::{is_stack_owned, network_name, service_name};
use crate::resolve::{NetworkMap, VolumeMap};
use crate::translate::translate_service;

/// Generate a stack document from services and the lookup tables for the
/// networks and volumes they reference.
///
/// Services are keyed by their pre-stack name. If two services normalize to
/// the same name, the later one wins.
///
/// # Errors
///
/// Fails on the first reference that does not resolve; no document is
/// returned in that case.
pub fn compose(
  services: &[Service],
  networks: &NetworkMap,
  volumes: &VolumeMap,
) -> Result<StackDocument, ComposeError> {
  let stack_networks = stack_network_view(networks);

  let mut services_out: BTreeMap<String, StackService> = BTreeMap::new();
  for service in services {
    let name = service_name(service);
    let translated = translate_service(service, networks)?;
    if services_out.insert(name.to_string(), translated).is_some() {
      warn!(service = %name, "duplicate service name after normalization, keeping the later one");
    }
  }

  let mut networks_out = BTreeMap::new();
  let mut volumes_out = BTreeMap::new();

  for service in services_out.values() {
    for name in service.networks.iter().flatten() {
      let network = stack_networks
        .get(name)
        .ok_or_else(|| ComposeError::UnresolvedStackNetwork(name.clone()))?;
      networks_out.insert(name.clone(), network.clone());
    }

    for source in service.volumes.iter().flatten().filter_map(|m| m.volume_name()) {
      let volume = volumes.resolve_mount(source)?;
      volumes_out.insert(source.to_string(), stack_volume(volume));
    }
  }

  debug!(
    services = services_out.len(),
    networks = networks_out.len(),
    volumes = volumes_out.len(),
    "assembled stack document"
  );

  Ok(StackDocument::new(services_out, networks_out, volumes_out))
}

/// Top-level network entries for every network in the table, keyed by
/// pre-stack name.
///
/// Networks created by a stack keep their driver; any other network is
/// pre-existing and marked external.
pub fn stack_network_view(networks: &NetworkMap) -> BTreeMap<String, StackNetwork> {
  networks
    .iter()
    .map(|network| {
      let entry = if is_stack_owned(network.labels.as_ref()) {
        StackNetwork::driver(network.driver.clone())
      } else {
        StackNetwork::external()
      };
      (network_name(network).to_string(), entry)
    })
    .collect()
}

fn stack_volume(volume: &Volume) -> StackVolume {
  if is_stack_owned(volume.labels.as_ref()) {
    StackVolume::driver(volume.driver.clone())
  } else {
    StackVolume::external()
  }
}
