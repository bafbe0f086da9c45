//! Translation of a single orchestrator service into a stack service entry.

use tracing::debug;

use crate::compose::{Deploy, DeployMode, DeployPlacement, StackMount, StackPort, StackService};
use crate::consts::DIGEST_SEPARATOR;
use crate::docker::{Service, ServiceMode};
use crate::error::ComposeError;
use crate::labels::strip_stack_labels;
use crate::names::{mount_source, network_name};
use crate::resolve::NetworkMap;

/// Translate `service` into its stack file form.
///
/// The output key for the service is not part of the record; callers derive
/// it with [`crate::names::service_name`].
///
/// # Errors
///
/// Returns [`ComposeError::DanglingNetworkReference`] if the service is
/// attached to a network missing from `networks`.
pub fn translate_service(service: &Service, networks: &NetworkMap) -> Result<StackService, ComposeError> {
  let spec = &service.spec;
  let container = &spec.task_template.container_spec;
  debug!(service = %spec.name, "translating service");

  // Every attached network is kept, in attachment order.
  let network_names: Vec<String> = networks
    .resolve_service_networks(service)?
    .into_iter()
    .map(|n| network_name(n).to_string())
    .collect();

  let ports = translate_ports(service);
  let mounts = translate_mounts(service);
  let labels = strip_stack_labels(container.labels.as_ref());
  let environment = container.env.clone().filter(|env| !env.is_empty());
  let deploy = translate_deploy(service);

  Ok(StackService {
    image: strip_digest(&container.image).to_string(),
    ports: (!ports.is_empty()).then_some(ports),
    environment,
    labels: (!labels.is_empty()).then_some(labels),
    networks: (!network_names.is_empty()).then_some(network_names),
    volumes: (!mounts.is_empty()).then_some(mounts),
    deploy: (!deploy.is_empty()).then_some(deploy),
  })
}

/// Drop a digest pin from an image reference, keeping the tag.
///
/// `nginx:1.2@sha256:abc` becomes `nginx:1.2`; references without a digest
/// are returned as-is.
pub fn strip_digest(image: &str) -> &str {
  image.split(DIGEST_SEPARATOR).next().unwrap_or(image)
}

fn translate_ports(service: &Service) -> Vec<StackPort> {
  service
    .spec
    .endpoint_spec
    .iter()
    .flat_map(|e| e.ports.iter().flatten())
    .map(|port| StackPort {
      published: port.published_port,
      target: port.target_port,
      protocol: port.protocol.clone(),
      mode: port.publish_mode.clone(),
    })
    .collect()
}

fn translate_mounts(service: &Service) -> Vec<StackMount> {
  service
    .mounts()
    .map(|mount| StackMount {
      kind: mount.kind.clone(),
      source: mount_source(mount).map(str::to_string),
      target: mount.target.clone(),
    })
    .collect()
}

fn translate_deploy(service: &Service) -> Deploy {
  let spec = &service.spec;
  let mut deploy = Deploy::default();

  if let Some(mode) = &spec.mode {
    apply_mode(&mut deploy, mode);
  }

  let labels = strip_stack_labels(spec.labels.as_ref());
  if !labels.is_empty() {
    deploy.labels = Some(labels);
  }

  let constraints = spec
    .task_template
    .placement
    .as_ref()
    .and_then(|p| p.constraints.clone())
    .unwrap_or_default();
  if !constraints.is_empty() {
    deploy.placement = Some(DeployPlacement { constraints });
  }

  deploy
}

fn apply_mode(deploy: &mut Deploy, mode: &ServiceMode) {
  // global takes precedence if both are somehow set
  if mode.global.is_some() {
    deploy.mode = Some(DeployMode::Global);
  } else if let Some(replicated) = &mode.replicated {
    deploy.mode = Some(DeployMode::Replicated);
    deploy.replicas = replicated.replicas;
  }
}
