//! Recovering pre-stack resource names.
//!
//! When a stack is deployed, the orchestrator renames every service, network
//! and volume to `<stack>_<name>` and records `<stack>` under
//! [`STACK_NAMESPACE_LABEL`]. Normalizing reverses that rename.

use crate::consts::{NAMESPACE_SEPARATOR, STACK_NAMESPACE_LABEL};
use crate::docker::{Labels, Mount, MountKind, Network, Service};

/// The owning stack's name, if the labels mark the resource as stack-created.
pub fn stack_namespace(labels: Option<&Labels>) -> Option<&str> {
  labels?.get(STACK_NAMESPACE_LABEL).map(String::as_str)
}

/// Returns true if the labels mark the resource as created by a stack.
pub fn is_stack_owned(labels: Option<&Labels>) -> bool {
  stack_namespace(labels).is_some()
}

/// Strip the `<stack>_` prefix from `name`.
///
/// The prefix is only removed when `labels` carries the namespace label and
/// `name` starts with `<namespace>_`; it is removed once. Any other name is
/// returned unchanged.
pub fn normalize_name<'a>(name: &'a str, labels: Option<&Labels>) -> &'a str {
  match stack_namespace(labels) {
    Some(namespace) => name
      .strip_prefix(namespace)
      .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
      .unwrap_or(name),
    None => name,
  }
}

/// The service name as written in the stack file.
pub fn service_name(service: &Service) -> &str {
  normalize_name(&service.spec.name, service.spec.labels.as_ref())
}

/// The network name as written in the stack file.
pub fn network_name(network: &Network) -> &str {
  normalize_name(&network.name, network.labels.as_ref())
}

/// The source of `mount` as it was named in the stack file.
///
/// Volume sources are normalized against the mount's own volume labels; bind
/// and other sources are host paths and pass through unchanged.
pub fn mount_source(mount: &Mount) -> Option<&str> {
  let source = mount.source.as_deref()?;
  match mount.kind {
    MountKind::Volume => {
      let labels = mount.volume_options.as_ref().and_then(|o| o.labels.as_ref());
      Some(normalize_name(source, labels))
    }
    _ => Some(source),
  }
}
