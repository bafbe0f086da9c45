//! Service, network and volume descriptor types.
//!
//! Field names follow the orchestrator's wire format (`PascalCase`), and
//! `null` maps or lists decode as absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A label map as attached to services, containers, networks and volumes.
pub type Labels = BTreeMap<String, String>;

/// A service as returned by service inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
  pub spec: ServiceSpec,
}

/// The user-declared part of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpec {
  /// Orchestrator-assigned name, prefixed with the stack name when the
  /// service was deployed as part of a stack.
  pub name: String,
  #[serde(default)]
  pub labels: Option<Labels>,
  pub task_template: TaskTemplate,
  #[serde(default)]
  pub mode: Option<ServiceMode>,
  #[serde(default)]
  pub endpoint_spec: Option<EndpointSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskTemplate {
  pub container_spec: ContainerSpec,
  #[serde(default)]
  pub networks: Option<Vec<NetworkAttachment>>,
  #[serde(default)]
  pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSpec {
  /// Image reference, possibly pinned with an `@sha256:...` digest.
  pub image: String,
  #[serde(default)]
  pub env: Option<Vec<String>>,
  #[serde(default)]
  pub labels: Option<Labels>,
  #[serde(default)]
  pub mounts: Option<Vec<Mount>>,
  #[serde(default)]
  pub configs: Option<Vec<ConfigReference>>,
}

/// A mount declared on a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mount {
  #[serde(rename = "Type")]
  pub kind: MountKind,
  /// Volume name or host path. Absent for anonymous volumes and tmpfs.
  #[serde(default)]
  pub source: Option<String>,
  pub target: String,
  #[serde(default)]
  pub volume_options: Option<VolumeOptions>,
}

/// The kind of a mount. Serialized in lowercase, as the orchestrator does.
///
/// Kinds added by newer engines (`image`, ...) decode as [`MountKind::Other`]
/// and are re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
  Bind,
  Volume,
  Tmpfs,
  Npipe,
  Cluster,
  #[serde(untagged)]
  Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeOptions {
  #[serde(default)]
  pub labels: Option<Labels>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigReference {
  pub config_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAttachment {
  /// Id of the attached network.
  pub target: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
  #[serde(default)]
  pub constraints: Option<Vec<String>>,
}

/// Replication mode. The orchestrator sets exactly one of the two fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceMode {
  #[serde(default)]
  pub replicated: Option<ReplicatedMode>,
  #[serde(default)]
  pub global: Option<GlobalMode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicatedMode {
  #[serde(default)]
  pub replicas: Option<u64>,
}

/// Global mode carries no settings; its presence is the signal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalMode {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointSpec {
  #[serde(default)]
  pub ports: Option<Vec<PortConfig>>,
}

/// A published port as declared in the endpoint spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortConfig {
  #[serde(default)]
  pub published_port: Option<u16>,
  pub target_port: u16,
  #[serde(default)]
  pub protocol: Option<String>,
  #[serde(default)]
  pub publish_mode: Option<String>,
}

/// A network as returned by network inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Network {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub driver: Option<String>,
  #[serde(default)]
  pub labels: Option<Labels>,
}

/// A volume as returned by volume inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
  /// Rewritten to the pre-stack name when the volume table is built.
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub driver: Option<String>,
  #[serde(default)]
  pub labels: Option<Labels>,
}

impl Service {
  /// The attached network ids, in declaration order.
  pub fn network_targets(&self) -> impl Iterator<Item = &str> {
    self
      .spec
      .task_template
      .networks
      .iter()
      .flatten()
      .map(|n| n.target.as_str())
  }

  /// The container mounts, in declaration order.
  pub fn mounts(&self) -> impl Iterator<Item = &Mount> {
    self.spec.task_template.container_spec.mounts.iter().flatten()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_inspect_output_ignoring_unknown_fields() {
    let json = r#"{
      "ID": "x1y2z3",
      "Version": { "Index": 42 },
      "Spec": {
        "Name": "myapp_web",
        "Labels": { "com.docker.stack.namespace": "myapp" },
        "TaskTemplate": {
          "ContainerSpec": {
            "Image": "nginx:1.2@sha256:abc",
            "Mounts": [
              { "Type": "volume", "Source": "myapp_data", "Target": "/data" },
              { "Type": "tmpfs", "Target": "/tmp" }
            ]
          },
          "Networks": [{ "Target": "net1" }, { "Target": "net2" }],
          "ForceUpdate": 0
        },
        "Mode": { "Global": {} },
        "EndpointSpec": { "Mode": "vip", "Ports": [{ "TargetPort": 80 }] }
      }
    }"#;

    let service: Service = serde_json::from_str(json).unwrap();
    assert_eq!(service.spec.name, "myapp_web");
    assert_eq!(service.network_targets().collect::<Vec<_>>(), vec!["net1", "net2"]);

    let mounts: Vec<_> = service.mounts().collect();
    assert_eq!(mounts[0].kind, MountKind::Volume);
    assert_eq!(mounts[1].kind, MountKind::Tmpfs);
    assert_eq!(mounts[1].source, None);

    let mode = service.spec.mode.unwrap();
    assert!(mode.global.is_some());
    assert!(mode.replicated.is_none());

    let ports = service.spec.endpoint_spec.unwrap().ports.unwrap();
    assert_eq!(ports[0].target_port, 80);
    assert_eq!(ports[0].published_port, None);
  }

  #[test]
  fn null_collections_decode_as_absent() {
    let json = r#"{
      "Spec": {
        "Name": "web",
        "Labels": null,
        "TaskTemplate": { "ContainerSpec": { "Image": "nginx", "Env": null, "Mounts": null } }
      }
    }"#;

    let service: Service = serde_json::from_str(json).unwrap();
    assert!(service.spec.labels.is_none());
    assert!(service.spec.task_template.container_spec.env.is_none());
    assert_eq!(service.mounts().count(), 0);
    assert_eq!(service.network_targets().count(), 0);
  }

  #[test]
  fn unknown_mount_kind_is_kept_verbatim() {
    let mount: Mount =
      serde_json::from_str(r#"{ "Type": "image", "Source": "alpine:3", "Target": "/opt" }"#).unwrap();
    assert_eq!(mount.kind, MountKind::Other("image".to_string()));
    assert_eq!(serde_json::to_value(&mount.kind).unwrap(), "image");

    let mount: Mount = serde_json::from_str(r#"{ "Type": "bind", "Source": "/srv", "Target": "/srv" }"#).unwrap();
    assert_eq!(mount.kind, MountKind::Bind);
    assert_eq!(serde_json::to_value(&mount.kind).unwrap(), "bind");
  }

  #[test]
  fn decodes_network_and_volume() {
    let network: Network =
      serde_json::from_str(r#"{ "Id": "abc", "Name": "myapp_front", "Driver": "overlay", "Scope": "swarm" }"#).unwrap();
    assert_eq!(network.id, "abc");
    assert_eq!(network.driver.as_deref(), Some("overlay"));

    let volume: Volume =
      serde_json::from_str(r#"{ "Name": "data", "Driver": "local", "Mountpoint": "/var/lib/x", "Labels": null }"#)
        .unwrap();
    assert_eq!(volume.name.as_deref(), Some("data"));
    assert!(volume.labels.is_none());
  }
}
