//! Test utilities for restack-lib.
//!
//! Descriptors are built from JSON in the orchestrator's wire format, which
//! keeps fixtures close to real inspect output.

use serde_json::{Value, json};

use crate::consts::STACK_NAMESPACE_LABEL;
use crate::docker::{Labels, Network, Service, Volume};

/// Build a service from the contents of its `Spec`.
pub fn service(spec: Value) -> Service {
  serde_json::from_value(json!({ "Spec": spec })).unwrap()
}

/// A service with only a name and an image.
pub fn bare_service(name: &str, image: &str) -> Service {
  service(json!({
    "Name": name,
    "TaskTemplate": { "ContainerSpec": { "Image": image } }
  }))
}

pub fn network(value: Value) -> Network {
  serde_json::from_value(value).unwrap()
}

pub fn volume(value: Value) -> Volume {
  serde_json::from_value(value).unwrap()
}

/// Labels marking a resource as created by `stack`.
pub fn namespaced(stack: &str) -> Labels {
  Labels::from([(STACK_NAMESPACE_LABEL.to_string(), stack.to_string())])
}
