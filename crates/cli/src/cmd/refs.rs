//! Refs command implementation.
//!
//! Lists the networks and volumes a service list depends on, so only those
//! need to be inspected before running `generate`.

use std::path::Path;

use anyhow::{Context, Result};
use restack_lib::snapshot::ClusterSnapshot;

use crate::output::{OutputFormat, print_info, print_json, print_list};

pub fn cmd_refs(services: &Path, format: OutputFormat) -> Result<()> {
  let snapshot = ClusterSnapshot::from_files(services, None, None).context("Failed to load services")?;

  let networks = snapshot.network_ids();
  let volumes = snapshot.volume_names();

  if format.is_json() {
    let json_output = serde_json::json!({ "networks": networks, "volumes": volumes });
    return print_json(&json_output);
  }

  if networks.is_empty() && volumes.is_empty() {
    print_info("No networks or volumes referenced.");
    return Ok(());
  }

  if !networks.is_empty() {
    print_list("Networks", &networks);
  }
  if !volumes.is_empty() {
    print_list("Volumes", &volumes);
  }

  Ok(())
}
