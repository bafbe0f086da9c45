use restack_lib::ComposeError;
use restack_lib::snapshot::SnapshotError;

use super::common::{compose_fixture, load_snapshot};

#[test]
fn dangling_network_fails_the_whole_run() {
  let result = compose_fixture("dangling_network");
  assert!(matches!(
    result,
    Err(SnapshotError::Compose(ComposeError::DanglingNetworkReference(ref id))) if id == "deadbeef"
  ));
}

#[test]
fn mounted_volume_missing_from_snapshot() {
  // volumes_2 without its volume list
  let mut snapshot = load_snapshot("volumes_2").unwrap();
  snapshot.volumes.clear();

  let err = snapshot.compose().unwrap_err();
  assert_eq!(err, ComposeError::DanglingVolumeReference("db-data".to_string()));
}

#[test]
fn referenced_ids_for_fetching() {
  let snapshot = load_snapshot("networks_3").unwrap();
  assert_eq!(snapshot.network_ids(), vec!["net-backend", "net-public"]);
  assert!(snapshot.volume_names().is_empty());

  // names must be the ones the orchestrator knows, i.e. those in the volume list
  let snapshot = load_snapshot("volumes_2").unwrap();
  assert_eq!(snapshot.volume_names(), vec!["myapp_db-data"]);
  let fetched: Vec<_> = snapshot.volumes.iter().filter_map(|v| v.name.as_deref()).collect();
  assert_eq!(fetched, vec!["myapp_db-data"]);
}
