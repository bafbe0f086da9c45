//! Shared helpers for stack file tests.

use std::path::PathBuf;

use restack_lib::compose::StackDocument;
use restack_lib::encode::to_yaml;
use restack_lib::snapshot::{ClusterSnapshot, SnapshotError};

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Path to an optional companion fixture, if it exists.
fn companion(base: &str, suffix: &str) -> Option<PathBuf> {
  let path = fixture_path(&format!("{}_{}.json", base, suffix));
  path.exists().then_some(path)
}

/// Load `<base>.json` plus `<base>_net.json` and `<base>_vol.json` when present.
pub fn load_snapshot(base: &str) -> Result<ClusterSnapshot, SnapshotError> {
  let networks = companion(base, "net");
  let volumes = companion(base, "vol");
  ClusterSnapshot::from_files(
    &fixture_path(&format!("{}.json", base)),
    networks.as_deref(),
    volumes.as_deref(),
  )
}

/// Compose the document for a fixture set.
pub fn compose_fixture(base: &str) -> Result<StackDocument, SnapshotError> {
  Ok(load_snapshot(base)?.compose()?)
}

/// Generate YAML for `<base>` and compare it structurally with `<base>.yml`.
pub fn assert_fixture_pair(base: &str) {
  let doc = compose_fixture(base).unwrap_or_else(|e| panic!("compose failed for {}: {}", base, e));
  let yaml = to_yaml(&doc).unwrap();

  let actual: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
  let expected: serde_yaml::Value = serde_yaml::from_str(&fixture_content(&format!("{}.yml", base))).unwrap();

  assert_eq!(actual, expected, "generated stack file for {} differs:\n{}", base, yaml);
}
