//! Error types for stack translation.

use thiserror::Error;

/// Errors that abort a translation run.
///
/// Every variant means the caller supplied an inconsistent snapshot. No
/// partial document is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
  /// A service is attached to a network id missing from the network table.
  #[error("network id not found in network map: {0}")]
  DanglingNetworkReference(String),

  /// A volume mount names a volume missing from the volume table.
  #[error("volume not found in volume map: {0}")]
  DanglingVolumeReference(String),

  /// A volume descriptor has no usable name.
  #[error("volume at index {index} has no name")]
  MalformedVolumeEntry { index: usize },

  /// A translated service lists a network the stack network view does not know.
  #[error("network not found in stack network map: {0}")]
  UnresolvedStackNetwork(String),
}
