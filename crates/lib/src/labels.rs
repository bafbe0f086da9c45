//! Removal of orchestrator bookkeeping labels.

use crate::consts::{STACK_IMAGE_LABEL, STACK_NAMESPACE_LABEL};
use crate::docker::Labels;

/// Returns true for label keys the orchestrator adds on stack deploy.
pub fn is_bookkeeping_label(key: &str) -> bool {
  key == STACK_IMAGE_LABEL || key == STACK_NAMESPACE_LABEL
}

/// Copy `labels` without the stack bookkeeping keys.
///
/// Absent labels yield an empty map.
pub fn strip_stack_labels(labels: Option<&Labels>) -> Labels {
  labels
    .into_iter()
    .flatten()
    .filter(|(key, _)| !is_bookkeeping_label(key))
    .map(|(key, value)| (key.clone(), value.clone()))
    .collect()
}
