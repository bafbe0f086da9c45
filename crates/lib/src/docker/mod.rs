//! Orchestrator descriptors as returned by the control-plane API.
//!
//! Only the fields the translator reads are modelled. Unknown fields are
//! ignored on decode, so raw `inspect` output can be fed in directly.

mod types;

pub use types::*;
