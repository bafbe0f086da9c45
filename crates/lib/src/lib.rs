//! restack-lib: reverse stack file generation.
//!
//! This crate turns the live state of a swarm cluster back into the stack
//! file that plausibly deployed it:
//! - `docker`: service, network and volume descriptors as inspected
//! - `compose`: the stack document and its service, network and volume entries
//! - `names` / `labels`: undoing stack name prefixes and bookkeeping labels
//! - `resolve`: lookup tables for networks and volumes
//! - `translate` / `assemble`: per-service translation and document assembly
//! - `snapshot`: loading inspect output from disk
//!
//! # Example
//!
//! ```
//! use restack_lib::assemble::compose;
//! use restack_lib::docker::Service;
//! use restack_lib::resolve::{NetworkMap, VolumeMap};
//!
//! let services: Vec<Service> = serde_json::from_str(r#"[{
//!   "Spec": {
//!     "Name": "myapp_web",
//!     "Labels": { "com.docker.stack.namespace": "myapp" },
//!     "TaskTemplate": { "ContainerSpec": { "Image": "nginx:1.2@sha256:abc" } }
//!   }
//! }]"#).unwrap();
//!
//! let doc = compose(&services, &NetworkMap::default(), &VolumeMap::default()).unwrap();
//! assert_eq!(doc.services["web"].image, "nginx:1.2");
//! ```

pub mod assemble;
pub mod compose;
pub mod consts;
pub mod docker;
pub mod encode;
pub mod error;
pub mod labels;
pub mod names;
pub mod resolve;
pub mod snapshot;
pub mod translate;
pub mod util;

pub use error::ComposeError;

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, ComposeError>;
