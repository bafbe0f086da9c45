//! Stack document types.
//!
//! These mirror the stack file schema. Every optional field is skipped on
//! serialization when absent, so the encoded document stays minimal.

mod types;

pub use types::*;
