//! Stack file generation from recorded inspect output.

mod common;
mod compose_tests;
mod error_tests;
