mod generate;
mod refs;

pub use generate::{GenerateArgs, cmd_generate};
pub use refs::cmd_refs;
