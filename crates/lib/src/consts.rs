//! Fixed label keys and schema constants shared with the orchestrator CLI.

/// Label the orchestrator attaches to every resource created as part of a
/// stack. Its value is the stack name, which is also the name prefix.
pub const STACK_NAMESPACE_LABEL: &str = "com.docker.stack.namespace";

/// Label the orchestrator attaches to services to remember the image
/// reference the stack file asked for.
pub const STACK_IMAGE_LABEL: &str = "com.docker.stack.image";

/// Schema version written at the top of every generated stack document.
pub const COMPOSE_VERSION: &str = "3.3";

/// Separator placed between the stack name and the resource name.
pub const NAMESPACE_SEPARATOR: char = '_';

/// Marks the start of a digest pin in an image reference.
pub const DIGEST_SEPARATOR: char = '@';
