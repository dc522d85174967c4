//! Infrastructure adapters for Servgen.
//!
//! This crate implements the ports defined in `servgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod prompt;
pub mod renderer;
pub mod stub_resolver;
pub mod stubs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::StdinPrompter;
pub use renderer::StubRenderer;
pub use stub_resolver::ProjectStubResolver;
