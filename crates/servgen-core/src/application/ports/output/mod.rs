//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `servgen-adapters` crate provides implementations.

use crate::domain::{RenderContext, StubKind};
use crate::error::ServgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `servgen_adapters::filesystem::LocalFilesystem` (production)
/// - `servgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> ServgenResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ServgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ServgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for stub lookup.
///
/// Implemented by:
/// - `servgen_adapters::ProjectStubResolver` (override dir, then bundled)
pub trait StubResolver: Send + Sync {
    /// Return the stub text for the given variant.
    fn resolve(&self, kind: StubKind) -> ServgenResult<String>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `servgen_adapters::StubRenderer` (literal `{{ token }}` substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Substitute context variables into the stub text.
    ///
    /// Substitution is literal find/replace, not templating-language
    /// evaluation. Implementations fail when placeholders remain unresolved
    /// after substitution.
    fn render(&self, stub: &str, context: &RenderContext) -> ServgenResult<String>;
}

/// Port for interactive confirmation.
///
/// Implemented by:
/// - `servgen_adapters::StdinPrompter` (production)
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question; an empty answer yields `default_yes`.
    fn confirm(&self, message: &str, default_yes: bool) -> ServgenResult<bool>;
}
