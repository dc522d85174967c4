//! Stub lookup with project-local override.
//!
//! Resolution order for a variant `<file>`:
//!
//! 1. `<project>/stubs/<file>` — project-local override.
//! 2. The bundled default from [`crate::stubs`].
//!
//! An override that exists but cannot be read is surfaced as
//! `StubNotFound`; the resolver never falls back past a broken override,
//! so a typo in a customized stub is not silently ignored.

use std::path::PathBuf;

use tracing::debug;

use servgen_core::{
    application::{ApplicationError, ports::{Filesystem, StubResolver}},
    domain::StubKind,
    error::ServgenResult,
};

use crate::stubs::default_stub;

/// Directory under the project root holding stub overrides.
pub const OVERRIDE_DIR: &str = "stubs";

/// Resolves stubs for one project root.
pub struct ProjectStubResolver {
    project_root: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectStubResolver {
    pub fn new(project_root: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            project_root: project_root.into(),
            filesystem,
        }
    }

    fn override_path(&self, kind: StubKind) -> PathBuf {
        self.project_root.join(OVERRIDE_DIR).join(kind.file_name())
    }
}

impl StubResolver for ProjectStubResolver {
    fn resolve(&self, kind: StubKind) -> ServgenResult<String> {
        let override_path = self.override_path(kind);

        if self.filesystem.exists(&override_path) {
            debug!(path = %override_path.display(), "Using project-local stub override");
            return self.filesystem.read_file(&override_path).map_err(|_| {
                ApplicationError::StubNotFound {
                    name: kind.file_name().to_string(),
                }
                .into()
            });
        }

        debug!(stub = kind.file_name(), "Using bundled stub");
        Ok(default_stub(kind).to_string())
    }
}
