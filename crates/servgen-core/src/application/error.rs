//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Output file already exists and `--force` was not given.
    #[error("{kind} already exists.")]
    AlreadyExists { kind: String, path: PathBuf },

    /// No stub could be found for the requested variant.
    #[error("Stub '{name}' not found")]
    StubNotFound { name: String },

    /// Rendering finished with placeholder tokens still unresolved.
    #[error("Stub has unresolved placeholders: {}", placeholders.join(", "))]
    UnresolvedPlaceholders { placeholders: Vec<String> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The confirmation prompt could not be read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { kind, path } => vec![
                format!("A {} file exists at: {}", kind.to_lowercase(), path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different name".into(),
            ],
            Self::StubNotFound { name } => vec![
                format!("No stub named '{}' was found", name),
                "A project-local override lives at stubs/<name> under the project root".into(),
                "Remove a broken override to fall back to the bundled stub".into(),
            ],
            Self::UnresolvedPlaceholders { placeholders } => {
                let mut suggestions =
                    vec!["The stub references variables this invocation does not provide:".into()];
                for token in placeholders {
                    suggestions.push(format!("  • {token}"));
                }
                suggestions
                    .push("Model placeholders require --model or --model-name".into());
                suggestions
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the project root is correct (--project)".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Could not read the confirmation answer".into(),
                "Re-run in an interactive terminal, or answer via piped stdin".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::UnresolvedPlaceholders { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
