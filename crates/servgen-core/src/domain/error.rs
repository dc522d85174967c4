use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("The name \"{name}\" is reserved")]
    ReservedName { name: String },

    #[error("Model name contains invalid characters")]
    InvalidModelName { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a non-empty class name".into(),
                "Example: servgen service Order".into(),
            ],
            Self::ReservedName { name } => vec![
                format!("'{}' collides with a reserved keyword", name),
                "Pick a different class name".into(),
            ],
            Self::InvalidModelName { name } => vec![
                format!("Model name '{}' is invalid", name),
                "Use letters, digits, underscores, and '/' or '\\' as namespace separators".into(),
                "Examples: Order, Billing/Invoice, Order_Line".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::ReservedName { .. } | Self::InvalidModelName { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
