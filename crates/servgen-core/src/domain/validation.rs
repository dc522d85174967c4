use crate::domain::error::DomainError;

/// Identifiers that may not be used as class names.
///
/// Case-insensitive. These are the reserved keywords of the target language
/// the default stubs generate, plus the magic constants that behave like
/// keywords in class position.
pub const RESERVED_NAMES: &[&str] = &[
    "__halt_compiler",
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "die",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "enum",
    "eval",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "parent",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "self",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
    "__class__",
    "__dir__",
    "__file__",
    "__function__",
    "__line__",
    "__method__",
    "__namespace__",
    "__trait__",
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a raw service name input.
    ///
    /// The reserved check runs against the full trimmed input, before the
    /// `Service` suffix is applied.
    pub fn validate_service_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if Self::is_reserved_name(trimmed) {
            return Err(DomainError::ReservedName {
                name: trimmed.to_string(),
            });
        }
        Ok(())
    }

    /// Validate a model name against the allowed character set
    /// `[A-Za-z0-9_/\]`. Must run before any file I/O.
    pub fn validate_model_name(name: &str) -> Result<(), DomainError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/' || c == '\\');
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidModelName {
                name: name.to_string(),
            })
        }
    }

    /// Whether `name` collides with a reserved keyword (case-insensitive).
    pub fn is_reserved_name(name: &str) -> bool {
        let lowered = name.to_ascii_lowercase();
        RESERVED_NAMES.contains(&lowered.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_not_reserved() {
        for name in ["Order", "Invoice", "UserProfile", "Order123"] {
            assert!(!DomainValidator::is_reserved_name(name), "failed for: {name}");
        }
    }

    #[test]
    fn keywords_are_reserved_in_any_case() {
        assert!(DomainValidator::is_reserved_name("class"));
        assert!(DomainValidator::is_reserved_name("Class"));
        assert!(DomainValidator::is_reserved_name("TRAIT"));
    }

    #[test]
    fn model_name_rejects_spaces_and_punctuation() {
        assert!(DomainValidator::validate_model_name("Ord er!").is_err());
        assert!(DomainValidator::validate_model_name("Order-Line").is_err());
        assert!(DomainValidator::validate_model_name("").is_err());
    }

    #[test]
    fn model_name_accepts_separators_and_underscores() {
        assert!(DomainValidator::validate_model_name("Billing/Invoice").is_ok());
        assert!(DomainValidator::validate_model_name("Billing\\Invoice").is_ok());
        assert!(DomainValidator::validate_model_name("Order_Line9").is_ok());
    }
}
