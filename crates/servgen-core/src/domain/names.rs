//! Qualified class names and project naming conventions.
//!
//! [`QualifiedName`] is a namespace-qualified class name. User input may use
//! `/` or `\` as segment separators; internally the name is a segment list
//! and renders with `\`, the separator the generated artifacts use.
//!
//! [`Conventions`] is the explicit collaborator that replaces framework
//! base-class inheritance: it owns the qualification rules (which namespace a
//! service or model lands in) and the mapping from a qualified name to a file
//! location under the project root.

use std::fmt;
use std::path::PathBuf;

/// Separator used when rendering a qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A namespace-qualified class name.
///
/// Invariant: at least one non-empty segment. Enforced at construction by
/// dropping empty segments; parsing an all-separator string yields a single
/// empty name only through [`QualifiedName::parse`] of an empty input, which
/// callers rule out via request validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(Vec<String>);

impl QualifiedName {
    /// Parse user input, accepting both `/` and `\` as separators.
    pub fn parse(input: &str) -> Self {
        let segments = input
            .trim()
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self(segments)
    }

    /// Build from pre-split segments.
    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The class name without its namespace.
    pub fn basename(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }

    /// The namespace portion (everything but the basename), rendered with `\`.
    pub fn namespace(&self) -> String {
        self.0[..self.0.len().saturating_sub(1)].join("\\")
    }

    /// Whether the first segment equals `root` (the name is already rooted).
    pub fn is_rooted_in(&self, root: &str) -> bool {
        self.0.first().is_some_and(|s| s == root)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\\"))
    }
}

/// Project naming conventions.
///
/// Defaults follow the common `App` root-namespace layout: services under
/// `App\Services` (mapped to `app/Services/`), models under `App\Models`,
/// tests under `Tests` (mapped to `tests/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Root namespace for application classes.
    pub root_namespace: String,
    /// Sub-namespace (under the root) for generated services.
    pub services_namespace: String,
    /// Sub-namespace (under the root) for models.
    pub models_namespace: String,
    /// Root namespace for generated tests.
    pub tests_namespace: String,
    /// Directory the root namespace maps to, relative to the project root.
    pub source_root: PathBuf,
    /// Directory the tests namespace maps to, relative to the project root.
    pub tests_root: PathBuf,
    /// File extension for generated artifacts, without the leading dot.
    pub extension: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            root_namespace: "App".into(),
            services_namespace: "Services".into(),
            models_namespace: "Models".into(),
            tests_namespace: "Tests".into(),
            source_root: "app".into(),
            tests_root: "tests".into(),
            extension: "php".into(),
        }
    }
}

impl Conventions {
    /// Qualify a service class input under `<root>\<services>`.
    ///
    /// Input already starting with the root namespace is kept as-is, so
    /// `App/Services/OrderService` and `OrderService` qualify identically.
    pub fn qualify_service(&self, input: &str) -> QualifiedName {
        self.qualify_under(input, &self.services_namespace)
    }

    /// Qualify a model class input under `<root>\<models>`.
    pub fn qualify_model(&self, input: &str) -> QualifiedName {
        self.qualify_under(input, &self.models_namespace)
    }

    /// Qualify a test class basename under the tests root namespace.
    pub fn qualify_test(&self, class: &str) -> QualifiedName {
        let parsed = QualifiedName::parse(class);
        if parsed.is_rooted_in(&self.tests_namespace) {
            return parsed;
        }
        let mut segments = vec![self.tests_namespace.clone()];
        segments.extend(parsed.segments().iter().cloned());
        QualifiedName(segments)
    }

    fn qualify_under(&self, input: &str, sub_namespace: &str) -> QualifiedName {
        let parsed = QualifiedName::parse(input);
        if parsed.is_rooted_in(&self.root_namespace) {
            return parsed;
        }
        let mut segments = vec![self.root_namespace.clone(), sub_namespace.to_string()];
        segments.extend(parsed.segments().iter().cloned());
        QualifiedName(segments)
    }

    /// Map a qualified name to its file path, relative to the project root.
    ///
    /// The root namespace segment maps onto [`Self::source_root`], the tests
    /// namespace segment onto [`Self::tests_root`]. A name rooted elsewhere
    /// maps wholesale under the source root.
    pub fn resolve_path(&self, name: &QualifiedName) -> PathBuf {
        let segments = name.segments();
        let (base, rest) = match segments.first() {
            Some(root) if root == &self.root_namespace => {
                (self.source_root.clone(), &segments[1..])
            }
            Some(root) if root == &self.tests_namespace => {
                (self.tests_root.clone(), &segments[1..])
            }
            _ => (self.source_root.clone(), segments),
        };

        let mut path = base;
        for segment in rest {
            path.push(segment);
        }
        path.set_extension(&self.extension);
        path
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
