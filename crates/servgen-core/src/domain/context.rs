//! Variable context for stub rendering.

/// Ordered variable map applied to a stub by the renderer.
///
/// Variables are stored in insertion order and substituted literally; the
/// renderer owns the `{{ name }}` token syntax, this type only carries the
/// name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(String, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value for the same name.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.variables.retain(|(n, _)| n != &name);
        self.variables.push((name, value.into()));
        self
    }

    /// Look up a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
