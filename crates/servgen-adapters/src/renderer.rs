//! Literal placeholder substitution.

use servgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::ServgenResult,
};
use tracing::instrument;

/// Renderer performing literal `{{ token }}` find/replace.
///
/// Both the spaced (`{{ class }}`) and unspaced (`{{class}}`) spellings are
/// replaced. After substitution the output is checked for placeholder
/// coverage: any remaining `{{ ... }}` token is an error rather than being
/// left verbatim in the generated file.
pub struct StubRenderer;

impl StubRenderer {
    /// Create a new stub renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for StubRenderer {
    #[instrument(skip_all)]
    fn render(&self, stub: &str, context: &RenderContext) -> ServgenResult<String> {
        let mut output = stub.to_string();

        for (name, value) in context.variables() {
            output = output.replace(&format!("{{{{ {name} }}}}"), value);
            output = output.replace(&format!("{{{{{name}}}}}"), value);
        }

        let unresolved = unresolved_placeholders(&output);
        if !unresolved.is_empty() {
            return Err(ApplicationError::UnresolvedPlaceholders {
                placeholders: unresolved,
            }
            .into());
        }

        Ok(output)
    }
}

/// Collect remaining `{{ ... }}` tokens, deduplicated, in order of first
/// appearance. A `{{` without a closing `}}` is not a placeholder.
fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else { break };
        let token = format!("{{{{{}}}}}", &after[..end]);
        if !found.contains(&token) {
            found.push(token);
        }
        rest = &after[end + 2..];
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new()
            .with_variable("namespace", "App\\Services")
            .with_variable("class", "OrderService")
    }

    #[test]
    fn replaces_spaced_tokens() {
        let out = StubRenderer::new()
            .render("namespace {{ namespace }}; class {{ class }}", &ctx())
            .unwrap();
        assert_eq!(out, "namespace App\\Services; class OrderService");
    }

    #[test]
    fn replaces_unspaced_tokens() {
        let out = StubRenderer::new()
            .render("class {{class}}", &ctx())
            .unwrap();
        assert_eq!(out, "class OrderService");
    }

    #[test]
    fn repeated_tokens_are_all_replaced() {
        let out = StubRenderer::new()
            .render("{{ class }} + {{ class }} + {{class}}", &ctx())
            .unwrap();
        assert_eq!(out, "OrderService + OrderService + OrderService");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let err = StubRenderer::new()
            .render("class {{ class }} uses {{ model }}", &ctx())
            .unwrap_err();
        assert!(err.to_string().contains("{{ model }}"));
    }

    #[test]
    fn unresolved_placeholders_are_listed_once_each() {
        let err = StubRenderer::new()
            .render("{{ model }} {{ model }} {{ upperModel }}", &ctx())
            .unwrap_err();
        let msg = err.to_string();
        assert_eq!(msg.matches("{{ model }}").count(), 1);
        assert!(msg.contains("{{ upperModel }}"));
    }

    #[test]
    fn unclosed_braces_are_not_placeholders() {
        let out = StubRenderer::new()
            .render("if (x) {{ class }} else {{", &ctx())
            .unwrap();
        assert_eq!(out, "if (x) OrderService else {{");
    }

    #[test]
    fn empty_context_with_plain_text_is_fine() {
        let out = StubRenderer::new()
            .render("no placeholders here", &RenderContext::new())
            .unwrap();
        assert_eq!(out, "no placeholders here");
    }
}
