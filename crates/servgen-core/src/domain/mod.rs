//! Core domain layer for Servgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, stub lookup, prompting, and rendering concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: A request never changes after `build()`
//!
// Public API - what the world sees
pub mod context;
pub mod error;
pub mod names;
pub mod report;
pub mod request;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use names::{Conventions, QualifiedName};
pub use report::{Artifact, ArtifactKind, GenerationReport};
pub use request::{GenerationRequest, GenerationRequestBuilder, StubKind};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Qualified Name Tests
    // ========================================================================

    #[test]
    fn qualified_name_parses_forward_slashes() {
        let qn = QualifiedName::parse("Billing/Order");
        assert_eq!(qn.segments(), &["Billing", "Order"]);
        assert_eq!(qn.to_string(), "Billing\\Order");
    }

    #[test]
    fn qualified_name_parses_backslashes() {
        let qn = QualifiedName::parse("App\\Models\\Order");
        assert_eq!(qn.segments(), &["App", "Models", "Order"]);
    }

    #[test]
    fn qualified_name_basename_is_last_segment() {
        assert_eq!(QualifiedName::parse("App/Services/OrderService").basename(), "OrderService");
        assert_eq!(QualifiedName::parse("Order").basename(), "Order");
    }

    #[test]
    fn qualified_name_namespace_drops_basename() {
        let qn = QualifiedName::parse("App/Services/Billing/OrderService");
        assert_eq!(qn.namespace(), "App\\Services\\Billing");
    }

    // ========================================================================
    // Conventions Tests
    // ========================================================================

    #[test]
    fn qualify_service_prefixes_root_and_sub_namespace() {
        let conv = Conventions::default();
        let qn = conv.qualify_service("OrderService");
        assert_eq!(qn.to_string(), "App\\Services\\OrderService");
    }

    #[test]
    fn qualify_service_keeps_already_rooted_names() {
        let conv = Conventions::default();
        let qn = conv.qualify_service("App/Services/OrderService");
        assert_eq!(qn.to_string(), "App\\Services\\OrderService");
    }

    #[test]
    fn qualify_service_preserves_subdirectories() {
        let conv = Conventions::default();
        let qn = conv.qualify_service("Billing/OrderService");
        assert_eq!(qn.to_string(), "App\\Services\\Billing\\OrderService");
    }

    #[test]
    fn qualify_model_uses_models_namespace() {
        let conv = Conventions::default();
        assert_eq!(conv.qualify_model("Order").to_string(), "App\\Models\\Order");
    }

    #[test]
    fn resolve_path_maps_root_namespace_onto_source_root() {
        let conv = Conventions::default();
        let qn = conv.qualify_service("Billing/OrderService");
        assert_eq!(
            conv.resolve_path(&qn),
            std::path::PathBuf::from("app/Services/Billing/OrderService.php")
        );
    }

    #[test]
    fn resolve_path_maps_tests_namespace_onto_tests_root() {
        let conv = Conventions::default();
        let qn = conv.qualify_test("OrderServiceTest");
        assert_eq!(
            conv.resolve_path(&qn),
            std::path::PathBuf::from("tests/OrderServiceTest.php")
        );
    }

    #[test]
    fn custom_conventions_change_mapping() {
        let conv = Conventions {
            root_namespace: "Acme".into(),
            source_root: "src".into(),
            extension: "cls".into(),
            ..Conventions::default()
        };
        let qn = conv.qualify_service("OrderService");
        assert_eq!(qn.to_string(), "Acme\\Services\\OrderService");
        assert_eq!(
            conv.resolve_path(&qn),
            std::path::PathBuf::from("src/Services/OrderService.cls")
        );
    }

    // ========================================================================
    // Request Builder Tests
    // ========================================================================

    #[test]
    fn request_builder_basic() {
        let req = GenerationRequest::new("Order").build().unwrap();
        assert_eq!(req.name(), "Order");
        assert!(!req.injects_model());
        assert!(!req.force());
        assert_eq!(req.service_class_input(), "OrderService");
    }

    #[test]
    fn request_trims_name_input() {
        let req = GenerationRequest::new("  Order  ").build().unwrap();
        assert_eq!(req.service_class_input(), "OrderService");
    }

    #[test]
    fn request_rejects_empty_name() {
        assert!(matches!(
            GenerationRequest::new("   ").build(),
            Err(DomainError::EmptyName)
        ));
    }

    #[test]
    fn request_rejects_reserved_name() {
        let err = GenerationRequest::new("class").build().unwrap_err();
        assert!(matches!(err, DomainError::ReservedName { .. }));
    }

    #[test]
    fn reserved_check_is_case_insensitive() {
        assert!(GenerationRequest::new("Class").build().is_err());
        assert!(GenerationRequest::new("FUNCTION").build().is_err());
    }

    #[test]
    fn model_flag_defaults_model_name_to_service_name() {
        let req = GenerationRequest::new("Order")
            .with_model_injection(true)
            .build()
            .unwrap();
        assert!(req.injects_model());
        assert_eq!(req.effective_model_name(), "Order");
    }

    #[test]
    fn explicit_model_name_overrides_default() {
        let req = GenerationRequest::new("Order")
            .with_model_name(Some("Invoice".into()))
            .build()
            .unwrap();
        assert!(req.injects_model());
        assert_eq!(req.effective_model_name(), "Invoice");
    }

    #[test]
    fn model_name_uses_basename_of_nested_input() {
        let req = GenerationRequest::new("Order")
            .with_model_name(Some("Billing/Invoice".into()))
            .build()
            .unwrap();
        assert_eq!(req.effective_model_name(), "Invoice");
    }

    #[test]
    fn nested_service_name_defaults_model_to_basename() {
        let req = GenerationRequest::new("Billing/Order")
            .with_model_injection(true)
            .build()
            .unwrap();
        assert_eq!(req.effective_model_name(), "Order");
        assert_eq!(req.service_class_input(), "Billing/OrderService");
    }

    #[test]
    fn invalid_model_name_is_rejected_at_build() {
        let err = GenerationRequest::new("Order")
            .with_model_name(Some("Ord er!".into()))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidModelName { .. }));
    }

    #[test]
    fn underscores_and_separators_are_valid_model_chars() {
        for name in ["Order_Line", "Billing/Order", "Billing\\Order"] {
            assert!(
                GenerationRequest::new("Order")
                    .with_model_name(Some(name.into()))
                    .build()
                    .is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn stub_kind_follows_injection_flag() {
        let plain = GenerationRequest::new("Order").build().unwrap();
        let with_model = GenerationRequest::new("Order")
            .with_model_injection(true)
            .build()
            .unwrap();
        assert_eq!(plain.stub_kind(), StubKind::Service);
        assert_eq!(with_model.stub_kind(), StubKind::ServiceWithModel);
    }

    // ========================================================================
    // Model Casing Tests
    // ========================================================================

    #[test]
    fn upper_model_upcases_first_character() {
        let req = GenerationRequest::new("order")
            .with_model_injection(true)
            .build()
            .unwrap();
        assert_eq!(req.upper_model_name(), "Order");
    }

    #[test]
    fn lower_model_downcases_everything() {
        let req = GenerationRequest::new("Order")
            .with_model_name(Some("InvoiceLine".into()))
            .build()
            .unwrap();
        assert_eq!(req.lower_model_name(), "invoiceline");
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_stores_variables_in_order() {
        let ctx = RenderContext::new()
            .with_variable("namespace", "App\\Services")
            .with_variable("class", "OrderService");
        assert_eq!(ctx.get("namespace"), Some("App\\Services"));
        assert_eq!(ctx.get("class"), Some("OrderService"));
        assert_eq!(ctx.get("model"), None);
    }
}
