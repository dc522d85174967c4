//! The generation request value object.
//!
//! A [`GenerationRequest`] captures one CLI invocation: the raw name input
//! and the three generation flags, plus the explicit test toggle. It is
//! immutable once built; everything else the workflow needs (class input,
//! effective model name, casings, stub variant) is derived on demand.

use crate::domain::error::DomainError;
use crate::domain::names::upper_first;
use crate::domain::validation::DomainValidator;

/// Which bundled stub a generation step renders.
///
/// Exactly one of `Service` / `ServiceWithModel` is used per invocation,
/// chosen deterministically by whether any model flag was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubKind {
    Service,
    ServiceWithModel,
    Model,
    Test,
}

impl StubKind {
    /// File name of this stub, identical for the bundled copy and the
    /// project-local override.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Service => "service.stub",
            Self::ServiceWithModel => "service.model.stub",
            Self::Model => "model.stub",
            Self::Test => "test.stub",
        }
    }
}

/// One service-generation invocation, parsed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    inject_model: bool,
    model_name: Option<String>,
    force: bool,
    with_test: bool,
}

impl GenerationRequest {
    /// Start building a request for the given raw name input.
    pub fn new(name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            name: name.into(),
            inject_model: false,
            model_name: None,
            force: false,
            with_test: false,
        }
    }

    /// The trimmed raw name input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any model flag was supplied.
    pub fn injects_model(&self) -> bool {
        self.inject_model || self.model_name.is_some()
    }

    /// Whether the existing output may be overwritten.
    pub fn force(&self) -> bool {
        self.force
    }

    /// Whether a matching test file should also be generated.
    pub fn with_test(&self) -> bool {
        self.with_test
    }

    /// The name input tagged with the `Service` suffix, directories kept.
    pub fn service_class_input(&self) -> String {
        format!("{}Service", self.name)
    }

    /// The model name to inject: basename of the explicit model name if
    /// given, otherwise basename of the service name input.
    pub fn effective_model_name(&self) -> &str {
        let source = self
            .model_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name);
        basename(source)
    }

    /// Model name with its first character upper-cased.
    pub fn upper_model_name(&self) -> String {
        upper_first(self.effective_model_name())
    }

    /// Model name fully lower-cased.
    pub fn lower_model_name(&self) -> String {
        self.effective_model_name().to_lowercase()
    }

    /// The stub variant this request renders.
    pub fn stub_kind(&self) -> StubKind {
        if self.injects_model() {
            StubKind::ServiceWithModel
        } else {
            StubKind::Service
        }
    }

    /// Re-run the build-time validation.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_service_name(&self.name)?;
        if self.injects_model() {
            DomainValidator::validate_model_name(self.effective_model_name())?;
        }
        Ok(())
    }
}

/// Builder for [`GenerationRequest`].
///
/// `build()` trims the name and runs all input validation, so a constructed
/// request is always well-formed.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    name: String,
    inject_model: bool,
    model_name: Option<String>,
    force: bool,
    with_test: bool,
}

impl GenerationRequestBuilder {
    pub fn with_model_injection(mut self, inject: bool) -> Self {
        self.inject_model = inject;
        self
    }

    pub fn with_model_name(mut self, model_name: Option<String>) -> Self {
        self.model_name = model_name;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_test(mut self, with_test: bool) -> Self {
        self.with_test = with_test;
        self
    }

    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let request = GenerationRequest {
            name: self.name.trim().to_string(),
            inject_model: self.inject_model,
            model_name: self.model_name,
            force: self.force,
            with_test: self.with_test,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Last segment of a `/`- or `\`-separated name.
fn basename(input: &str) -> &str {
    input
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input)
}
