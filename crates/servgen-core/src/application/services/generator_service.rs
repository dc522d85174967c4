//! Generator Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the request (reserved name, model charset)
//! 2. Ensure the referenced model exists (optional, interactive)
//! 3. Resolve the stub variant and render it
//! 4. Check for an existing output file (abort unless forced)
//! 5. Write the artifact (plus an optional matching test)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompter, StubResolver, TemplateRenderer},
    },
    domain::{
        ArtifactKind, Conventions, DomainValidator, GenerationReport, GenerationRequest,
        QualifiedName, RenderContext, StubKind,
    },
    error::ServgenResult,
};

/// Main generation service.
///
/// Orchestrates validation, model ensuring, stub resolution, rendering, and
/// writing. All collaborators are injected; the service itself performs no
/// I/O beyond the ports.
pub struct GeneratorService {
    conventions: Conventions,
    filesystem: Box<dyn Filesystem>,
    stubs: Box<dyn StubResolver>,
    renderer: Box<dyn TemplateRenderer>,
    prompter: Box<dyn Prompter>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(
        conventions: Conventions,
        filesystem: Box<dyn Filesystem>,
        stubs: Box<dyn StubResolver>,
        renderer: Box<dyn TemplateRenderer>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            conventions,
            filesystem,
            stubs,
            renderer,
            prompter,
        }
    }

    /// Generate a service class (the `make service` use case).
    ///
    /// `project_root` anchors every path decision for this invocation; paths
    /// in the returned report are relative to it.
    #[instrument(skip_all, fields(name = %request.name(), root = %project_root.as_ref().display()))]
    pub fn generate(
        &self,
        project_root: impl AsRef<Path>,
        request: &GenerationRequest,
    ) -> ServgenResult<GenerationReport> {
        let project_root = project_root.as_ref();
        let mut report = GenerationReport::default();

        // 1. Validate the raw input before touching anything.
        request.validate()?;

        // 2. Ensure the referenced model exists (may write a model file).
        if request.injects_model() {
            self.ensure_model(project_root, request, &mut report)?;
        }

        // 3. Resolve names: qualified class, namespace, output path.
        let qualified = self
            .conventions
            .qualify_service(&request.service_class_input());
        let relative_path = self.conventions.resolve_path(&qualified);
        debug!(class = %qualified, path = %relative_path.display(), "Service name resolved");

        // 4. Resolve the stub variant and render.
        let stub = self.stubs.resolve(request.stub_kind())?;
        let context = self.service_context(&qualified, request);
        let content = self.renderer.render(&stub, &context)?;

        // 5. Refuse to overwrite unless forced, then write.
        self.write_artifact(
            project_root,
            &relative_path,
            &content,
            ArtifactKind::Service,
            request.force(),
            &mut report,
        )?;

        // 6. Optional matching test.
        if request.with_test() {
            self.generate_test(project_root, &qualified, request.force(), &mut report)?;
        }

        info!(path = %relative_path.display(), "Generation completed");
        Ok(report)
    }

    /// Generate a model class (the `make model` use case, also the
    /// delegation target when a missing model is confirmed).
    #[instrument(skip_all, fields(name = %name))]
    pub fn generate_model(
        &self,
        project_root: impl AsRef<Path>,
        name: &str,
        force: bool,
    ) -> ServgenResult<PathBuf> {
        DomainValidator::validate_service_name(name)?;
        DomainValidator::validate_model_name(name.trim())?;

        let qualified = self.conventions.qualify_model(name);
        let mut report = GenerationReport::default();
        self.write_model(project_root.as_ref(), &qualified, force, &mut report)?;

        // write_model pushed exactly one artifact
        Ok(report.artifacts.remove(0).path)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Probe for the referenced model's source file; if absent, offer to
    /// generate it (default answer: yes). Declining is not an error — the
    /// service is generated with a dangling reference.
    fn ensure_model(
        &self,
        project_root: &Path,
        request: &GenerationRequest,
        report: &mut GenerationReport,
    ) -> ServgenResult<()> {
        let model = self.conventions.qualify_model(request.effective_model_name());
        let model_path = self.conventions.resolve_path(&model);

        if self.filesystem.exists(&project_root.join(&model_path)) {
            debug!(model = %model, "Model already exists");
            return Ok(());
        }

        let question = format!("A {model} model does not exist. Do you want to generate it?");
        if self.prompter.confirm(&question, true)? {
            self.write_model(project_root, &model, false, report)?;
            info!(model = %model, "Model generated");
        } else {
            debug!(model = %model, "Model generation declined");
        }

        Ok(())
    }

    /// Render and write a model class file.
    fn write_model(
        &self,
        project_root: &Path,
        qualified: &QualifiedName,
        force: bool,
        report: &mut GenerationReport,
    ) -> ServgenResult<()> {
        let stub = self.stubs.resolve(StubKind::Model)?;
        let context = RenderContext::new()
            .with_variable("namespace", qualified.namespace())
            .with_variable("class", qualified.basename());
        let content = self.renderer.render(&stub, &context)?;

        let relative_path = self.conventions.resolve_path(qualified);
        self.write_artifact(
            project_root,
            &relative_path,
            &content,
            ArtifactKind::Model,
            force,
            report,
        )
    }

    /// Render and write the matching test class.
    fn generate_test(
        &self,
        project_root: &Path,
        service: &QualifiedName,
        force: bool,
        report: &mut GenerationReport,
    ) -> ServgenResult<()> {
        let test = self
            .conventions
            .qualify_test(&format!("{}Test", service.basename()));
        let stub = self.stubs.resolve(StubKind::Test)?;
        let context = RenderContext::new()
            .with_variable("namespace", test.namespace())
            .with_variable("class", test.basename());
        let content = self.renderer.render(&stub, &context)?;

        let relative_path = self.conventions.resolve_path(&test);
        self.write_artifact(
            project_root,
            &relative_path,
            &content,
            ArtifactKind::Test,
            force,
            report,
        )
    }

    /// The "already exists" check plus the single write, with parent
    /// directories created as needed.
    fn write_artifact(
        &self,
        project_root: &Path,
        relative_path: &Path,
        content: &str,
        kind: ArtifactKind,
        force: bool,
        report: &mut GenerationReport,
    ) -> ServgenResult<()> {
        let full_path = project_root.join(relative_path);

        if !force && self.filesystem.exists(&full_path) {
            return Err(ApplicationError::AlreadyExists {
                kind: kind.to_string(),
                path: relative_path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = full_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&full_path, content)?;

        report.push(kind, relative_path.to_path_buf());
        Ok(())
    }

    /// Build the substitution context for the service stub: the two generic
    /// variables always, the three model variables when injecting.
    fn service_context(
        &self,
        qualified: &QualifiedName,
        request: &GenerationRequest,
    ) -> RenderContext {
        let mut context = RenderContext::new()
            .with_variable("namespace", qualified.namespace())
            .with_variable("class", qualified.basename());

        if request.injects_model() {
            let model = self.conventions.qualify_model(request.effective_model_name());
            context = context
                .with_variable("model", model.to_string())
                .with_variable("upperModel", request.upper_model_name())
                .with_variable("lowerModel", request.lower_model_name());
        }

        context
    }
}
