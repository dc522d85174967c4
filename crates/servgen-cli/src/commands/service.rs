//! Implementation of the `servgen service` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core generator service, and display results.  No business logic lives
//! here.

use tracing::{debug, info, instrument};

use servgen_adapters::{LocalFilesystem, ProjectStubResolver, StdinPrompter, StubRenderer};
use servgen_core::{application::GeneratorService, error::ServgenError};

use crate::{
    cli::{GlobalArgs, ServiceArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `servgen service` command.
///
/// Dispatch sequence:
/// 1. Build the generation request from CLI flags + config
/// 2. Wire up the generator with filesystem-backed adapters
/// 3. Generate (the core handles validation, the model prompt, conflicts)
/// 4. Report every written file, side artifacts first
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: ServiceArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Request: --test can also come from config (generate_test = true).
    let request = servgen_core::domain::GenerationRequest::new(&args.name)
        .with_model_injection(args.model)
        .with_model_name(args.model_name.clone())
        .with_force(args.force)
        .with_test(args.test || config.generator.generate_test)
        .build()
        .map_err(ServgenError::from)?;

    debug!(
        injects_model = request.injects_model(),
        force = request.force(),
        with_test = request.with_test(),
        "Request built"
    );

    // 2. Adapters: real filesystem, project-local stub overrides, stdin prompt.
    let service = build_generator(&config, &global);

    // 3. Generate.
    info!(name = %args.name, "Generation started");
    let report = service.generate(&global.project, &request)?;

    // 4. Side artifacts (models created on confirmation) first, then the
    //    service itself — the order the files were written in.
    for artifact in report.side_artifacts() {
        output.info(&format!(
            "{} [{}] created successfully.",
            artifact.kind,
            artifact.path.display(),
        ))?;
    }

    if let Some(service_artifact) = report.service() {
        output.success(&format!(
            "{} [{}] created successfully.",
            report.summary(),
            service_artifact.path.display(),
        ))?;
    }

    Ok(())
}

/// Wire a `GeneratorService` against the real filesystem.
pub(crate) fn build_generator(config: &AppConfig, global: &GlobalArgs) -> GeneratorService {
    GeneratorService::new(
        config.conventions(),
        Box::new(LocalFilesystem::new()),
        Box::new(ProjectStubResolver::new(
            global.project.clone(),
            Box::new(LocalFilesystem::new()),
        )),
        Box::new(StubRenderer::new()),
        Box::new(StdinPrompter::new()),
    )
}
