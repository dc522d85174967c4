//! Implementation of the `servgen model` command.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, ModelArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `servgen model` command.
///
/// Same wiring as `servgen service`, delegating to the model use case.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: ModelArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::service::build_generator(&config, &global);

    info!(name = %args.name, "Model generation started");
    let path = service.generate_model(&global.project, &args.name, args.force)?;

    output.success(&format!("Model [{}] created successfully.", path.display()))?;
    Ok(())
}
