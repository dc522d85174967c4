//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "servgen",
    bin_name = "servgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate service classes from stub templates",
    long_about = "Servgen generates service-layer class files into a project's \
                  source tree, optionally wiring in a data model reference and \
                  creating the model when it does not exist yet.",
    after_help = "EXAMPLES:\n\
        \x20 servgen service Order\n\
        \x20 servgen service Order --model\n\
        \x20 servgen service Order --model-name Invoice --force\n\
        \x20 servgen model Invoice\n\
        \x20 servgen completions bash > /usr/share/bash-completion/completions/servgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a service class from a stub.
    #[command(
        visible_alias = "s",
        about = "Generate a new service class",
        after_help = "EXAMPLES:\n\
            \x20 servgen service Order\n\
            \x20 servgen service Billing/Order -M\n\
            \x20 servgen service Order -N Invoice -F"
    )]
    Service(ServiceArgs),

    /// Generate a model class from a stub.
    #[command(
        visible_alias = "m",
        about = "Generate a new model class",
        after_help = "EXAMPLES:\n\
            \x20 servgen model Invoice\n\
            \x20 servgen model Billing/Invoice --force"
    )]
    Model(ModelArgs),

    /// Initialise a Servgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 servgen init              # servgen.toml in the project root\n\
            \x20 servgen init --force      # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 servgen completions bash > ~/.local/share/bash-completion/completions/servgen\n\
            \x20 servgen completions zsh  > ~/.zfunc/_servgen\n\
            \x20 servgen completions fish > ~/.config/fish/completions/servgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── service ───────────────────────────────────────────────────────────────────

/// Arguments for `servgen service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Base name of the service class.  `Service` is appended automatically;
    /// a path like `Billing/Order` nests the class in a sub-namespace.
    #[arg(value_name = "NAME", help = "Name of the service class to create")]
    pub name: String,

    /// Inject a model named after the service itself.
    #[arg(
        short = 'M',
        long = "model",
        help = "Inject a model named after the service"
    )]
    pub model: bool,

    /// Inject a specific model, overriding the `--model` default.
    #[arg(
        short = 'N',
        long = "model-name",
        value_name = "NAME",
        help = "Name of the model to inject"
    )]
    pub model_name: Option<String>,

    /// Overwrite an existing file with the same name.
    #[arg(short = 'F', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Also generate a matching test class.
    #[arg(short = 'T', long = "test", help = "Also generate a matching test")]
    pub test: bool,
}

// ── model ─────────────────────────────────────────────────────────────────────

/// Arguments for `servgen model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Name of the model class.
    #[arg(value_name = "NAME", help = "Name of the model class to create")]
    pub name: String,

    /// Overwrite an existing file with the same name.
    #[arg(short = 'F', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `servgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `servgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_service_command() {
        let cli = Cli::parse_from(["servgen", "service", "Order"]);
        assert!(matches!(cli.command, Commands::Service(_)));
    }

    #[test]
    fn service_flags_parse() {
        let cli = Cli::parse_from(["servgen", "service", "Order", "-M", "-F", "-T"]);
        if let Commands::Service(args) = cli.command {
            assert!(args.model);
            assert!(args.force);
            assert!(args.test);
            assert_eq!(args.model_name, None);
        } else {
            panic!("expected Service command");
        }
    }

    #[test]
    fn model_name_option_parses_short_and_long() {
        for argv in [
            vec!["servgen", "service", "Order", "-N", "Invoice"],
            vec!["servgen", "service", "Order", "--model-name", "Invoice"],
        ] {
            let cli = Cli::parse_from(argv);
            if let Commands::Service(args) = cli.command {
                assert_eq!(args.model_name.as_deref(), Some("Invoice"));
            } else {
                panic!("expected Service command");
            }
        }
    }

    #[test]
    fn service_alias() {
        let cli = Cli::parse_from(["servgen", "s", "Order"]);
        assert!(matches!(cli.command, Commands::Service(_)));
    }

    #[test]
    fn model_alias() {
        let cli = Cli::parse_from(["servgen", "m", "Invoice"]);
        assert!(matches!(cli.command, Commands::Model(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["servgen", "--quiet", "--verbose", "service", "X"]);
        assert!(result.is_err());
    }
}
