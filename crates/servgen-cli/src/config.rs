//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`Conventions`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist when given)
//! 2. `<project>/servgen.toml`
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use servgen_core::domain::Conventions;

/// File name of the project-local configuration.
pub const CONFIG_FILE_NAME: &str = "servgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Naming conventions and path mapping for generated classes.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub root_namespace: String,
    pub services_namespace: String,
    pub models_namespace: String,
    pub tests_namespace: String,
    pub source_root: PathBuf,
    pub tests_root: PathBuf,
    pub extension: String,
    /// Generate a matching test for every service (same as passing --test).
    pub generate_test: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let conventions = Conventions::default();
        Self {
            root_namespace: conventions.root_namespace,
            services_namespace: conventions.services_namespace,
            models_namespace: conventions.models_namespace,
            tests_namespace: conventions.tests_namespace,
            source_root: conventions.source_root,
            tests_root: conventions.tests_root,
            extension: conventions.extension,
            generate_test: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (an error if
    /// it does not exist); otherwise `<project>/servgen.toml` is used when
    /// present, and the built-in defaults when not.
    pub fn load(config_file: Option<&PathBuf>, project_root: &Path) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => explicit.clone(),
            None => {
                let local = Self::config_path(project_root);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("parsing config file '{}'", path.display()))
    }

    /// Path of the project-local configuration file.
    pub fn config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// The naming conventions this configuration describes.
    pub fn conventions(&self) -> Conventions {
        Conventions {
            root_namespace: self.generator.root_namespace.clone(),
            services_namespace: self.generator.services_namespace.clone(),
            models_namespace: self.generator.models_namespace.clone(),
            tests_namespace: self.generator.tests_namespace.clone(),
            source_root: self.generator.source_root.clone(),
            tests_root: self.generator.tests_root.clone(),
            extension: self.generator.extension.clone(),
        }
    }
}
