//! Servgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Servgen
//! class-file generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          servgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GeneratorService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StubResolver, Renderer,    │
//! │              Prompter)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    servgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ProjectStubResolver,  │
//! │      StubRenderer, StdinPrompter)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (GenerationRequest, QualifiedName,      │
//! │     Conventions, RenderContext)         │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use servgen_core::{
//!     application::GeneratorService,
//!     domain::{Conventions, GenerationRequest},
//! };
//!
//! // 1. Build the request from parsed CLI input
//! let request = GenerationRequest::new("Order")
//!     .with_model_injection(true)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GeneratorService::new(
//!     Conventions::default(),
//!     filesystem,
//!     stubs,
//!     renderer,
//!     prompter,
//! );
//! let report = service.generate("/project/root", &request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService,
        ports::{Filesystem, Prompter, StubResolver, TemplateRenderer},
    };
    pub use crate::domain::{
        Artifact, Conventions, GenerationReport, GenerationRequest, QualifiedName, RenderContext,
        StubKind,
    };
    pub use crate::error::{ServgenError, ServgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
