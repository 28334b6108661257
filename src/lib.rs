//! # crudforge
//!
//! **crudforge** is a convention-driven CRUD scaffold generator: given an
//! entity name and a small set of flags, it produces a coherent set of
//! source artifacts — controller, service, repository, DTOs, request
//! validators, response formatters, view templates, and route
//! registrations — optionally informed by introspecting an existing
//! database schema.
//!
//! ## Architecture
//!
//! The library is organized into leaf-first modules:
//!
//! - **[`naming`]** - Entity name → twelve naming variants used everywhere else
//! - **[`schema`]** - Storage backend trait, MySQL introspection, type inference
//! - **[`registry`]** - (category, kind) → output path, module path, template id
//! - **[`render`]** - Template loading (override-first) and flat placeholder substitution
//! - **[`fields`]** - Column model → property/extraction/serialization/validation blocks
//! - **[`writer`]** - Idempotent write-if-absent-or-forced file persistence
//! - **[`routes`]** - Route-registration merger over a shared aggregation file
//! - **[`pipeline`]** - Orchestration and the per-artifact result report
//! - **[`cli`]** - Thin clap front end for the `crudforge-gen` binary
//!
//! ## Generation Flow
//!
//! ```text
//! Entity name → Introspector + TypeMapper → column model
//!            → FieldEngine → substitution blocks
//!            → per artifact kind: Registry → Renderer → Writer
//!            → Route Merger (after controller module is known)
//!            → GenerationReport (created | skipped | already_present | failed)
//! ```
//!
//! ## Usage
//!
//! ### CLI
//!
//! ```bash
//! crudforge-gen generate Invoice --api --web --force
//! ```
//!
//! ### Programmatic
//!
//! ```rust,no_run
//! use crudforge::config::GeneratorConfig;
//! use crudforge::pipeline::{GenerationOptions, Pipeline};
//! use crudforge::schema::NoBackend;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GeneratorConfig::default();
//! let pipeline = Pipeline::new(&config, &NoBackend);
//! let report = pipeline.generate("Invoice", &GenerationOptions::default())?;
//! for (kind, status) in &report.artifacts {
//!     println!("{} → {}", kind.key(), status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Template Customization
//!
//! Packaged templates live under `templates/` and are compiled into the
//! binary. A file at `<override_root>/<template_id>` (default
//! `.crudforge/templates/`) takes precedence over the packaged default of
//! the same id. Substitution is flat `{{ key }}` replacement — deliberately
//! not a templating language.

pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod naming;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod routes;
pub mod schema;
pub mod writer;

pub use config::{load_config, resolve_config_path, GeneratorConfig};
pub use error::ScaffoldError;
pub use naming::NameSet;
pub use pipeline::{ArtifactStatus, GenerationOptions, GenerationReport, Pipeline};
pub use registry::{ArtifactKind, ArtifactRegistry, Category, ResolvedTarget};
pub use routes::MergeOutcome;
pub use writer::WriteOutcome;
