//! # Generation Pipeline
//!
//! Orchestrates one scaffold run: introspect the schema, derive field
//! blocks, then for each requested artifact kind resolve its target, render
//! its template, and persist it — recording a per-kind outcome instead of
//! aborting the run when a single artifact fails.
//!
//! ## Flow
//!
//! ```text
//! EntityName + GenerationOptions
//!     → Introspector + TypeMapper   (column model, or empty fallback)
//!     → FieldEngine                 (substitution blocks)
//!     → per kind: Registry → Renderer → Writer
//!     → route merger                (after the controller's module is known)
//!     → GenerationReport
//! ```
//!
//! Artifact generation is order-insensitive except that route merging
//! happens after the corresponding controller's module is resolved. Each
//! run is transient: no generator state persists between invocations other
//! than the artifacts and route files themselves.

mod generate;
mod substitutions;

pub use generate::{ArtifactStatus, GenerationOptions, GenerationReport, Pipeline};
