use std::fmt;
use std::path::PathBuf;

/// Typed failures surfaced by the generation pipeline
///
/// Everything else (I/O errors, config parse errors) travels as
/// `anyhow::Error` with context attached at the call site.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Neither a user override nor a packaged default exists for a template id
    TemplateNotFound {
        /// The template id that failed to resolve (e.g. `api/controller.rs.txt`)
        id: String,
    },
    /// A single-file target was requested for an artifact kind that has none
    ///
    /// Views and route registrations are produced by dedicated paths in the
    /// pipeline; asking the registry to resolve them is a programming error,
    /// not a user-facing failure mode.
    UnsupportedArtifact {
        /// Display name of the offending kind
        kind: String,
    },
    /// The storage backend failed after the initial existence check
    ///
    /// Failures during the existence check itself degrade to the empty-schema
    /// fallback and never raise this variant.
    StorageUnreachable {
        /// Backend-reported detail
        detail: String,
    },
    /// An existing route file violates the expected layout
    ///
    /// Import lines must form a contiguous block at the top of the file; a
    /// `use` declaration after the first executable line makes safe insertion
    /// impossible and is surfaced rather than silently patched.
    RouteFileCorrupt {
        /// The offending route file
        path: PathBuf,
        /// What the merger found
        detail: String,
    },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::TemplateNotFound { id } => {
                write!(
                    f,
                    "template not found: no override or packaged default for '{id}'"
                )
            }
            ScaffoldError::UnsupportedArtifact { kind } => {
                write!(f, "unsupported artifact kind: {kind} has no single-file target")
            }
            ScaffoldError::StorageUnreachable { detail } => {
                write!(f, "storage backend unreachable: {detail}")
            }
            ScaffoldError::RouteFileCorrupt { path, detail } => {
                write!(f, "route file {} is malformed: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}
