//! # Template Renderer
//!
//! Loads a template by id and substitutes a flat placeholder map. This is
//! deliberately not a templating language: no expressions, no conditionals,
//! no loops — every occurrence of each known key in `{{ key }}` or `{{key}}`
//! form is replaced verbatim, and unknown placeholders pass through
//! untouched so templates may carry literal text resembling placeholder
//! syntax for other systems.
//!
//! Source resolution checks the user override root first (a file at
//! `<override_root>/<template_id>`), then the packaged defaults compiled
//! into the binary. The renderer is agnostic to artifact kind; it knows
//! nothing about what it is rendering.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::error::ScaffoldError;

/// Placeholder-key → value map assembled by the pipeline
pub type SubstitutionMap = BTreeMap<String, String>;

/// Packaged default templates, keyed by template id
///
/// The id doubles as the override-relative path, so a user override for
/// `api/controller.rs.txt` lives at `<override_root>/api/controller.rs.txt`.
const PACKAGED: &[(&str, &str)] = &[
    (
        "common/service.rs.txt",
        include_str!("../templates/common/service.rs.txt"),
    ),
    (
        "common/repository.rs.txt",
        include_str!("../templates/common/repository.rs.txt"),
    ),
    (
        "common/contract.rs.txt",
        include_str!("../templates/common/contract.rs.txt"),
    ),
    (
        "common/dto_create.rs.txt",
        include_str!("../templates/common/dto_create.rs.txt"),
    ),
    (
        "common/dto_update.rs.txt",
        include_str!("../templates/common/dto_update.rs.txt"),
    ),
    (
        "common/dto_filter.rs.txt",
        include_str!("../templates/common/dto_filter.rs.txt"),
    ),
    (
        "common/error.rs.txt",
        include_str!("../templates/common/error.rs.txt"),
    ),
    (
        "api/controller.rs.txt",
        include_str!("../templates/api/controller.rs.txt"),
    ),
    (
        "api/store_request.rs.txt",
        include_str!("../templates/api/store_request.rs.txt"),
    ),
    (
        "api/update_request.rs.txt",
        include_str!("../templates/api/update_request.rs.txt"),
    ),
    (
        "api/resource.rs.txt",
        include_str!("../templates/api/resource.rs.txt"),
    ),
    (
        "api/collection.rs.txt",
        include_str!("../templates/api/collection.rs.txt"),
    ),
    (
        "web/controller.rs.txt",
        include_str!("../templates/web/controller.rs.txt"),
    ),
    (
        "web/store_request.rs.txt",
        include_str!("../templates/web/store_request.rs.txt"),
    ),
    (
        "web/update_request.rs.txt",
        include_str!("../templates/web/update_request.rs.txt"),
    ),
    (
        "web/view_index.html.txt",
        include_str!("../templates/web/view_index.html.txt"),
    ),
    (
        "web/view_create.html.txt",
        include_str!("../templates/web/view_create.html.txt"),
    ),
    (
        "web/view_edit.html.txt",
        include_str!("../templates/web/view_edit.html.txt"),
    ),
    (
        "web/view_show.html.txt",
        include_str!("../templates/web/view_show.html.txt"),
    ),
    (
        "routes/api.rs.txt",
        include_str!("../templates/routes/api.rs.txt"),
    ),
    (
        "routes/web.rs.txt",
        include_str!("../templates/routes/web.rs.txt"),
    ),
];

/// Ids of every packaged default template
pub fn packaged_template_ids() -> impl Iterator<Item = &'static str> {
    PACKAGED.iter().map(|(name, _)| *name)
}

/// Look up a packaged default template by id
pub fn packaged_template(id: &str) -> Option<&'static str> {
    PACKAGED
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, body)| *body)
}

/// Load a template source: user override first, packaged default otherwise
///
/// # Errors
///
/// [`ScaffoldError::TemplateNotFound`] when neither source exists; an
/// override that exists but cannot be read is an I/O error, not a fallback.
pub fn load_template(override_root: &Path, id: &str) -> anyhow::Result<String> {
    let override_path = override_root.join(id);
    if override_path.exists() {
        debug!(id, path = %override_path.display(), "using template override");
        return std::fs::read_to_string(&override_path)
            .with_context(|| format!("Failed to read template override: {}", override_path.display()));
    }
    match packaged_template(id) {
        Some(body) => Ok(body.to_string()),
        None => Err(ScaffoldError::TemplateNotFound { id: id.to_string() }.into()),
    }
}

/// Substitute every known placeholder in the template body
///
/// Both the spaced `{{ key }}` and unspaced `{{key}}` bracket forms are
/// replaced. Keys are processed in map order; keys are unique so ordering
/// cannot change the result.
pub fn substitute(body: &str, substitutions: &SubstitutionMap) -> String {
    let mut out = body.to_string();
    for (key, value) in substitutions {
        let spaced = format!("{{{{ {key} }}}}");
        let unspaced = format!("{{{{{key}}}}}");
        out = out.replace(&spaced, value);
        out = out.replace(&unspaced, value);
    }
    out
}

/// Load and substitute in one step
pub fn render(
    override_root: &Path,
    id: &str,
    substitutions: &SubstitutionMap,
) -> anyhow::Result<String> {
    let body = load_template(override_root, id)?;
    Ok(substitute(&body, substitutions))
}
