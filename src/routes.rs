//! # Route Registration Merger
//!
//! Appends a rendered route block into a shared, hand-edited
//! route-aggregation file without duplication or corruption. The file is
//! modeled as a sequence of tagged lines — leader comments, imports, body —
//! so the import insertion point is a property of structure rather than of
//! textual scanning. The observable output matches the conventional layout:
//! imports at the top, route blocks appended at the end.
//!
//! The file is owned exclusively by the merger during a write: one read,
//! one reconstruction, one write. There is no cross-process locking; two
//! concurrent invocations can interleave their read-modify-write cycles.
//! That is an accepted limitation for a developer-facing local tool.

use std::path::Path;

use anyhow::Context;

use crate::error::ScaffoldError;

/// Outcome of one merge attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The block (and its import) was inserted
    Inserted,
    /// The entity is already registered; the file was not modified
    AlreadyPresent,
}

/// Marker comment separating hand-written content from generated blocks
pub const ROUTE_MARKER: &str = "// ===== crudforge: generated route registrations =====";

/// Boilerplate for a freshly created web route file
pub fn web_boilerplate() -> String {
    format!(
        "use crate::http::{{Response, Router}};\n\
         \n\
         pub fn home(router: &mut Router) {{\n\
         \x20   router.get(\"/\", |_req| Response::ok(\"home\"));\n\
         }}\n\
         \n\
         {ROUTE_MARKER}\n"
    )
}

/// Boilerplate for a freshly created API route file
pub fn api_boilerplate() -> String {
    format!(
        "use crate::http::{{Response, Router}};\n\
         \n\
         pub fn health(router: &mut Router) {{\n\
         \x20   router.get(\"/health\", |_req| Response::ok(\"ok\"));\n\
         }}\n\
         \n\
         {ROUTE_MARKER}\n"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineTag {
    Blank,
    /// Comments and inner attributes that may legitimately precede imports
    Leader,
    Import,
    Body,
}

fn tag_line(line: &str) -> LineTag {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        LineTag::Blank
    } else if trimmed.starts_with("//") || trimmed.starts_with("#!") {
        LineTag::Leader
    } else if trimmed.starts_with("use ") {
        LineTag::Import
    } else {
        LineTag::Body
    }
}

/// Merge a rendered block into existing route-file text
///
/// Pure text transformation; returns `None` when the entity is already
/// registered (quoted plural-kebab token found anywhere in the file).
///
/// # Errors
///
/// [`ScaffoldError::RouteFileCorrupt`] when an import line appears after the
/// first executable line — insertion position would be ambiguous, so the
/// file is surfaced rather than silently patched.
fn merge_text(
    existing: &str,
    path: &Path,
    dedup_token: &str,
    import_line: &str,
    block: &str,
) -> Result<Option<String>, ScaffoldError> {
    let double_quoted = format!("\"{dedup_token}\"");
    let single_quoted = format!("'{dedup_token}'");
    if existing.contains(&double_quoted) || existing.contains(&single_quoted) {
        return Ok(None);
    }

    let mut lines: Vec<String> = existing.lines().map(str::to_string).collect();

    let first_body = lines.iter().position(|l| tag_line(l) == LineTag::Body);
    if let Some(body_idx) = first_body {
        if lines
            .iter()
            .skip(body_idx + 1)
            .any(|l| tag_line(l) == LineTag::Import)
        {
            return Err(ScaffoldError::RouteFileCorrupt {
                path: path.to_path_buf(),
                detail: "import declaration found after the first executable line".into(),
            });
        }
        lines.insert(body_idx, import_line.to_string());
    } else {
        // nothing executable yet; the import can only go at the end
        lines.push(import_line.to_string());
    }

    // the import was placed above; keep only the block's executable lines
    let body_lines: Vec<&str> = block
        .lines()
        .filter(|l| !matches!(tag_line(l), LineTag::Import | LineTag::Blank))
        .collect();

    while matches!(lines.last(), Some(l) if l.trim().is_empty()) {
        lines.pop();
    }
    lines.push(String::new());
    lines.extend(body_lines.iter().map(|l| l.to_string()));

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(Some(out))
}

/// Merge a rendered route block into the shared aggregation file
///
/// Creates the file from `boilerplate` when missing, then performs the
/// duplicate check, import insertion, and block append as a single
/// read-modify-write cycle.
///
/// # Arguments
///
/// * `path` - Shared route-aggregation file
/// * `boilerplate` - Initial content when the file does not exist yet
/// * `dedup_token` - The entity's plural kebab token (matched quoted)
/// * `import_line` - `use` declaration for the entity's controller
/// * `block` - Rendered route block (its own import lines are stripped)
pub fn merge_route(
    path: &Path,
    boilerplate: &str,
    dedup_token: &str,
    import_line: &str,
    block: &str,
) -> anyhow::Result<MergeOutcome> {
    let existing = if path.exists() {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route file {}", path.display()))?
    } else {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for {}", path.display()))?;
        }
        boilerplate.to_string()
    };

    match merge_text(&existing, path, dedup_token, import_line, block)? {
        Some(updated) => {
            std::fs::write(path, updated)
                .with_context(|| format!("Failed to write route file {}", path.display()))?;
            Ok(MergeOutcome::Inserted)
        }
        None => {
            // the file may not exist yet if boilerplate itself matched;
            // persist it so repeated runs see a stable file
            if !path.exists() {
                std::fs::write(path, existing)
                    .with_context(|| format!("Failed to write route file {}", path.display()))?;
            }
            Ok(MergeOutcome::AlreadyPresent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn p() -> PathBuf {
        PathBuf::from("routes/web.rs")
    }

    const BLOCK: &str = "use crate::http::web::invoice::InvoiceController;\n\n// Invoice routes\npub fn invoice_routes(router: &mut Router) {\n    router.resource(\"invoices\", InvoiceController::handlers());\n}\n";
    const IMPORT: &str = "use crate::http::web::invoice::InvoiceController;";

    #[test]
    fn test_insert_into_boilerplate() {
        let merged = merge_text(&web_boilerplate(), &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = merged.lines().collect();
        // import lands after the existing import, before the first body line
        let import_idx = lines.iter().position(|l| *l == IMPORT).unwrap();
        let body_idx = lines
            .iter()
            .position(|l| l.starts_with("pub fn home"))
            .unwrap();
        assert!(import_idx < body_idx);
        assert!(lines[0].starts_with("use crate::http::"));
        // block body appended at the end, import stripped from it
        assert_eq!(merged.matches(IMPORT).count(), 1);
        assert!(merged.trim_end().ends_with('}'));
        assert!(merged.contains("router.resource(\"invoices\""));
    }

    #[test]
    fn test_duplicate_token_is_already_present() {
        let merged = merge_text(&web_boilerplate(), &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        let second = merge_text(&merged, &p(), "invoices", IMPORT, BLOCK).unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_single_quoted_token_also_matches() {
        let existing = "pub fn x() {}\n// see 'invoices' fixture\n";
        let result = merge_text(existing, &p(), "invoices", IMPORT, BLOCK).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unquoted_token_does_not_match() {
        // bare mention in a comment is not a registration
        let existing = "pub fn x() {}\n// invoices cleanup pending\n";
        let result = merge_text(existing, &p(), "invoices", IMPORT, BLOCK).unwrap();
        assert!(result.is_some());
    }

    #[test]
    fn test_zero_import_file_gets_import_before_first_body_line() {
        let existing = "pub fn home(router: &mut Router) {\n}\n";
        let merged = merge_text(existing, &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = merged.lines().collect();
        assert_eq!(lines[0], IMPORT);
        assert!(lines[1].starts_with("pub fn home"));
    }

    #[test]
    fn test_leading_comments_stay_above_nothing_but_import_goes_below_them() {
        let existing = "//! web routes\n\nuse crate::http::Router;\n\npub fn home() {}\n";
        let merged = merge_text(existing, &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = merged.lines().collect();
        let import_idx = lines.iter().position(|l| *l == IMPORT).unwrap();
        assert!(import_idx > 0);
        assert!(lines[import_idx + 1].starts_with("pub fn home"));
    }

    #[test]
    fn test_import_only_file_appends_import_at_end() {
        let existing = "use crate::http::Router;\n";
        let merged = merge_text(existing, &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        assert!(merged.contains(IMPORT));
        assert!(merged.contains("pub fn invoice_routes"));
    }

    #[test]
    fn test_late_import_is_corrupt() {
        let existing = "pub fn home() {}\nuse crate::late::Import;\n";
        let err = merge_text(existing, &p(), "invoices", IMPORT, BLOCK).unwrap_err();
        assert!(matches!(err, ScaffoldError::RouteFileCorrupt { .. }));
    }

    #[test]
    fn test_block_blank_lines_are_dropped() {
        let merged = merge_text(&web_boilerplate(), &p(), "invoices", IMPORT, BLOCK)
            .unwrap()
            .unwrap();
        // exactly one blank separator precedes the appended block
        assert!(merged.contains("=====\n\n// Invoice routes"));
    }
}
