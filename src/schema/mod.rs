//! # Schema Introspection
//!
//! Turns a live database table into the normalized column model the
//! field-derivation engine consumes. The introspector never aborts a run
//! because a table is missing: "no schema" is a valid state that routes
//! downstream components onto their fixed default field set.
//!
//! ## Degradation ladder
//!
//! 1. Existence check fails or reports absent → empty column list.
//! 2. Column-name listing fails after a successful existence check → the
//!    failure propagates (the backend was reachable a moment ago, so
//!    something is genuinely wrong).
//! 3. Metadata query fails (e.g. the dialect lacks one) → names only:
//!    every column becomes non-nullable text with no size.

mod backend;
mod column;
mod mysql;
#[cfg(test)]
mod tests;

pub use backend::{NoBackend, RawColumn, SchemaBackend};
pub use column::{map_type, parse_max_length, ColumnDescriptor, ColumnType};
pub use mysql::MySqlBackend;

use crate::error::ScaffoldError;
use tracing::warn;

/// Introspect a table into normalized column descriptors
///
/// `excluded` marks descriptors from the configured exclusion list; the
/// columns stay in the model (serialized-field lists may still want them)
/// and downstream consumers filter on the flag.
///
/// # Errors
///
/// Only a column-listing failure after a successful existence check
/// propagates; see the module docs for the full degradation ladder.
pub fn introspect_columns(
    backend: &dyn SchemaBackend,
    table: &str,
    excluded: &[String],
) -> Result<Vec<ColumnDescriptor>, ScaffoldError> {
    match backend.table_exists(table) {
        Ok(true) => {}
        Ok(false) => return Ok(Vec::new()),
        Err(err) => {
            warn!(table, %err, "existence check failed; using default field set");
            return Ok(Vec::new());
        }
    }

    let names = backend.column_names(table)?;

    let metadata = match backend.describe_columns(table) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(table, %err, "metadata fetch failed; degrading to names only");
            Vec::new()
        }
    };

    Ok(names
        .into_iter()
        .map(|name| {
            let raw = metadata.iter().find(|c| c.name == name);
            let (inferred, nullable, max_length) = match raw {
                Some(c) => (
                    map_type(&c.type_raw),
                    c.nullable,
                    parse_max_length(&c.type_raw),
                ),
                None => (ColumnType::Text, false, None),
            };
            let is_excluded = excluded.iter().any(|e| e == &name);
            ColumnDescriptor {
                name,
                inferred,
                nullable,
                max_length,
                excluded: is_excluded,
            }
        })
        .collect())
}
