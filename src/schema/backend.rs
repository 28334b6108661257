use crate::error::ScaffoldError;

/// Raw per-column metadata as reported by a backend
///
/// `type_raw` carries the backend's own type string (e.g. `varchar(255)`);
/// the type mapper collapses it later. A backend that can only list names
/// returns no metadata at all rather than fabricating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub type_raw: String,
    pub nullable: bool,
}

/// Read-only schema queries the pipeline needs from a storage backend
///
/// Three queries, nothing more: existence, column names, column metadata.
/// All three are synchronous from the caller's perspective; backends that
/// speak async drivers block internally on an owned runtime.
pub trait SchemaBackend {
    /// Does a table with this name exist?
    fn table_exists(&self, table: &str) -> Result<bool, ScaffoldError>;

    /// Column names for an existing table, in definition order
    fn column_names(&self, table: &str) -> Result<Vec<String>, ScaffoldError>;

    /// Per-column metadata for an existing table
    ///
    /// # Errors
    ///
    /// Backends without a metadata query (or dialects that refuse it) return
    /// an error here; the introspector degrades to names-only in that case.
    fn describe_columns(&self, table: &str) -> Result<Vec<RawColumn>, ScaffoldError>;
}

/// Backend used when no database URL is configured
///
/// Reports every table as absent, which routes the pipeline onto the fixed
/// default field set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackend;

impl SchemaBackend for NoBackend {
    fn table_exists(&self, _table: &str) -> Result<bool, ScaffoldError> {
        Ok(false)
    }

    fn column_names(&self, table: &str) -> Result<Vec<String>, ScaffoldError> {
        Err(ScaffoldError::StorageUnreachable {
            detail: format!("no storage backend configured (table '{table}')"),
        })
    }

    fn describe_columns(&self, table: &str) -> Result<Vec<RawColumn>, ScaffoldError> {
        Err(ScaffoldError::StorageUnreachable {
            detail: format!("no storage backend configured (table '{table}')"),
        })
    }
}
