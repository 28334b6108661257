use sqlx::mysql::MySqlPool;
use sqlx::Row;

use crate::error::ScaffoldError;

use super::backend::{RawColumn, SchemaBackend};

/// MySQL-backed schema introspection
///
/// Owns a dedicated tokio runtime and blocks on each one-shot query, so the
/// rest of the pipeline stays synchronous. Connection failures surface at
/// construction; query failures surface as [`ScaffoldError::StorageUnreachable`]
/// and are degraded or propagated by the introspector according to where
/// they occur.
pub struct MySqlBackend {
    runtime: tokio::runtime::Runtime,
    pool: MySqlPool,
}

impl MySqlBackend {
    /// Connect to the database named in the URL
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be built or the pool cannot
    /// connect.
    pub fn connect(url: &str) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let pool = runtime.block_on(MySqlPool::connect(url))?;
        Ok(MySqlBackend { runtime, pool })
    }

    fn storage_err(context: &str, err: sqlx::Error) -> ScaffoldError {
        ScaffoldError::StorageUnreachable {
            detail: format!("{context}: {err}"),
        }
    }
}

impl SchemaBackend for MySqlBackend {
    fn table_exists(&self, table: &str) -> Result<bool, ScaffoldError> {
        let count: i64 = self
            .runtime
            .block_on(
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM information_schema.tables \
                     WHERE table_schema = DATABASE() AND table_name = ?",
                )
                .bind(table)
                .fetch_one(&self.pool),
            )
            .map_err(|e| Self::storage_err("existence check failed", e))?;
        Ok(count > 0)
    }

    fn column_names(&self, table: &str) -> Result<Vec<String>, ScaffoldError> {
        let rows = self
            .runtime
            .block_on(
                sqlx::query(
                    "SELECT column_name FROM information_schema.columns \
                     WHERE table_schema = DATABASE() AND table_name = ? \
                     ORDER BY ordinal_position",
                )
                .bind(table)
                .fetch_all(&self.pool),
            )
            .map_err(|e| Self::storage_err("column listing failed", e))?;
        rows.iter()
            .map(|row| {
                row.try_get::<String, _>(0)
                    .map_err(|e| Self::storage_err("column listing failed", e))
            })
            .collect()
    }

    fn describe_columns(&self, table: &str) -> Result<Vec<RawColumn>, ScaffoldError> {
        // SHOW COLUMNS does not accept bind parameters; the table identifier
        // comes from NameSet derivation (snake case words only), never from
        // raw user input.
        let query = format!("SHOW COLUMNS FROM `{table}`");
        let rows = self
            .runtime
            .block_on(sqlx::query(&query).fetch_all(&self.pool))
            .map_err(|e| Self::storage_err("describe failed", e))?;
        rows.iter()
            .map(|row| {
                let name: String = row
                    .try_get("Field")
                    .map_err(|e| Self::storage_err("describe failed", e))?;
                let type_raw: String = row
                    .try_get("Type")
                    .map_err(|e| Self::storage_err("describe failed", e))?;
                let null: String = row
                    .try_get("Null")
                    .map_err(|e| Self::storage_err("describe failed", e))?;
                Ok(RawColumn {
                    name,
                    type_raw,
                    nullable: null.eq_ignore_ascii_case("YES"),
                })
            })
            .collect()
    }
}
