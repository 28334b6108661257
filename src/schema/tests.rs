#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

/// Scriptable backend double used across the schema tests
struct FakeBackend {
    exists: Result<bool, String>,
    names: Result<Vec<String>, String>,
    metadata: Result<Vec<RawColumn>, String>,
}

impl FakeBackend {
    fn with_table(columns: Vec<RawColumn>) -> Self {
        FakeBackend {
            exists: Ok(true),
            names: Ok(columns.iter().map(|c| c.name.clone()).collect()),
            metadata: Ok(columns),
        }
    }

    fn absent() -> Self {
        FakeBackend {
            exists: Ok(false),
            names: Err("not reached".into()),
            metadata: Err("not reached".into()),
        }
    }
}

impl SchemaBackend for FakeBackend {
    fn table_exists(&self, _table: &str) -> Result<bool, crate::error::ScaffoldError> {
        self.exists
            .clone()
            .map_err(|detail| crate::error::ScaffoldError::StorageUnreachable { detail })
    }

    fn column_names(&self, _table: &str) -> Result<Vec<String>, crate::error::ScaffoldError> {
        self.names
            .clone()
            .map_err(|detail| crate::error::ScaffoldError::StorageUnreachable { detail })
    }

    fn describe_columns(
        &self,
        _table: &str,
    ) -> Result<Vec<RawColumn>, crate::error::ScaffoldError> {
        self.metadata
            .clone()
            .map_err(|detail| crate::error::ScaffoldError::StorageUnreachable { detail })
    }
}

fn raw(name: &str, ty: &str, nullable: bool) -> RawColumn {
    RawColumn {
        name: name.into(),
        type_raw: ty.into(),
        nullable,
    }
}

#[test]
fn test_absent_table_yields_empty_model() {
    let backend = FakeBackend::absent();
    let columns = introspect_columns(&backend, "invoices", &[]).unwrap();
    assert!(columns.is_empty());
}

#[test]
fn test_existence_check_failure_degrades_to_empty() {
    let backend = FakeBackend {
        exists: Err("connection refused".into()),
        names: Err("not reached".into()),
        metadata: Err("not reached".into()),
    };
    let columns = introspect_columns(&backend, "invoices", &[]).unwrap();
    assert!(columns.is_empty());
}

#[test]
fn test_listing_failure_after_existence_propagates() {
    let backend = FakeBackend {
        exists: Ok(true),
        names: Err("connection reset".into()),
        metadata: Err("not reached".into()),
    };
    let err = introspect_columns(&backend, "invoices", &[]).unwrap_err();
    assert!(err.to_string().contains("storage backend unreachable"));
}

#[test]
fn test_metadata_failure_degrades_to_names_only() {
    let backend = FakeBackend {
        exists: Ok(true),
        names: Ok(vec!["id".into(), "email".into()]),
        metadata: Err("DESCRIBE unsupported".into()),
    };
    let columns = introspect_columns(&backend, "invoices", &[]).unwrap();
    assert_eq!(columns.len(), 2);
    for col in &columns {
        assert_eq!(col.inferred, ColumnType::Text);
        assert!(!col.nullable);
        assert!(col.max_length.is_none());
    }
}

#[test]
fn test_full_metadata_mapping() {
    let backend = FakeBackend::with_table(vec![
        raw("id", "bigint unsigned", false),
        raw("email", "varchar(255)", false),
        raw("amount", "decimal(10,2)", true),
        raw("paid", "tinyint(1)", false),
    ]);
    let excluded = vec!["id".to_string()];
    let columns = introspect_columns(&backend, "invoices", &excluded).unwrap();

    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].inferred, ColumnType::Integer);
    assert!(columns[0].excluded);

    assert_eq!(columns[1].inferred, ColumnType::Text);
    assert_eq!(columns[1].max_length, Some(255));
    assert!(!columns[1].nullable);
    assert!(!columns[1].excluded);

    assert_eq!(columns[2].inferred, ColumnType::Float);
    assert!(columns[2].nullable);

    assert_eq!(columns[3].inferred, ColumnType::Boolean);
}

#[test]
fn test_no_backend_reports_absent() {
    let backend = NoBackend;
    let columns = introspect_columns(&backend, "anything", &[]).unwrap();
    assert!(columns.is_empty());
}
