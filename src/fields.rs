//! # Field-Derivation Engine
//!
//! Consumes the normalized column model and synthesizes the per-artifact
//! text blocks that templates splice in: property declarations, extraction
//! expressions, serialization expressions, validation rule tuples, and the
//! repository's search/sortable field lists.
//!
//! When no schema is available (empty column list) every block falls back
//! to a fixed two-field default — `name: required string`,
//! `description: nullable string` — reproduced here exactly, since that is
//! the only generation path exercised when no storage backend is reachable.

use crate::schema::{ColumnDescriptor, ColumnType};

/// Which DTO/request flavor a block is derived for
///
/// `Update` carries partial-update semantics: every field is optional
/// regardless of schema nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtoVariant {
    Create,
    Update,
}

/// Block synthesizer over one entity's column model
pub struct FieldEngine<'a> {
    columns: &'a [ColumnDescriptor],
    table: &'a str,
    searchable: &'a [String],
    hidden: &'a [String],
}

impl<'a> FieldEngine<'a> {
    pub fn new(
        columns: &'a [ColumnDescriptor],
        table: &'a str,
        searchable: &'a [String],
        hidden: &'a [String],
    ) -> Self {
        FieldEngine {
            columns,
            table,
            searchable,
            hidden,
        }
    }

    fn included(&self) -> impl Iterator<Item = &'a ColumnDescriptor> {
        self.columns.iter().filter(|c| !c.excluded)
    }

    /// Struct field declarations, one line per column
    ///
    /// Nullable columns (and every column on the update variant) get an
    /// `Option` wrapper; required create fields carry the bare type so the
    /// caller must supply them.
    pub fn property_block(&self, variant: DtoVariant) -> String {
        if self.columns.is_empty() {
            return match variant {
                DtoVariant::Create => {
                    "    pub name: String,\n    pub description: Option<String>,".to_string()
                }
                DtoVariant::Update => {
                    "    pub name: Option<String>,\n    pub description: Option<String>,"
                        .to_string()
                }
            };
        }
        self.included()
            .map(|col| {
                let ty = col.inferred.rust_type();
                let optional = col.nullable || variant == DtoVariant::Update;
                if optional {
                    format!("    pub {}: Option<{ty}>,", col.name)
                } else {
                    format!("    pub {}: {ty},", col.name)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Expressions reading each field out of an input `serde_json` map
    ///
    /// Required create fields fall back to the column's canonical default
    /// when the key is absent; optional fields stay `Option`.
    pub fn extraction_block(&self, variant: DtoVariant) -> String {
        if self.columns.is_empty() {
            let name_line = match variant {
                DtoVariant::Create => {
                    "            name: map.get(\"name\").and_then(Value::as_str).unwrap_or_default().to_string(),"
                }
                DtoVariant::Update => {
                    "            name: map.get(\"name\").and_then(Value::as_str).map(str::to_string),"
                }
            };
            return format!(
                "{name_line}\n            description: map.get(\"description\").and_then(Value::as_str).map(str::to_string),"
            );
        }
        self.included()
            .map(|col| extraction_line(col, variant))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Expressions reading each field back out of the constructed object
    pub fn serialization_block(&self) -> String {
        if self.columns.is_empty() {
            return "            \"name\": self.name,\n            \"description\": self.description,"
                .to_string();
        }
        self.included()
            .map(|col| format!("            \"{0}\": self.{0},", col.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Validation rule tuples, one `("column", "rule|rule|...")` line each
    pub fn validation_block(&self, variant: DtoVariant) -> String {
        if self.columns.is_empty() {
            return match variant {
                DtoVariant::Create => {
                    "            (\"name\", \"required|string|max:255\"),\n            (\"description\", \"nullable|string\"),"
                        .to_string()
                }
                DtoVariant::Update => {
                    "            (\"name\", \"sometimes|string|max:255\"),\n            (\"description\", \"sometimes|string\"),"
                        .to_string()
                }
            };
        }
        self.included()
            .map(|col| {
                format!(
                    "            (\"{}\", \"{}\"),",
                    col.name,
                    self.rules_for(col, variant)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pipe-joined rule list for one column
    fn rules_for(&self, col: &ColumnDescriptor, variant: DtoVariant) -> String {
        let mut rules: Vec<String> = Vec::new();
        match variant {
            DtoVariant::Create if !col.nullable => rules.push("required".into()),
            _ => rules.push("sometimes".into()),
        }
        rules.push(col.inferred.rule().into());
        if col.inferred == ColumnType::Text {
            if let Some(max) = col.max_length {
                rules.push(format!("max:{max}"));
            }
        }
        if col.name.contains("email") {
            rules.push("email".into());
            match variant {
                DtoVariant::Create => rules.push(format!("unique:{},{}", self.table, col.name)),
                DtoVariant::Update => {
                    rules.push(format!("unique:{},{},{{id}}", self.table, col.name))
                }
            }
        }
        rules.join("|")
    }

    /// One OR-clause per column on the searchable allowlist
    pub fn search_block(&self) -> String {
        let clauses: Vec<String> = self
            .columns
            .iter()
            .filter(|c| self.searchable.iter().any(|s| s == &c.name))
            .map(|c| format!("                q.or_like(\"{}\", term);", c.name))
            .collect();
        if clauses.is_empty() {
            return "                q.raw(\"id > 0\"); // add searchable fields".to_string();
        }
        clauses.join("\n")
    }

    /// All columns minus the hidden blocklist, comma-joined quoted literals
    pub fn sortable_block(&self) -> String {
        self.columns
            .iter()
            .filter(|c| !self.hidden.iter().any(|h| h == &c.name))
            .map(|c| format!("\"{}\"", c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Serialized-field list for the resource artifact
    ///
    /// Honors the hidden blocklist; timestamp columns route through the
    /// formatting helper the resource template defines.
    pub fn resource_block(&self) -> String {
        if self.columns.is_empty() {
            return [
                "            \"id\": self.id,",
                "            \"name\": self.name,",
                "            \"description\": self.description,",
                "            \"created_at\": self.created_at.as_ref().map(fmt_timestamp),",
                "            \"updated_at\": self.updated_at.as_ref().map(fmt_timestamp),",
            ]
            .join("\n");
        }
        self.columns
            .iter()
            .filter(|c| !self.hidden.iter().any(|h| h == &c.name))
            .map(|c| {
                if c.name == "created_at" || c.name == "updated_at" {
                    format!(
                        "            \"{0}\": self.{0}.as_ref().map(fmt_timestamp),",
                        c.name
                    )
                } else {
                    format!("            \"{0}\": self.{0},", c.name)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn extraction_line(col: &ColumnDescriptor, variant: DtoVariant) -> String {
    let accessor = col.inferred.value_accessor();
    let optional = col.nullable || variant == DtoVariant::Update;
    match (col.inferred, optional) {
        (ColumnType::Text, false) => format!(
            "            {0}: map.get(\"{0}\").and_then(Value::{accessor}).unwrap_or_default().to_string(),",
            col.name
        ),
        (ColumnType::Text, true) => format!(
            "            {0}: map.get(\"{0}\").and_then(Value::{accessor}).map(str::to_string),",
            col.name
        ),
        (_, false) => format!(
            "            {0}: map.get(\"{0}\").and_then(Value::{accessor}).unwrap_or({1}),",
            col.name,
            col.inferred.default_literal()
        ),
        (_, true) => format!(
            "            {0}: map.get(\"{0}\").and_then(Value::{accessor}),",
            col.name
        ),
    }
}
