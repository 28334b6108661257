use once_cell::sync::Lazy;
use regex::Regex;

/// Inferred storage type for a column
///
/// Backend-specific type strings collapse into four buckets; everything the
/// mapper does not recognize (dates and times included) is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnType {
    /// Rust type emitted into property declarations
    pub fn rust_type(self) -> &'static str {
        match self {
            ColumnType::Integer => "i64",
            ColumnType::Float => "f64",
            ColumnType::Boolean => "bool",
            ColumnType::Text => "String",
        }
    }

    /// Canonical default value literal for required fields
    pub fn default_literal(self) -> &'static str {
        match self {
            ColumnType::Integer => "0",
            ColumnType::Float => "0.0",
            ColumnType::Boolean => "false",
            ColumnType::Text => "String::new()",
        }
    }

    /// `serde_json::Value` accessor used in extraction expressions
    pub fn value_accessor(self) -> &'static str {
        match self {
            ColumnType::Integer => "as_i64",
            ColumnType::Float => "as_f64",
            ColumnType::Boolean => "as_bool",
            ColumnType::Text => "as_str",
        }
    }

    /// Validation type rule (`integer` / `numeric` / `boolean` / `string`)
    pub fn rule(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "numeric",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "string",
        }
    }
}

/// Normalized description of one table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name as reported by the backend
    pub name: String,
    /// Collapsed type bucket
    pub inferred: ColumnType,
    /// Whether the backend accepts absent values for this column
    pub nullable: bool,
    /// Parenthesized size suffix from the raw type, when present
    pub max_length: Option<u32>,
    /// Whether the column sits on the configured exclusion list
    pub excluded: bool,
}

#[allow(clippy::expect_used)]
static LENGTH_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    // the pattern is a literal; a failure here is a build defect
    Regex::new(r"\((\d+)\)").expect("length suffix pattern")
});

/// Map a raw backend type string to a [`ColumnType`]
///
/// Matching is substring-based on the lowercased raw string: the single-bit
/// `tinyint(1)` flag convention and "bool" win first, then "int", then the
/// float family, then text for everything else.
pub fn map_type(raw: &str) -> ColumnType {
    let raw = raw.to_ascii_lowercase();
    if raw.contains("tinyint(1)") || raw.contains("bool") {
        return ColumnType::Boolean;
    }
    if raw.contains("int") {
        return ColumnType::Integer;
    }
    if raw.contains("decimal") || raw.contains("float") || raw.contains("double") {
        return ColumnType::Float;
    }
    ColumnType::Text
}

/// Parse the parenthesized numeric suffix out of a raw type string
///
/// `varchar(255)` → `Some(255)`; `text` → `None`.
pub fn parse_max_length(raw: &str) -> Option<u32> {
    LENGTH_SUFFIX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type_buckets() {
        assert_eq!(map_type("int"), ColumnType::Integer);
        assert_eq!(map_type("INT(11)"), ColumnType::Integer);
        assert_eq!(map_type("bigint unsigned"), ColumnType::Integer);
        assert_eq!(map_type("decimal(10,2)"), ColumnType::Float);
        assert_eq!(map_type("float"), ColumnType::Float);
        assert_eq!(map_type("double precision"), ColumnType::Float);
        assert_eq!(map_type("boolean"), ColumnType::Boolean);
        assert_eq!(map_type("tinyint(1)"), ColumnType::Boolean);
        assert_eq!(map_type("varchar(255)"), ColumnType::Text);
        assert_eq!(map_type("text"), ColumnType::Text);
        // date and time types are text
        assert_eq!(map_type("datetime"), ColumnType::Text);
        assert_eq!(map_type("timestamp"), ColumnType::Text);
    }

    #[test]
    fn test_tinyint_width_is_integer() {
        // only the single-bit flag convention maps to boolean
        assert_eq!(map_type("tinyint(4)"), ColumnType::Integer);
    }

    #[test]
    fn test_parse_max_length() {
        assert_eq!(parse_max_length("varchar(255)"), Some(255));
        assert_eq!(parse_max_length("char(36)"), Some(36));
        assert_eq!(parse_max_length("text"), None);
        assert_eq!(parse_max_length("decimal(10,2)"), Some(10));
    }

    #[test]
    fn test_defaults_per_type() {
        assert_eq!(ColumnType::Integer.default_literal(), "0");
        assert_eq!(ColumnType::Float.default_literal(), "0.0");
        assert_eq!(ColumnType::Boolean.default_literal(), "false");
        assert_eq!(ColumnType::Text.default_literal(), "String::new()");
    }

    #[test]
    fn test_spec_email_column_example() {
        // varchar(255), not nullable → text with max length 255
        assert_eq!(map_type("varchar(255)"), ColumnType::Text);
        assert_eq!(parse_max_length("varchar(255)"), Some(255));
    }
}
