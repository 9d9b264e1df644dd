//! List name validation
//!
//! A list name selects one physical SQLite table. Table names cannot be bound
//! as statement parameters, so every name is checked against an allow-list
//! here before any statement text is built from it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for list names
const MAX_LIST_NAME_LEN: usize = 64;

/// Prefix SQLite keeps for its own internal tables.
const SQLITE_INTERNAL_PREFIX: &str = "sqlite_";

/// ASCII letters, digits and underscore. Nothing that can terminate, quote or
/// comment a statement.
static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("invalid identifier regex"));

/// SQLite keywords, uppercase.
const RESERVED_WORDS: &[&str] = &[
    "ABORT", "ACTION", "ADD", "AFTER", "ALL", "ALTER", "ALWAYS", "ANALYZE", "AND", "AS", "ASC",
    "ATTACH", "AUTOINCREMENT", "BEFORE", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE", "CAST",
    "CHECK", "COLLATE", "COLUMN", "COMMIT", "CONFLICT", "CONSTRAINT", "CREATE", "CROSS",
    "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DATABASE", "DEFAULT",
    "DEFERRABLE", "DEFERRED", "DELETE", "DESC", "DETACH", "DISTINCT", "DO", "DROP", "EACH",
    "ELSE", "END", "ESCAPE", "EXCEPT", "EXCLUDE", "EXCLUSIVE", "EXISTS", "EXPLAIN", "FAIL",
    "FILTER", "FIRST", "FOLLOWING", "FOR", "FOREIGN", "FROM", "FULL", "GENERATED", "GLOB",
    "GROUP", "GROUPS", "HAVING", "IF", "IGNORE", "IMMEDIATE", "IN", "INDEX", "INDEXED",
    "INITIALLY", "INNER", "INSERT", "INSTEAD", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN",
    "KEY", "LAST", "LEFT", "LIKE", "LIMIT", "MATCH", "MATERIALIZED", "NATURAL", "NO", "NOT",
    "NOTHING", "NOTNULL", "NULL", "NULLS", "OF", "OFFSET", "ON", "OR", "ORDER", "OTHERS",
    "OUTER", "OVER", "PARTITION", "PLAN", "PRAGMA", "PRECEDING", "PRIMARY", "QUERY", "RAISE",
    "RANGE", "RECURSIVE", "REFERENCES", "REGEXP", "REINDEX", "RELEASE", "RENAME", "REPLACE",
    "RESTRICT", "RETURNING", "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT", "SELECT", "SET",
    "TABLE", "TEMP", "TEMPORARY", "THEN", "TIES", "TO", "TRANSACTION", "TRIGGER", "UNBOUNDED",
    "UNION", "UNIQUE", "UPDATE", "USING", "VACUUM", "VALUES", "VIEW", "VIRTUAL", "WHEN", "WHERE",
    "WINDOW", "WITH", "WITHOUT",
];

/// Validated list name, safe to embed in statement text as a table identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListName(String);

impl ListName {
    /// Create a new list name, validating it as a table identifier.
    ///
    /// # Rules
    /// - 1 to 64 characters
    /// - ASCII letters, digits, underscores
    /// - Not an SQL keyword (any case)
    /// - Not prefixed with `sqlite_` (any case)
    ///
    /// # Example
    /// ```
    /// use filelist_server::models::ListName;
    ///
    /// assert!(ListName::new("docs_2024").is_ok());
    /// assert!(ListName::new("a;DROP TABLE x").is_err());
    /// assert!(ListName::new("select").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "list name" });
        }

        if s.len() > MAX_LIST_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "list name",
                max: MAX_LIST_NAME_LEN,
            });
        }

        if !IDENT_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "list name",
                reason: "must contain only ASCII letters, digits and underscores",
            });
        }

        let upper = s.to_ascii_uppercase();
        if upper.starts_with(&SQLITE_INTERNAL_PREFIX.to_ascii_uppercase())
            || RESERVED_WORDS.contains(&upper.as_str())
        {
            return Err(ValidationError::Reserved {
                field: "list name",
                value: s.to_owned(),
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the list name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a double-quoted SQL identifier.
    ///
    /// Validation already excludes `"`, so no escaping is needed.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
