//! File entry payload

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A file record held by a list: name plus opaque content hash.
///
/// Names are not unique within a list. The row id assigned by the store is
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hash: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hash: hash.into(),
        }
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.hash.is_empty() {
            return Err(ValidationError::Empty { field: "hash" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_entry() {
        assert!(FileEntry::new("a.txt", "h1").validate().is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        let err = FileEntry::new("", "h1").validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });

        let err = FileEntry::new("a.txt", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "hash" });
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let entry: FileEntry = serde_json::from_str(r#"{"name": "a.txt"}"#).unwrap();
        assert_eq!(entry.hash, "");
        assert!(entry.validate().is_err());
    }
}
