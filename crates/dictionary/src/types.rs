use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Token attributes (`media`, `pointer`, CTI keys, ...)
pub type Attributes = BTreeMap<String, String>;

/// A single design token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Keys from the source root down to the token object
    pub path: Vec<String>,

    /// Output name; starts as the last path segment and is rewritten by
    /// name transforms
    pub name: String,

    /// Current value (fully resolved once references are resolved)
    pub value: String,

    /// Value exactly as written in the source, references included
    pub original_value: String,

    /// Optional human comment carried into the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Metadata attributes
    #[serde(default)]
    pub attributes: Attributes,

    /// Source file the token was loaded from
    #[serde(default)]
    pub file_path: PathBuf,
}

impl Token {
    /// Create a token from its path and raw value.
    ///
    /// The name defaults to the last path segment, like a freshly loaded
    /// token before any name transform runs.
    #[must_use]
    pub fn new(path: Vec<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let name = path.last().cloned().unwrap_or_default();
        Self {
            path,
            name,
            original_value: value.clone(),
            value,
            comment: None,
            attributes: Attributes::new(),
            file_path: PathBuf::new(),
        }
    }

    /// Builder: set name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: add attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder: set comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builder: set source file
    #[must_use]
    pub fn with_file(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = file_path.into();
        self
    }

    /// Attribute lookup
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Dotted path, the form used inside `{references}`
    #[must_use]
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}
