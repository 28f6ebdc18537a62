use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Identifier
///
/// A possibly schema-qualified catalog name (table, type, enum).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub catalog: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema: String,

    pub name: String,
}

impl Identifier {
    #[must_use]
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog: String::new(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self::new(String::new(), name)
    }

    /// Type name as sqlc reports it: `schema.name`, or just `name` when the
    /// identifier carries no schema.
    #[must_use]
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }

    /// Schema of this identifier, substituting `default_schema` when empty.
    #[must_use]
    pub fn schema_or<'a>(&'a self, default_schema: &'a str) -> &'a str {
        if self.schema.is_empty() {
            default_schema
        } else {
            &self.schema
        }
    }

    /// Copy of this identifier with an empty schema replaced by `default_schema`.
    #[must_use]
    pub fn qualified_with(&self, default_schema: &str) -> Self {
        Self {
            catalog: self.catalog.clone(),
            schema: self.schema_or(default_schema).to_string(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data_type())
    }
}
