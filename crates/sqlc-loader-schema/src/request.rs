use crate::node::{Catalog, Identifier, Query};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// Settings
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settings {
    /// SQL engine identifier (`postgresql`, `mysql`, `sqlite`).
    #[serde(default)]
    pub engine: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

///
/// GenerateRequest
///
/// One immutable snapshot handed to a generation run.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub catalog: Catalog,

    #[serde(default)]
    pub queries: Vec<Query>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sqlc_version: String,

    /// Raw plugin options document (JSON).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugin_options: Vec<u8>,

    /// Raw global options document (JSON).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_options: Vec<u8>,
}

impl GenerateRequest {
    /// Schema-qualified tables touched by at least one query.
    ///
    /// Identifiers without a schema are qualified with `default_schema`; the
    /// catalog name is dropped so the set compares on `(schema, name)` only.
    #[must_use]
    pub fn reachable_tables(&self, default_schema: &str) -> BTreeSet<Identifier> {
        self.queries
            .iter()
            .flat_map(Query::referenced_tables)
            .map(|ident| Identifier::new(ident.schema_or(default_schema), ident.name.clone()))
            .collect()
    }
}
