use crate::node::{Column, Identifier};
use serde::{Deserialize, Serialize};

///
/// Catalog
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub default_schema: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl Catalog {
    /// Look up a table by identifier, qualifying an empty schema with the
    /// catalog default.
    #[must_use]
    pub fn find_table(&self, ident: &Identifier) -> Option<(&Schema, &Table)> {
        let schema_name = ident.schema_or(&self.default_schema);

        self.schemas
            .iter()
            .filter(|schema| schema.name == schema_name)
            .find_map(|schema| {
                schema
                    .tables
                    .iter()
                    .find(|table| table.rel.name == ident.name)
                    .map(|table| (schema, table))
            })
    }
}

///
/// Schema
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default)]
    pub tables: Vec<Table>,

    #[serde(default)]
    pub enums: Vec<Enum>,

    #[serde(default)]
    pub composite_types: Vec<CompositeType>,
}

///
/// Table
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Table {
    pub rel: Identifier,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

///
/// Enum
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub vals: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

///
/// CompositeType
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompositeType {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}
