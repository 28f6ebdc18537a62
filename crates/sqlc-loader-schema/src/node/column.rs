use crate::node::Identifier;
use serde::{Deserialize, Serialize};

///
/// Column
///
/// One column of a table or a query result, exactly as the host compiler
/// extracted it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,

    /// Name before any `AS` rename in the query.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_name: String,

    #[serde(default)]
    pub not_null: bool,

    #[serde(default)]
    pub unsigned: bool,

    #[serde(default)]
    pub is_array: bool,

    #[serde(default)]
    pub array_dims: u32,

    /// Column stands for a `sqlc.slice()` bind parameter.
    #[serde(default)]
    pub is_sqlc_slice: bool,

    /// Declared length, e.g. the `1` in MySQL `tinyint(1)`.
    #[serde(default)]
    pub length: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Identifier>,

    /// Set when the column embeds a whole table row (`sqlc.embed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_table: Option<Identifier>,
}

impl Column {
    /// Name used for override matching: the pre-rename name when present.
    #[must_use]
    pub fn match_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.name
        } else {
            &self.original_name
        }
    }

    /// Declared SQL type as sqlc renders it (`schema.name` or `name`).
    #[must_use]
    pub fn data_type(&self) -> String {
        self.ty.as_ref().map(Identifier::data_type).unwrap_or_default()
    }

    /// Arrays always scan into a non-null slice, so they count as not null.
    #[must_use]
    pub const fn effective_not_null(&self) -> bool {
        self.not_null || self.is_array
    }
}
