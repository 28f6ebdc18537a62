use crate::node::{Column, Identifier};
use serde::{Deserialize, Serialize};

///
/// Query
///
/// A generated query. The resolver only reads which tables it touches; the
/// SQL text is carried along untouched.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Query {
    pub name: String,

    #[serde(default)]
    pub cmd: String,

    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub params: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_into_table: Option<Identifier>,
}

impl Query {
    /// Every table identifier this query mentions, in column order.
    pub fn referenced_tables(&self) -> impl Iterator<Item = &Identifier> {
        self.columns
            .iter()
            .chain(self.params.iter().filter_map(|p| p.column.as_ref()))
            .filter_map(|column| column.table.as_ref())
            .chain(self.insert_into_table.iter())
    }
}

///
/// Parameter
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Parameter {
    #[serde(default)]
    pub number: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
}
