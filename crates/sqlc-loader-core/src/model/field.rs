use crate::gotype::GoType;
use sqlc_loader_schema::node::{Column, Identifier};
use std::{collections::BTreeMap, fmt::Write as _};

///
/// Field
///
/// One struct field. Embedded rows own their child fields; the tree is
/// finite because a table is never embedded inside itself.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field<'a> {
    pub name: String,
    pub db_name: String,
    pub ty: GoType,
    pub tags: BTreeMap<String, String>,
    pub comment: String,
    pub is_primary_key: bool,

    /// Catalog table this field embeds. Unset for plain columns, including an
    /// `sqlc.embed` column whose table was already on the embedding path.
    pub embed_table: Option<Identifier>,
    pub embed_fields: Vec<Field<'a>>,
    pub column: &'a Column,
}

impl Field<'_> {
    /// Go struct tag, keys in sorted order: `db:"id" json:"id"`.
    #[must_use]
    pub fn tag(&self) -> String {
        let mut tag = String::new();
        for (key, value) in &self.tags {
            if !tag.is_empty() {
                tag.push(' ');
            }
            let _ = write!(tag, "{key}:\"{value}\"");
        }

        tag
    }

    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embed_table.is_some()
    }
}
