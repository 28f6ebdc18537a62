use crate::{gotype::GoType, model::Field};
use sqlc_loader_schema::node::Identifier;

///
/// Struct
///
/// Go record for one table. Field names are unique; `table` is always
/// schema-qualified.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Struct<'a> {
    pub ty: GoType,
    pub table: Identifier,
    pub comment: String,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Struct<'a> {
    /// Unqualified type name, e.g. `Author`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// `schema.table`, the key used for exclusion and cache lookups.
    #[must_use]
    pub fn full_table_name(&self) -> String {
        self.table.data_type()
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Field<'a>> {
        self.fields.iter().filter(|field| field.is_primary_key)
    }

    /// The primary key, when exactly one field carries the flag.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Field<'a>> {
        let mut keys = self.primary_keys();
        match (keys.next(), keys.next()) {
            (Some(key), None) => Some(key),
            _ => None,
        }
    }

    /// Only a single-key struct can back a loader.
    #[must_use]
    pub fn is_loader_eligible(&self) -> bool {
        self.primary_key().is_some()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field<'a>> {
        self.fields.iter().find(|field| field.name == name)
    }
}
