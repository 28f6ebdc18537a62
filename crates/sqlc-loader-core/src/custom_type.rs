use crate::{gotype::GoType, naming::NameNormalizer};
use derive_more::Display;
use sqlc_loader_config::Options;
use sqlc_loader_schema::{is_reserved_schema, node::Schema};

///
/// CustomTypeKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CustomTypeKind {
    #[display("composite")]
    Composite,

    #[display("enum")]
    Enum,
}

///
/// CustomType
///
/// Go type standing for a database enum or composite type. Every source type
/// yields a pair differing only in `nullable`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomType {
    pub go_type: GoType,
    pub sql_name: String,
    pub schema: String,
    pub kind: CustomTypeKind,
    pub nullable: bool,
}

///
/// CustomTypes
///
/// Read-only dictionary of the custom types of one run, keyed by
/// `(schema, sql_name, nullable)`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CustomTypes(Vec<CustomType>);

impl CustomTypes {
    #[must_use]
    pub fn find(&self, schema: &str, sql_name: &str, nullable: bool) -> Option<&CustomType> {
        self.0
            .iter()
            .find(|t| t.schema == schema && t.sql_name == sql_name && t.nullable == nullable)
    }

    /// Lookup ignoring the schema, for engines whose columns carry no type
    /// schema.
    #[must_use]
    pub fn find_by_name(&self, sql_name: &str, nullable: bool) -> Option<&CustomType> {
        self.0
            .iter()
            .find(|t| t.sql_name == sql_name && t.nullable == nullable)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomType> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scan every non-system schema for enums and composite types.
///
/// Enum names are qualified with `dest_package` when one is given, carrying
/// the configured model import.
#[must_use]
pub fn build_custom_types(
    schemas: &[Schema],
    options: &Options,
    dest_package: Option<&str>,
) -> CustomTypes {
    let names = NameNormalizer::new(options);
    let pointers = options.driver().is_pgx() && options.emit_pointers_for_null_types;
    let import = Some(options.model_import.as_str()).filter(|path| !path.is_empty());

    let mut types = Vec::new();
    for schema in schemas.iter().filter(|s| !is_reserved_schema(&s.name)) {
        for item in &schema.enums {
            let go_name = names.type_name(&schema.name, &item.name);

            for (nullable, name) in [(false, go_name.clone()), (true, format!("Null{go_name}"))] {
                let go_type = match dest_package {
                    Some(package) => GoType::named(&name).within(package, import),
                    None => GoType::named(&name),
                };

                types.push(CustomType {
                    go_type,
                    sql_name: item.name.clone(),
                    schema: schema.name.clone(),
                    kind: CustomTypeKind::Enum,
                    nullable,
                });
            }
        }

        for composite in &schema.composite_types {
            let nullable_type = if pointers {
                GoType::parse("*string")
            } else {
                GoType::parse("database/sql.NullString")
            };

            for (nullable, go_type) in [(false, GoType::parse("string")), (true, nullable_type)] {
                types.push(CustomType {
                    go_type,
                    sql_name: composite.name.clone(),
                    schema: schema.name.clone(),
                    kind: CustomTypeKind::Composite,
                    nullable,
                });
            }
        }
    }

    CustomTypes(types)
}
