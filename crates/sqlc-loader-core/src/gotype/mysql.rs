use super::{ANY_TYPE, GoType, TypeTransformer, unknown_type};
use crate::custom_type::CustomTypes;
use sqlc_loader_config::{Options, SqlEngine};
use sqlc_loader_schema::node::Column;

///
/// MySqlTransformer
///
/// Nullable columns always use `database/sql` wrappers; unsigned integers
/// widen to `uint*`.
///

#[derive(Clone, Copy, Debug)]
pub struct MySqlTransformer<'a> {
    custom_types: &'a CustomTypes,
}

impl<'a> MySqlTransformer<'a> {
    #[must_use]
    pub const fn new(_options: &'a Options, custom_types: &'a CustomTypes) -> Self {
        Self { custom_types }
    }
}

impl TypeTransformer for MySqlTransformer<'_> {
    fn to_go_type(&self, column: &Column) -> GoType {
        let not_null = column.effective_not_null();
        let unsigned = column.unsigned;
        let data_type = column.data_type();

        let int = |signed: &str, unsigned_name: &str, null: &str| {
            if !not_null {
                GoType::parse(null)
            } else if unsigned {
                GoType::named(unsigned_name)
            } else {
                GoType::named(signed)
            }
        };
        let or_null = |base: &str, null: &str| {
            GoType::parse(if not_null { base } else { null })
        };

        match data_type.as_str() {
            "varchar" | "text" | "char" | "tinytext" | "mediumtext" | "longtext" => {
                or_null("string", "database/sql.NullString")
            }
            "tinyint" if column.length == 1 => or_null("bool", "database/sql.NullBool"),
            "tinyint" => int("int8", "uint8", "database/sql.NullInt16"),
            "year" => or_null("int16", "database/sql.NullInt16"),
            "smallint" => int("int16", "uint16", "database/sql.NullInt16"),
            "int" | "integer" | "mediumint" => int("int32", "uint32", "database/sql.NullInt32"),
            "bigint" => int("int64", "uint64", "database/sql.NullInt64"),
            "blob" | "binary" | "varbinary" | "tinyblob" | "mediumblob" | "longblob" => {
                or_null("[]byte", "database/sql.NullString")
            }
            "double" | "double precision" | "real" | "float" => {
                or_null("float64", "database/sql.NullFloat64")
            }
            "decimal" | "dec" | "fixed" => or_null("string", "database/sql.NullString"),
            // inline column enums carry no named type
            "enum" => GoType::named("string"),
            "date" | "timestamp" | "datetime" | "time" => {
                or_null("time.Time", "database/sql.NullTime")
            }
            "boolean" | "bool" => or_null("bool", "database/sql.NullBool"),
            "json" => GoType::parse("encoding/json.RawMessage"),
            "any" => GoType::named(ANY_TYPE),
            other => self
                .custom_types
                .find_by_name(other, !not_null)
                .map(|custom| custom.go_type.clone())
                .unwrap_or_else(|| unknown_type(SqlEngine::MySql, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        custom_type::build_custom_types,
        test_support::{column, options, schema_with_enum},
    };

    fn resolve(column: &Column) -> String {
        let options = options(r#"{ "emit_pointers_for_null_types": true }"#);
        let custom = build_custom_types(&[schema_with_enum("public", "authors_status")], &options, None);

        MySqlTransformer::new(&options, &custom)
            .to_go_type(column)
            .to_string()
    }

    #[test]
    fn tinyint_one_is_bool() {
        let mut flag = column("active", "tinyint", true);
        flag.length = 1;
        assert_eq!(resolve(&flag), "bool");

        flag.not_null = false;
        assert_eq!(resolve(&flag), "sql.NullBool");
    }

    #[test]
    fn unsigned_integers_widen() {
        let mut id = column("id", "bigint", true);
        assert_eq!(resolve(&id), "int64");

        id.unsigned = true;
        assert_eq!(resolve(&id), "uint64");

        id.not_null = false;
        assert_eq!(resolve(&id), "sql.NullInt64");
    }

    #[test]
    fn never_emits_pointers() {
        assert_eq!(resolve(&column("name", "varchar", false)), "sql.NullString");
        assert_eq!(resolve(&column("born", "datetime", false)), "sql.NullTime");
    }

    #[test]
    fn named_enums_match_by_name() {
        assert_eq!(resolve(&column("status", "authors_status", true)), "AuthorsStatus");
        assert_eq!(resolve(&column("status", "authors_status", false)), "NullAuthorsStatus");
        assert_eq!(resolve(&column("status", "enum", false)), "string");
    }

    #[test]
    fn unknown_types_are_empty_interfaces() {
        assert_eq!(resolve(&column("shape", "geometry", true)), "interface{}");
    }
}
