use super::{ANY_TYPE, GoType, TypeTransformer, nullable, unknown_type};
use sqlc_loader_config::{Options, SqlEngine};
use sqlc_loader_schema::node::Column;

// prefixes of the declared types that have text affinity
const TEXT_PREFIXES: [&str; 6] = [
    "character",
    "varchar",
    "varyingcharacter",
    "nchar",
    "nativecharacter",
    "nvarchar",
];

///
/// SqliteTransformer
///
/// Types are matched case-insensitively on their declared name. Pointers
/// replace null wrappers whenever the option is set.
///

#[derive(Clone, Copy, Debug)]
pub struct SqliteTransformer {
    pointers: bool,
}

impl SqliteTransformer {
    #[must_use]
    pub const fn new(options: &Options) -> Self {
        Self {
            pointers: options.emit_pointers_for_null_types,
        }
    }
}

impl TypeTransformer for SqliteTransformer {
    fn to_go_type(&self, column: &Column) -> GoType {
        let not_null = column.effective_not_null();
        let data_type = column.data_type().to_lowercase();
        let scalar = |base: &str, null: &str| nullable(not_null, self.pointers, base, null);

        match data_type.as_str() {
            "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint"
            | "unsignedbigint" | "int2" | "int8" => scalar("int64", "database/sql.NullInt64"),
            "blob" => GoType::parse("[]byte"),
            "real" | "double" | "doubleprecision" | "float" => {
                scalar("float64", "database/sql.NullFloat64")
            }
            "boolean" | "bool" => scalar("bool", "database/sql.NullBool"),
            "date" | "datetime" | "timestamp" => scalar("time.Time", "database/sql.NullTime"),
            "any" => GoType::named(ANY_TYPE),
            dt if dt == "text"
                || dt == "clob"
                || TEXT_PREFIXES.iter().any(|prefix| dt.starts_with(prefix)) =>
            {
                scalar("string", "database/sql.NullString")
            }
            dt if dt == "numeric" || dt.starts_with("decimal") => {
                scalar("float64", "database/sql.NullFloat64")
            }
            dt => unknown_type(SqlEngine::Sqlite, dt),
        }
    }
}
