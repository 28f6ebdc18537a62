use super::{ANY_TYPE, GoType, TypeTransformer, nullable, unknown_type};
use crate::custom_type::CustomTypes;
use sqlc_loader_config::{Options, SqlDriver, SqlEngine};
use sqlc_loader_schema::node::Column;

const PGTYPE: &str = "github.com/jackc/pgx/v5/pgtype";
const PGTYPE_V4: &str = "github.com/jackc/pgtype";
const PQTYPE: &str = "github.com/sqlc-dev/pqtype";
const PGVECTOR: &str = "github.com/pgvector/pgvector-go";

///
/// PostgresTransformer
///
/// Pointers replace null wrappers only under a pgx driver.
///

#[derive(Clone, Copy, Debug)]
pub struct PostgresTransformer<'a> {
    driver: SqlDriver,
    pointers: bool,
    default_schema: &'a str,
    custom_types: &'a CustomTypes,
}

impl<'a> PostgresTransformer<'a> {
    #[must_use]
    pub fn new(options: &'a Options, custom_types: &'a CustomTypes) -> Self {
        let driver = options.driver();

        Self {
            driver,
            pointers: driver.is_pgx() && options.emit_pointers_for_null_types,
            default_schema: &options.default_schema,
            custom_types,
        }
    }

    fn v5(&self) -> bool {
        self.driver == SqlDriver::PgxV5
    }

    // base / *base / pgtype.<v5> / <null>
    fn scalar(&self, not_null: bool, base: &str, v5: &str, null: &str) -> GoType {
        if !not_null && !self.pointers && self.v5() {
            pgtype(v5)
        } else {
            nullable(not_null, self.pointers, base, null)
        }
    }

    // pgtype.<v5> under pgx/v5, standard type otherwise
    fn temporal(&self, not_null: bool, v5: &str) -> GoType {
        if self.v5() {
            pgtype(v5)
        } else {
            nullable(not_null, self.pointers, "time.Time", "database/sql.NullTime")
        }
    }

    // driver-specific type with no null variant
    fn by_driver(&self, v5: Option<&str>, v4: Option<&str>) -> Option<GoType> {
        match self.driver {
            SqlDriver::PgxV5 => v5.map(pgtype),
            SqlDriver::PgxV4 => v4.map(pgtype_v4),
            SqlDriver::LibPq => None,
        }
    }

    fn builtin(&self, not_null: bool, data_type: &str) -> Option<GoType> {
        let ty = match data_type {
            "serial" | "serial4" | "pg_catalog.serial4" => {
                self.scalar(not_null, "int32", "Int4", "database/sql.NullInt32")
            }
            "bigserial" | "serial8" | "pg_catalog.serial8" => {
                self.scalar(not_null, "int64", "Int8", "database/sql.NullInt64")
            }
            "smallserial" | "serial2" | "pg_catalog.serial2" => {
                self.scalar(not_null, "int16", "Int2", "database/sql.NullInt16")
            }
            "integer" | "int" | "int4" | "pg_catalog.int4" => {
                self.scalar(not_null, "int32", "Int4", "database/sql.NullInt32")
            }
            "bigint" | "int8" | "pg_catalog.int8" => {
                self.scalar(not_null, "int64", "Int8", "database/sql.NullInt64")
            }
            "smallint" | "int2" | "pg_catalog.int2" => {
                self.scalar(not_null, "int16", "Int2", "database/sql.NullInt16")
            }
            "float" | "double precision" | "float8" | "pg_catalog.float8" => {
                self.scalar(not_null, "float64", "Float8", "database/sql.NullFloat64")
            }
            "real" | "float4" | "pg_catalog.float4" => {
                self.scalar(not_null, "float32", "Float4", "database/sql.NullFloat64")
            }
            "numeric" | "pg_catalog.numeric" | "money" => {
                if self.driver.is_pgx() {
                    by_version(self.driver, "Numeric")
                } else {
                    // lib/pq scans numerics as strings
                    nullable(not_null, self.pointers, "string", "database/sql.NullString")
                }
            }
            "boolean" | "bool" | "pg_catalog.bool" => {
                self.scalar(not_null, "bool", "Bool", "database/sql.NullBool")
            }
            "json" | "pg_catalog.json" => self.json(not_null, "JSON"),
            "jsonb" | "pg_catalog.jsonb" => self.json(not_null, "JSONB"),
            "bytea" | "blob" | "pg_catalog.bytea" => GoType::parse("[]byte"),
            "date" => self.temporal(not_null, "Date"),
            "pg_catalog.time" => self.temporal(not_null, "Time"),
            "pg_catalog.timetz" => {
                nullable(not_null, self.pointers, "time.Time", "database/sql.NullTime")
            }
            "pg_catalog.timestamp" | "timestamp" => self.temporal(not_null, "Timestamp"),
            "pg_catalog.timestamptz" | "timestamptz" => self.temporal(not_null, "Timestamptz"),
            "text" | "pg_catalog.varchar" | "pg_catalog.bpchar" | "string" | "citext" | "name" => {
                self.scalar(not_null, "string", "Text", "database/sql.NullString")
            }
            "uuid" => {
                if self.v5() {
                    pgtype("UUID")
                } else {
                    nullable(
                        not_null,
                        self.pointers,
                        "github.com/google/uuid.UUID",
                        "github.com/google/uuid.NullUUID",
                    )
                }
            }
            "inet" => match self.driver {
                SqlDriver::PgxV5 => nullable(not_null, true, "net/netip.Addr", ""),
                SqlDriver::PgxV4 => pgtype_v4("Inet"),
                SqlDriver::LibPq => pqtype("Inet"),
            },
            "cidr" => match self.driver {
                SqlDriver::PgxV5 => nullable(not_null, true, "net/netip.Prefix", ""),
                SqlDriver::PgxV4 => pgtype_v4("CIDR"),
                SqlDriver::LibPq => pqtype("CIDR"),
            },
            "macaddr" | "macaddr8" => match self.driver {
                SqlDriver::PgxV5 => GoType::parse("net.HardwareAddr"),
                SqlDriver::PgxV4 => pgtype_v4("Macaddr"),
                SqlDriver::LibPq => pqtype("Macaddr"),
            },
            "ltree" | "lquery" | "ltxtquery" => {
                self.scalar(not_null, "string", "Text", "database/sql.NullString")
            }
            "interval" | "pg_catalog.interval" => {
                if self.v5() {
                    pgtype("Interval")
                } else {
                    nullable(not_null, self.pointers, "int64", "database/sql.NullInt64")
                }
            }
            "daterange" => self.by_driver(Some("Range[pgtype.Date]"), Some("Daterange"))?,
            "datemultirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Date]]"), None)?
            }
            "tsrange" => self.by_driver(Some("Range[pgtype.Timestamp]"), Some("Tsrange"))?,
            "tsmultirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Timestamp]]"), None)?
            }
            "tstzrange" => self.by_driver(Some("Range[pgtype.Timestamptz]"), Some("Tstzrange"))?,
            "tstzmultirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Timestamptz]]"), None)?
            }
            "numrange" => self.by_driver(Some("Range[pgtype.Numeric]"), Some("Numrange"))?,
            "nummultirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Numeric]]"), None)?
            }
            "int4range" => self.by_driver(Some("Range[pgtype.Int4]"), Some("Int4range"))?,
            "int4multirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Int4]]"), None)?
            }
            "int8range" => self.by_driver(Some("Range[pgtype.Int8]"), Some("Int8range"))?,
            "int8multirange" => {
                self.by_driver(Some("Multirange[pgtype.Range[pgtype.Int8]]"), None)?
            }
            "hstore" => self.by_driver(Some("Hstore"), Some("Hstore"))?,
            "bit" | "varbit" | "pg_catalog.bit" | "pg_catalog.varbit" => {
                self.by_driver(Some("Bits"), Some("Varbit"))?
            }
            "cid" => self.by_driver(Some("Uint32"), Some("CID"))?,
            "oid" => self.by_driver(Some("Uint32"), Some("OID"))?,
            "tid" => self.by_driver(Some("TID"), Some("TID"))?,
            "xid" => self.by_driver(Some("Uint32"), Some("XID"))?,
            "box" => self.by_driver(Some("Box"), Some("Box"))?,
            "circle" => self.by_driver(Some("Circle"), Some("Circle"))?,
            "line" => self.by_driver(Some("Line"), Some("Line"))?,
            "lseg" => self.by_driver(Some("Lseg"), Some("Lseg"))?,
            "path" => self.by_driver(Some("Path"), Some("Path"))?,
            "point" => self.by_driver(Some("Point"), Some("Point"))?,
            "polygon" => self.by_driver(Some("Polygon"), Some("Polygon"))?,
            "vector" if self.v5() => {
                let pointer = if self.pointers { "*" } else { "" };
                GoType::parse(&format!("{pointer}{PGVECTOR}.Vector"))
            }
            // void scans only into an empty interface
            "void" | "any" => GoType::named(ANY_TYPE),
            _ => return None,
        };

        Some(ty)
    }

    fn json(&self, not_null: bool, v4: &str) -> GoType {
        match self.driver {
            SqlDriver::PgxV5 => GoType::parse("[]byte"),
            SqlDriver::PgxV4 => pgtype_v4(v4),
            SqlDriver::LibPq => {
                if not_null {
                    GoType::parse("encoding/json.RawMessage")
                } else {
                    pqtype("NullRawMessage")
                }
            }
        }
    }

    fn custom(&self, column: &Column, not_null: bool) -> Option<GoType> {
        let ty = column.ty.as_ref()?;

        self.custom_types
            .find(ty.schema_or(self.default_schema), &ty.name, !not_null)
            .map(|custom| custom.go_type.clone())
    }
}

impl TypeTransformer for PostgresTransformer<'_> {
    fn to_go_type(&self, column: &Column) -> GoType {
        let not_null = column.effective_not_null();
        let data_type = column.data_type();

        self.builtin(not_null, &data_type)
            .or_else(|| self.custom(column, not_null))
            .unwrap_or_else(|| unknown_type(SqlEngine::Postgresql, &data_type))
    }
}

fn pgtype(name: &str) -> GoType {
    GoType::parse(&format!("{PGTYPE}.{name}"))
}

fn pgtype_v4(name: &str) -> GoType {
    GoType::parse(&format!("{PGTYPE_V4}.{name}"))
}

fn pqtype(name: &str) -> GoType {
    GoType::parse(&format!("{PQTYPE}.{name}"))
}

fn by_version(driver: SqlDriver, name: &str) -> GoType {
    if driver == SqlDriver::PgxV5 {
        pgtype(name)
    } else {
        pgtype_v4(name)
    }
}
