//! Go type resolution: per-engine type maps and the override engine that
//! wraps them.

mod formatter;
mod go_type;
mod mysql;
mod postgres;
mod sqlite;

pub use formatter::GoTypeFormatter;
pub use go_type::{GoType, Import};
pub use mysql::MySqlTransformer;
pub use postgres::PostgresTransformer;
pub use sqlite::SqliteTransformer;

use crate::custom_type::CustomTypes;
use sqlc_loader_config::{ConfigError, Options, SqlEngine};
use sqlc_loader_schema::node::Column;

/// Empty-interface fallback for types no map knows.
pub const ANY_TYPE: &str = "interface{}";

///
/// TypeTransformer
///
/// Maps one column to its Go type. Implementations are pure: the same column
/// under the same options always yields the same type.
///

pub trait TypeTransformer {
    fn to_go_type(&self, column: &Column) -> GoType;
}

///
/// EngineTransformer
///
/// Type map of the configured SQL engine. The engine string is checked here,
/// so an unknown engine fails before any column is resolved.
///

#[derive(Clone, Copy, Debug)]
pub enum EngineTransformer<'a> {
    MySql(MySqlTransformer<'a>),
    Postgresql(PostgresTransformer<'a>),
    Sqlite(SqliteTransformer),
}

impl<'a> EngineTransformer<'a> {
    pub fn new(
        engine: &str,
        options: &'a Options,
        custom_types: &'a CustomTypes,
    ) -> Result<Self, ConfigError> {
        let transformer = match engine.parse::<SqlEngine>()? {
            SqlEngine::MySql => Self::MySql(MySqlTransformer::new(options, custom_types)),
            SqlEngine::Postgresql => {
                Self::Postgresql(PostgresTransformer::new(options, custom_types))
            }
            SqlEngine::Sqlite => Self::Sqlite(SqliteTransformer::new(options)),
        };

        Ok(transformer)
    }

    #[must_use]
    pub const fn engine(&self) -> SqlEngine {
        match self {
            Self::MySql(_) => SqlEngine::MySql,
            Self::Postgresql(_) => SqlEngine::Postgresql,
            Self::Sqlite(_) => SqlEngine::Sqlite,
        }
    }
}

impl TypeTransformer for EngineTransformer<'_> {
    fn to_go_type(&self, column: &Column) -> GoType {
        match self {
            Self::MySql(t) => t.to_go_type(column),
            Self::Postgresql(t) => t.to_go_type(column),
            Self::Sqlite(t) => t.to_go_type(column),
        }
    }
}

/// `base` for a not-null column, `*base` when pointers stand in for nulls,
/// `null` otherwise.
fn nullable(not_null: bool, pointers: bool, base: &str, null: &str) -> GoType {
    if not_null {
        GoType::parse(base)
    } else if pointers {
        GoType::parse(&format!("*{base}"))
    } else {
        GoType::parse(null)
    }
}

fn unknown_type(engine: SqlEngine, data_type: &str) -> GoType {
    tracing::debug!(%engine, data_type, "unknown sql type, falling back to an empty interface");

    GoType::named(ANY_TYPE)
}
