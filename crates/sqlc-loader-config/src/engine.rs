use crate::ConfigError;
use derive_more::Display;
use std::str::FromStr;

///
/// SqlEngine
///
/// Source database dialect. Selecting the type map is a pure function of
/// this tag; an unknown engine never gets past construction.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum SqlEngine {
    #[display("mysql")]
    MySql,

    #[display("postgresql")]
    Postgresql,

    #[display("sqlite")]
    Sqlite,
}

impl FromStr for SqlEngine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::UnsupportedEngine(other.to_string())),
        }
    }
}

///
/// SqlDriver
///
/// Low-level Go driver implied by the `sql_package` option.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum SqlDriver {
    #[default]
    #[display("github.com/lib/pq")]
    LibPq,

    #[display("github.com/jackc/pgx/v4")]
    PgxV4,

    #[display("github.com/jackc/pgx/v5")]
    PgxV5,
}

impl SqlDriver {
    /// Map the `sql_package` option onto a driver; anything that is not a
    /// pgx package runs on `database/sql`.
    #[must_use]
    pub fn from_sql_package(sql_package: &str) -> Self {
        match sql_package {
            "pgx/v4" => Self::PgxV4,
            "pgx/v5" => Self::PgxV5,
            _ => Self::LibPq,
        }
    }

    #[must_use]
    pub const fn is_pgx(self) -> bool {
        matches!(self, Self::PgxV4 | Self::PgxV5)
    }

    /// Import path generated loaders use for the driver's `ErrNoRows`.
    #[must_use]
    pub const fn import_path(self) -> &'static str {
        match self {
            Self::PgxV4 => "github.com/jackc/pgx/v4",
            Self::PgxV5 => "github.com/jackc/pgx/v5",
            Self::LibPq => "database/sql",
        }
    }
}
