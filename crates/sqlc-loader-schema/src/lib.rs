//! Input model handed over by the sqlc host: the parsed catalog, the query
//! list, and the raw option documents of one generation run.
//!
//! Everything in here is read-only once deserialized. The resolver borrows
//! from these nodes; it never mutates them.

pub mod node;
pub mod request;

/// Schemas owned by the database itself, never scanned for user types.
pub const RESERVED_SCHEMAS: [&str; 2] = ["pg_catalog", "information_schema"];

/// Fallback schema used when neither the catalog nor the options name one.
pub const FALLBACK_SCHEMA: &str = "public";

/// Whether `schema` is one of the reserved system schemas.
#[must_use]
pub fn is_reserved_schema(schema: &str) -> bool {
    RESERVED_SCHEMAS.contains(&schema)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::*,
        request::{GenerateRequest, Settings},
    };
    pub use serde::{Deserialize, Serialize};
}
