//! Struct/field model of the tables the queries reach.

mod builder;
mod field;
mod structure;

pub use builder::{PRIMARY_KEY_FIELD, StructBuilder};
pub use field::Field;
pub use structure::Struct;

use crate::custom_type::CustomTypes;
use sqlc_loader_config::{ConfigError, Options};
use sqlc_loader_schema::request::GenerateRequest;

/// Build every reachable struct of `request`.
pub fn build_structs<'a>(
    request: &'a GenerateRequest,
    options: &Options,
    custom_types: &CustomTypes,
) -> Result<Vec<Struct<'a>>, ConfigError> {
    Ok(StructBuilder::new(request, options, custom_types)?.build())
}
