//! Loader resolver: turns a catalog snapshot and the plugin options into the
//! loader model the renderer consumes.
//!
//! Stages run in order and never look back: naming, custom types, engine
//! type maps, overrides, struct building, cache assignment.

pub mod custom_type;
pub mod gotype;
pub mod loader;
pub mod model;
pub mod naming;

#[cfg(test)]
mod test_support;

use crate::{
    custom_type::build_custom_types,
    loader::{LoaderEntity, assign_cache},
    model::{Struct, build_structs},
};
use sqlc_loader_config::{ConfigError, Options};
use sqlc_loader_schema::{node::Identifier, request::GenerateRequest};

///
/// Resolution
///
/// Output of one run: every reachable struct, and the loader entities built
/// from the eligible, non-excluded ones.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution<'a> {
    pub structs: Vec<Struct<'a>>,
    pub loaders: Vec<LoaderEntity<'a>>,
}

impl Resolution<'_> {
    /// Reachable tables that got no loader.
    pub fn dropped_tables(&self) -> impl Iterator<Item = &Identifier> {
        self.structs
            .iter()
            .map(|s| &s.table)
            .filter(move |table| !self.loaders.iter().any(|l| l.structure.table == **table))
    }
}

/// Resolve `request` under finalized `options`.
///
/// Only configuration problems fail; tables that cannot back a loader are
/// left out of `loaders`.
pub fn resolve<'a>(
    request: &'a GenerateRequest,
    options: &Options,
) -> Result<Resolution<'a>, ConfigError> {
    let dest_package = Some(options.model_package()).filter(|_| !options.model_import.is_empty());
    let custom_types = build_custom_types(&request.catalog.schemas, options, dest_package);

    let structs = build_structs(request, options, &custom_types)?;
    let loaders = assign_cache(&structs, &options.cache, &options.exclude_tables)?;

    tracing::info!(
        engine = %request.settings.engine,
        custom_types = custom_types.len(),
        structs = structs.len(),
        loaders = loaders.len(),
        "resolved loader model"
    );

    Ok(Resolution { structs, loaders })
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Resolution,
        custom_type::{CustomType, CustomTypeKind, CustomTypes},
        gotype::{GoType, Import, TypeTransformer},
        loader::LoaderEntity,
        model::{Field, Struct},
        resolve,
    };
}
