//! ## Crate layout
//! - `schema`: the catalog snapshot sqlc hands to a plugin.
//! - `config`: plugin options, override rules and cache entries.
//! - `core`: the resolver producing structs and loader entities.
//! - `build`: file planning, imports and the template renderer seam.
//!
//! [`generate`] runs the whole pipeline for one request; [`resolve`] stops at
//! the loader model.

pub use sqlc_loader_build as build;
pub use sqlc_loader_config as config;
pub use sqlc_loader_core as core;
pub use sqlc_loader_schema as schema;

pub use sqlc_loader_build::{File, GenerateResponse, JsonRenderer, RenderError, TemplateRenderer};
pub use sqlc_loader_config::{ConfigError, Options};
pub use sqlc_loader_core::{Resolution, resolve};

use sqlc_loader_schema::request::GenerateRequest;
use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Read the options carried by `request`, resolve its catalog and render
/// every loader file with `renderer`.
pub fn generate(
    request: &GenerateRequest,
    renderer: &dyn TemplateRenderer,
) -> Result<GenerateResponse, Error> {
    let options = Options::from_request(request)?;
    let resolution = resolve(request, &options)?;

    for table in resolution.dropped_tables() {
        tracing::debug!(%table, "no loader generated");
    }

    let response = sqlc_loader_build::generate(&resolution, &options, renderer)?;
    tracing::info!(
        package = %options.package,
        files = response.files.len(),
        "generated loaders"
    );

    Ok(response)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, GenerateResponse, JsonRenderer, Options, Resolution, TemplateRenderer, generate,
        resolve,
    };
    pub use sqlc_loader_config::prelude::*;
    pub use sqlc_loader_core::prelude::*;
    pub use sqlc_loader_schema::{node::Identifier, request::GenerateRequest};
}
