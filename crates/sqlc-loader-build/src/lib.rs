//! Render preparation: file names, template data and per-file imports for a
//! resolved loader model, and the seam to the template engine.

pub mod imports;
pub mod plan;
pub mod render;

#[cfg(test)]
mod test_support;

pub use plan::{FactoryData, FactoryFile, LoaderData, LoaderFile, RenderPlan};
pub use render::{File, GenerateResponse, JsonRenderer, RenderError, TemplateRenderer};

use sqlc_loader_config::Options;
use sqlc_loader_core::Resolution;

/// Plan and render every file of `resolution`.
pub fn generate(
    resolution: &Resolution<'_>,
    options: &Options,
    renderer: &dyn TemplateRenderer,
) -> Result<GenerateResponse, RenderError> {
    let plan = RenderPlan::new(resolution, options);
    let mut files = Vec::with_capacity(plan.loaders.len() + 1);

    for loader in &plan.loaders {
        let contents = renderer.render_loader(&loader.data)?;
        files.push(file(&loader.name, contents)?);
    }
    if let Some(factory) = &plan.factory {
        let contents = renderer.render_factory(&factory.data)?;
        files.push(file(&factory.name, contents)?);
    }

    tracing::debug!(files = files.len(), "rendered loader files");

    Ok(GenerateResponse { files })
}

fn file(name: &str, contents: String) -> Result<File, RenderError> {
    if contents.trim().is_empty() {
        return Err(RenderError::EmptyOutput(name.to_string()));
    }

    Ok(File {
        name: name.to_string(),
        contents: contents.into_bytes(),
    })
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        GenerateResponse, JsonRenderer, RenderError, RenderPlan, TemplateRenderer, generate,
    };
}
