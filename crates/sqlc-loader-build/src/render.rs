use crate::plan::{FactoryData, LoaderData};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// RenderError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum RenderError {
    #[error("renderer produced no output for '{0}'")]
    EmptyOutput(String),

    #[error("serializing template data for '{file}': {source}")]
    Serialize {
        file: String,
        source: serde_json::Error,
    },

    #[error("template '{template}' failed: {message}")]
    Template { template: String, message: String },
}

///
/// TemplateRenderer
///
/// Turns planned template data into Go source. The renderer is handed to
/// [`crate::generate`] explicitly; nothing here keeps templates globally.
///

pub trait TemplateRenderer {
    fn render_loader(&self, data: &LoaderData) -> Result<String, RenderError>;

    fn render_factory(&self, data: &FactoryData) -> Result<String, RenderError>;
}

///
/// JsonRenderer
///
/// Writes each file's template data as pretty JSON instead of Go source.
/// Useful for inspecting a plan.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn render<T: Serialize>(file: &str, data: &T) -> Result<String, RenderError> {
        serde_json::to_string_pretty(data).map_err(|source| RenderError::Serialize {
            file: file.to_string(),
            source,
        })
    }
}

impl TemplateRenderer for JsonRenderer {
    fn render_loader(&self, data: &LoaderData) -> Result<String, RenderError> {
        Self::render(&data.loader_name, data)
    }

    fn render_factory(&self, data: &FactoryData) -> Result<String, RenderError> {
        Self::render("loader_factory", data)
    }
}

///
/// File
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct File {
    pub name: String,
    pub contents: Vec<u8>,
}

///
/// GenerateResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GenerateResponse {
    pub files: Vec<File>,
}

impl GenerateResponse {
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|file| file.name == name)
    }
}
