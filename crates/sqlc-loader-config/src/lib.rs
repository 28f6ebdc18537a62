//! Plugin configuration: the JSON options document sqlc forwards to the
//! plugin, merged with the global options, validated once per run.
//!
//! Nothing here is mutated after [`Options::from_request`] returns.

pub mod cache;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod rule;

pub use cache::{CacheEntry, CachePolicy};
pub use engine::{SqlDriver, SqlEngine};
pub use error::ConfigError;
pub use rule::{GoTypeSpec, Override, OverrideKind};

use serde::Deserialize;
use sqlc_loader_schema::{FALLBACK_SCHEMA, request::GenerateRequest};
use std::collections::{BTreeMap, BTreeSet};

/// Initialisms used when the options leave the list unset.
pub const DEFAULT_INITIALISMS: [&str; 1] = ["id"];

///
/// JsonTagStyle
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum JsonTagStyle {
    Camel,
    Pascal,
    Snake,
    #[default]
    None,
}

///
/// Options
///
/// Plugin options document. Field names follow the sqlc `plugins` options
/// keys so existing `sqlc.yaml` files carry over unchanged.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    pub emit_exact_table_names: bool,
    pub package: String,
    pub out: String,
    pub overrides: Vec<Override>,
    pub rename: BTreeMap<String, String>,
    pub default_schema: String,
    pub inflection_exclude_table_names: Vec<String>,
    pub initialisms: Option<Vec<String>>,
    pub sql_package: String,
    pub emit_pointers_for_null_types: bool,
    pub emit_db_tags: bool,
    pub emit_json_tags: bool,
    pub json_tags_case_style: JsonTagStyle,

    /// `table.column` entries designating primary keys.
    pub primary_keys_columns: Vec<String>,

    /// `table.column` entries left out of the built structs.
    pub ignore_columns: Vec<String>,

    /// Go import path of the package holding the model structs.
    pub model_import: String,

    pub cache: Vec<CacheEntry>,

    /// Fully-qualified tables (`public.authors`) that get no loader.
    pub exclude_tables: Vec<String>,

    #[serde(skip)]
    initialism_set: BTreeSet<String>,
}

///
/// GlobalOptions
///
/// Options shared by every plugin in the sqlc config.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GlobalOptions {
    pub overrides: Vec<Override>,
    pub rename: BTreeMap<String, String>,
}

impl Options {
    /// Parse, merge and validate the option documents carried by `request`.
    pub fn from_request(request: &GenerateRequest) -> Result<Self, ConfigError> {
        let mut options: Self = parse_json(&request.plugin_options, "plugin")?;
        let global: GlobalOptions = parse_json(&request.global_options, "global")?;

        options.merge_global(global);
        options.finalize(&request.catalog.default_schema)?;

        Ok(options)
    }

    /// Parse a standalone TOML options file.
    pub fn from_toml(source: &str, catalog_default_schema: &str) -> Result<Self, ConfigError> {
        let mut options: Self = toml::from_str(source)?;
        options.finalize(catalog_default_schema)?;

        Ok(options)
    }

    /// Validate the document and compile derived state.
    ///
    /// Global overrides must already be merged: override patterns compile
    /// against the resolved default schema.
    pub fn finalize(&mut self, catalog_default_schema: &str) -> Result<(), ConfigError> {
        if self.package.is_empty() {
            self.package = self
                .out
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty() && *segment != ".")
                .ok_or(ConfigError::MissingPackage)?
                .to_string();
        }

        if self.default_schema.is_empty() {
            self.default_schema = if catalog_default_schema.is_empty() {
                FALLBACK_SCHEMA.to_string()
            } else {
                catalog_default_schema.to_string()
            };
        }

        let default_schema = self.default_schema.clone();
        for rule in &mut self.overrides {
            rule.compile(&default_schema)?;
        }

        for entry in &self.cache {
            entry.policy()?;
        }

        self.initialism_set = self
            .initialisms
            .get_or_insert_with(|| DEFAULT_INITIALISMS.map(String::from).to_vec())
            .iter()
            .map(|initialism| initialism.to_lowercase())
            .collect();

        Ok(())
    }

    fn merge_global(&mut self, global: GlobalOptions) {
        if !global.overrides.is_empty() {
            let local = std::mem::take(&mut self.overrides);
            self.overrides = global.overrides;
            self.overrides.extend(local);
        }
        self.rename.extend(global.rename);
    }

    #[must_use]
    pub fn driver(&self) -> SqlDriver {
        SqlDriver::from_sql_package(&self.sql_package)
    }

    /// Lower-cased initialisms for case-insensitive token matching.
    #[must_use]
    pub const fn initialism_set(&self) -> &BTreeSet<String> {
        &self.initialism_set
    }

    /// Package name of the model structs: the last segment of `model_import`,
    /// or the loader package when no model import is configured.
    #[must_use]
    pub fn model_package(&self) -> &str {
        self.model_import
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(&self.package)
    }
}

fn parse_json<T>(bytes: &[u8], document: &'static str) -> Result<T, ConfigError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if bytes.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes).map_err(|source| ConfigError::ParseJson { document, source })
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        CacheEntry, CachePolicy, ConfigError, GoTypeSpec, JsonTagStyle, Options, Override,
        OverrideKind, SqlDriver, SqlEngine,
    };
}
