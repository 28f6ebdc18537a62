//! Identifier normalization: SQL names into Go identifiers.

mod inflection;

pub use inflection::singularize;

use convert_case::{Case, Casing};
use sqlc_loader_config::{JsonTagStyle, Options};

///
/// NameNormalizer
///
/// Pure function of the options. An identifier that normalizes to nothing
/// comes back empty; callers keep the raw name in that case.
///

#[derive(Clone, Copy, Debug)]
pub struct NameNormalizer<'a> {
    options: &'a Options,
}

impl<'a> NameNormalizer<'a> {
    #[must_use]
    pub const fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Canonical SQL name: `raw` inside the default schema, `schema_raw`
    /// anywhere else.
    #[must_use]
    pub fn normalize_sql_name(&self, schema: &str, raw: &str) -> String {
        if schema.is_empty() || schema == self.options.default_schema {
            raw.to_string()
        } else {
            format!("{schema}_{raw}")
        }
    }

    /// Go identifier for a canonical name. An exact `rename` entry wins;
    /// otherwise every `_`-separated token is capitalized, initialisms in
    /// full.
    #[must_use]
    pub fn normalize_go_type(&self, canonical: &str) -> String {
        if let Some(renamed) = self.options.rename.get(canonical) {
            return renamed.clone();
        }

        let initialisms = self.options.initialism_set();
        let cleaned: String = canonical
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        let mut out = String::with_capacity(cleaned.len());
        for token in cleaned.split('_') {
            if initialisms.contains(&token.to_lowercase()) {
                out.push_str(&token.to_uppercase());
            } else {
                let mut chars = token.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
        }

        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }

        out
    }

    /// Go type name for a schema-scoped SQL type such as an enum, or `raw`
    /// when it normalizes to nothing.
    #[must_use]
    pub fn type_name(&self, schema: &str, raw: &str) -> String {
        match self.normalize_go_type(&self.normalize_sql_name(schema, raw)) {
            normalized if normalized.is_empty() => raw.to_string(),
            normalized => normalized,
        }
    }

    /// Struct type name for a table.
    #[must_use]
    pub fn struct_name(&self, schema: &str, table: &str) -> String {
        let canonical = self.normalize_sql_name(schema, table);
        if let Some(renamed) = self.options.rename.get(&canonical) {
            return renamed.clone();
        }

        let name = if self.options.emit_exact_table_names
            || self.is_inflection_excluded(&canonical, table)
        {
            canonical
        } else {
            singularize(&canonical, &self.options.inflection_exclude_table_names)
        };

        match self.normalize_go_type(&name) {
            normalized if normalized.is_empty() => name,
            normalized => normalized,
        }
    }

    /// Go field name for a column.
    #[must_use]
    pub fn field_name(&self, column: &str) -> String {
        match self.normalize_go_type(column) {
            normalized if normalized.is_empty() => column.to_string(),
            normalized => normalized,
        }
    }

    /// `json` tag value for a column in the configured case style.
    #[must_use]
    pub fn json_tag(&self, column: &str) -> String {
        let case = match self.options.json_tags_case_style {
            JsonTagStyle::Camel => Case::Camel,
            JsonTagStyle::Pascal => Case::Pascal,
            JsonTagStyle::Snake => Case::Snake,
            JsonTagStyle::None => return column.to_string(),
        };

        column.to_case(case)
    }

    fn is_inflection_excluded(&self, canonical: &str, table: &str) -> bool {
        self.options
            .inflection_exclude_table_names
            .iter()
            .any(|ex| ex.eq_ignore_ascii_case(canonical) || ex.eq_ignore_ascii_case(table))
    }
}
