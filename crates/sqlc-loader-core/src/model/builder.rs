use crate::{
    custom_type::CustomTypes,
    gotype::{EngineTransformer, GoType, GoTypeFormatter, TypeTransformer},
    model::{Field, Struct},
    naming::NameNormalizer,
};
use sqlc_loader_config::{ConfigError, Options};
use sqlc_loader_schema::{
    is_reserved_schema,
    node::{Column, Identifier, Schema, Table},
    request::GenerateRequest,
};
use std::collections::{BTreeMap, BTreeSet};

/// Field name a primary key is recognized by when no key is configured.
pub const PRIMARY_KEY_FIELD: &str = "id";

///
/// StructBuilder
///
/// Builds one struct per table reached by a query, in catalog order.
///

pub struct StructBuilder<'a, 'o> {
    request: &'a GenerateRequest,
    options: &'o Options,
    names: NameNormalizer<'o>,
    types: GoTypeFormatter<'o, EngineTransformer<'o>>,
}

impl<'a, 'o> StructBuilder<'a, 'o> {
    /// Fails only on an unsupported `settings.engine`.
    pub fn new(
        request: &'a GenerateRequest,
        options: &'o Options,
        custom_types: &'o CustomTypes,
    ) -> Result<Self, ConfigError> {
        let transformer = EngineTransformer::new(&request.settings.engine, options, custom_types)?;

        Ok(Self {
            request,
            options,
            names: NameNormalizer::new(options),
            types: GoTypeFormatter::new(transformer, options),
        })
    }

    #[must_use]
    pub fn build(&self) -> Vec<Struct<'a>> {
        let reachable = self.request.reachable_tables(&self.options.default_schema);

        self.request
            .catalog
            .schemas
            .iter()
            .filter(|schema| !is_reserved_schema(&schema.name))
            .flat_map(|schema| schema.tables.iter().map(move |table| (schema, table)))
            .filter(|(schema, table)| {
                reachable.contains(&Identifier::new(schema.name.as_str(), table.rel.name.as_str()))
            })
            .map(|(schema, table)| self.build_struct(schema, table))
            .collect()
    }

    fn build_struct(&self, schema: &'a Schema, table: &'a Table) -> Struct<'a> {
        let ident = Identifier::new(schema.name.as_str(), table.rel.name.as_str());
        let mut path = vec![ident.clone()];
        let mut fields = self.build_fields(&ident, table, &mut path);
        self.mark_primary_key(&ident, &mut fields);

        Struct {
            ty: self.struct_type(&schema.name, &table.rel.name),
            table: ident,
            comment: table.comment.clone(),
            fields,
        }
    }

    fn build_fields(
        &self,
        ident: &Identifier,
        table: &'a Table,
        path: &mut Vec<Identifier>,
    ) -> Vec<Field<'a>> {
        let mut used = BTreeSet::new();

        table
            .columns
            .iter()
            .filter(|column| !self.lists_column(&self.options.ignore_columns, ident, &column.name))
            .map(|column| {
                let mut field = self.build_field(column, path);
                field.name = unique_name(&mut used, field.name);
                field
            })
            .collect()
    }

    fn build_field(&self, column: &'a Column, path: &mut Vec<Identifier>) -> Field<'a> {
        let (ty, embed_table, embed_fields) = match self.embedded_table(column, path) {
            Some((schema, table)) => {
                let ident = Identifier::new(schema.name.as_str(), table.rel.name.as_str());
                path.push(ident.clone());
                let fields = self.build_fields(&ident, table, path);
                path.pop();

                (self.struct_type(&schema.name, &table.rel.name), Some(ident), fields)
            }
            None => (self.types.to_go_type(column), None, Vec::new()),
        };

        let mut tags = BTreeMap::new();
        if self.options.emit_db_tags {
            tags.insert("db".to_string(), column.name.clone());
        }
        if self.options.emit_json_tags {
            tags.insert("json".to_string(), self.names.json_tag(&column.name));
        }

        Field {
            name: self.names.field_name(&column.name),
            db_name: column.name.clone(),
            ty,
            tags,
            comment: column.comment.clone(),
            is_primary_key: false,
            embed_table,
            embed_fields,
            column,
        }
    }

    // catalog table a column embeds, unless it is already being built
    fn embedded_table(
        &self,
        column: &Column,
        path: &[Identifier],
    ) -> Option<(&'a Schema, &'a Table)> {
        let target = column
            .embed_table
            .as_ref()?
            .qualified_with(&self.options.default_schema);

        if path.iter().any(|seen| seen.schema == target.schema && seen.name == target.name) {
            tracing::debug!(table = %target, "embedded table already on the path, using a plain column");
            return None;
        }

        self.request.catalog.find_table(&target)
    }

    fn struct_type(&self, schema: &str, table: &str) -> GoType {
        let ty = GoType::named(&self.names.struct_name(schema, table));

        if self.options.model_import.is_empty() {
            ty
        } else {
            ty.within(self.options.model_package(), Some(&self.options.model_import))
        }
    }

    /// Configured keys first; otherwise every not-null `id` column is a
    /// candidate. More than one flagged key leaves the struct ineligible.
    fn mark_primary_key(&self, ident: &Identifier, fields: &mut [Field<'a>]) {
        let configured: Vec<usize> = fields
            .iter()
            .enumerate()
            .filter(|(_, field)| {
                self.lists_column(&self.options.primary_keys_columns, ident, &field.db_name)
            })
            .map(|(i, _)| i)
            .collect();

        let keys = if configured.is_empty() {
            fields
                .iter()
                .enumerate()
                .filter(|(_, field)| {
                    !field.is_embedded()
                        && field.column.not_null
                        && self
                            .names
                            .field_name(&field.db_name)
                            .eq_ignore_ascii_case(PRIMARY_KEY_FIELD)
                })
                .map(|(i, _)| i)
                .collect()
        } else {
            configured
        };

        for i in keys {
            fields[i].is_primary_key = true;
        }
    }

    // `table.column` entry naming this column; the table part is bare in the
    // default schema or schema-qualified anywhere
    fn lists_column(&self, entries: &[String], ident: &Identifier, column: &str) -> bool {
        entries.iter().any(|entry| {
            entry.rsplit_once('.').is_some_and(|(table, name)| {
                name == column
                    && (table == ident.data_type()
                        || (ident.schema == self.options.default_schema && table == ident.name))
            })
        })
    }
}

fn unique_name(used: &mut BTreeSet<String>, name: String) -> String {
    if used.insert(name.clone()) {
        return name;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{name}{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
