use super::{GoType, TypeTransformer};
use sqlc_loader_config::{Options, Override, OverrideKind};
use sqlc_loader_schema::node::Column;

///
/// GoTypeFormatter
///
/// Override engine in front of an engine type map. Column-match rules are
/// tried before type-match rules, each kind in configured order; the first
/// match wins. Slice levels are applied last, to overridden and mapped types
/// alike.
///

#[derive(Clone, Copy, Debug)]
pub struct GoTypeFormatter<'a, T> {
    transformer: T,
    options: &'a Options,
}

impl<'a, T: TypeTransformer> GoTypeFormatter<'a, T> {
    #[must_use]
    pub const fn new(transformer: T, options: &'a Options) -> Self {
        Self {
            transformer,
            options,
        }
    }

    /// First override that applies to `column`, if any.
    #[must_use]
    pub fn matching_override(&self, column: &Column) -> Option<&'a Override> {
        let candidates = || {
            self.options
                .overrides
                .iter()
                .filter(|rule| !rule.go_type.is_empty())
        };

        candidates()
            .filter(|rule| rule.kind() == OverrideKind::Column)
            .find(|rule| {
                rule.matches_column_name(column.match_name())
                    && rule.matches_table(column.table.as_ref(), &self.options.default_schema)
            })
            .or_else(|| {
                let data_type = column.data_type();
                let not_null = column.effective_not_null();

                candidates()
                    .filter(|rule| rule.kind() == OverrideKind::DbType)
                    .find(|rule| {
                        rule.db_type == data_type
                            && rule.nullable != not_null
                            && rule.unsigned == column.unsigned
                    })
            })
    }
}

impl<T: TypeTransformer> TypeTransformer for GoTypeFormatter<'_, T> {
    fn to_go_type(&self, column: &Column) -> GoType {
        let base = self.matching_override(column).map_or_else(
            || self.transformer.to_go_type(column),
            |rule| GoType::from_spec(&rule.go_type),
        );

        if column.is_sqlc_slice {
            base.wrap_slice(1)
        } else if column.is_array {
            base.wrap_slice(column.array_dims.max(1) as usize)
        } else {
            base
        }
    }
}
