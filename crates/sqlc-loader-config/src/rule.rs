use crate::{ConfigError, pattern::Pattern};
use serde::Deserialize;
use sqlc_loader_schema::node::Identifier;

///
/// GoTypeSpec
///
/// Replacement type as written in the options: either a single spec string
/// (`github.com/google/uuid.UUID`, `*string`) or the expanded object form.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum GoTypeSpec {
    Spec(String),

    Detailed {
        #[serde(default)]
        import: String,

        #[serde(default)]
        package: String,

        #[serde(default, rename = "type")]
        type_name: String,

        #[serde(default)]
        pointer: bool,

        #[serde(default)]
        slice: bool,
    },
}

impl GoTypeSpec {
    /// An override without a type name never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Spec(spec) => spec.is_empty(),
            Self::Detailed { type_name, .. } => type_name.is_empty(),
        }
    }
}

impl Default for GoTypeSpec {
    fn default() -> Self {
        Self::Spec(String::new())
    }
}

///
/// OverrideKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverrideKind {
    /// Matches `[catalog.][schema.]table.column`.
    Column,

    /// Matches declared SQL type, nullability and signedness.
    DbType,
}

///
/// Override
///
/// One entry of the ordered override list. Rules are compiled once by
/// [`Override::compile`]; configuration order is the disambiguation contract.
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Override {
    #[serde(default)]
    pub go_type: GoTypeSpec,

    #[serde(default)]
    pub db_type: String,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub unsigned: bool,

    #[serde(default)]
    pub column: String,

    #[serde(skip)]
    matcher: Option<ColumnMatcher>,
}

#[derive(Clone, Debug)]
struct ColumnMatcher {
    catalog: Option<Pattern>,
    schema: Pattern,
    table: Pattern,
    column: Pattern,
}

impl Override {
    /// Column-match override built from a `[catalog.][schema.]table.column` specifier.
    pub fn for_column(
        column: &str,
        go_type: GoTypeSpec,
        default_schema: &str,
    ) -> Result<Self, ConfigError> {
        let mut rule = Self {
            go_type,
            column: column.to_string(),
            ..Self::default()
        };
        rule.compile(default_schema)?;

        Ok(rule)
    }

    /// Type-match override keyed on declared SQL type.
    #[must_use]
    pub fn for_db_type(db_type: &str, nullable: bool, unsigned: bool, go_type: GoTypeSpec) -> Self {
        Self {
            go_type,
            db_type: db_type.to_string(),
            nullable,
            unsigned,
            ..Self::default()
        }
    }

    /// Validate the target combination and compile column globs.
    pub fn compile(&mut self, default_schema: &str) -> Result<(), ConfigError> {
        match (self.column.is_empty(), self.db_type.is_empty()) {
            (false, false) => {
                return Err(ConfigError::OverrideTarget(format!(
                    "Override specifying both `column` ({:?}) and `db_type` ({:?}) is not valid.",
                    self.column, self.db_type
                )));
            }
            (true, true) => {
                return Err(ConfigError::OverrideTarget(
                    "Override must specify one of either `column` or `db_type`".to_string(),
                ));
            }
            _ => {}
        }

        if self.column.is_empty() {
            return Ok(());
        }

        let parts: Vec<&str> = self.column.split('.').collect();
        let (catalog, schema, table, column) = match parts.as_slice() {
            [table, column] => (None, default_schema, *table, *column),
            [schema, table, column] => (None, *schema, *table, *column),
            [catalog, schema, table, column] => (Some(*catalog), *schema, *table, *column),
            _ => return Err(ConfigError::OverrideSpecifier(self.column.clone())),
        };

        self.matcher = Some(ColumnMatcher {
            catalog: catalog.map(Pattern::compile).transpose()?,
            schema: Pattern::compile(schema)?,
            table: Pattern::compile(table)?,
            column: Pattern::compile(column)?,
        });

        Ok(())
    }

    #[must_use]
    pub fn kind(&self) -> OverrideKind {
        if self.column.is_empty() {
            OverrideKind::DbType
        } else {
            OverrideKind::Column
        }
    }

    /// Whether the owning table satisfies this rule's table predicate. An
    /// empty table schema is qualified with `default_schema` first.
    #[must_use]
    pub fn matches_table(&self, table: Option<&Identifier>, default_schema: &str) -> bool {
        let (Some(matcher), Some(table)) = (&self.matcher, table) else {
            return false;
        };

        if let Some(catalog) = &matcher.catalog
            && !catalog.is_match(&table.catalog)
        {
            return false;
        }

        matcher.schema.is_match(table.schema_or(default_schema)) && matcher.table.is_match(&table.name)
    }

    #[must_use]
    pub fn matches_column_name(&self, name: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.column.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(s: &str) -> GoTypeSpec {
        GoTypeSpec::Spec(s.to_string())
    }

    #[test]
    fn rejects_both_or_neither_target() {
        let mut both = Override {
            column: "authors.id".to_string(),
            db_type: "uuid".to_string(),
            go_type: spec("string"),
            ..Override::default()
        };
        assert!(matches!(
            both.compile("public"),
            Err(ConfigError::OverrideTarget(_))
        ));

        let mut neither = Override {
            go_type: spec("string"),
            ..Override::default()
        };
        assert!(matches!(
            neither.compile("public"),
            Err(ConfigError::OverrideTarget(_))
        ));
    }

    #[test]
    fn rejects_bad_column_arity() {
        let err = Override::for_column("id", spec("string"), "public").unwrap_err();
        assert!(matches!(err, ConfigError::OverrideSpecifier(ref s) if s == "id"));

        let err = Override::for_column("a.b.c.d.e", spec("string"), "public").unwrap_err();
        assert!(matches!(err, ConfigError::OverrideSpecifier(_)));
    }

    #[test]
    fn two_part_column_uses_default_schema() {
        let rule = Override::for_column("authors.id", spec("string"), "public").unwrap();
        assert_eq!(rule.kind(), OverrideKind::Column);

        let public = Identifier::new("public", "authors");
        let bare = Identifier::unqualified("authors");
        let other = Identifier::new("audit", "authors");

        assert!(rule.matches_table(Some(&public), "public"));
        assert!(rule.matches_table(Some(&bare), "public"));
        assert!(!rule.matches_table(Some(&other), "public"));
        assert!(!rule.matches_table(None, "public"));
        assert!(rule.matches_column_name("id"));
        assert!(!rule.matches_column_name("name"));
    }

    #[test]
    fn globbed_schema_and_table() {
        let rule = Override::for_column("*.auth*.created_at", spec("time.Time"), "public").unwrap();

        assert!(rule.matches_table(Some(&Identifier::new("audit", "authors")), "public"));
        assert!(rule.matches_table(Some(&Identifier::new("public", "auth")), "public"));
        assert!(!rule.matches_table(Some(&Identifier::new("public", "books")), "public"));
    }

    #[test]
    fn db_type_rules_have_no_table_predicate() {
        let rule = Override::for_db_type("uuid", false, false, spec("string"));
        assert_eq!(rule.kind(), OverrideKind::DbType);
        assert!(!rule.matches_table(Some(&Identifier::new("public", "authors")), "public"));
    }

    #[test]
    fn go_type_accepts_string_and_object_forms() {
        let rules: Vec<Override> = serde_json::from_str(
            r#"[
                { "db_type": "uuid", "go_type": "github.com/gofrs/uuid.UUID" },
                { "column": "authors.id", "go_type": { "import": "github.com/google/uuid", "type": "UUID", "pointer": true } }
            ]"#,
        )
        .unwrap();

        assert_eq!(rules[0].go_type, spec("github.com/gofrs/uuid.UUID"));
        assert!(matches!(
            &rules[1].go_type,
            GoTypeSpec::Detailed { import, type_name, pointer: true, .. }
                if import == "github.com/google/uuid" && type_name == "UUID"
        ));
        assert!(GoTypeSpec::default().is_empty());
    }
}
