mod support;

use proptest::prelude::*;
use support::{authors_request, resolved};

fn name_type(plugin: &str) -> String {
    let request = authors_request(plugin);
    resolved(&request, |resolution| {
        resolution.structs[0].field("Name").unwrap().ty.to_string()
    })
}

#[test]
fn column_rule_wins_over_type_rule() {
    let ty = name_type(
        r#"{
            "package": "dataloader",
            "overrides": [
                { "db_type": "text", "nullable": true, "go_type": "*string" },
                { "column": "authors.name", "go_type": "github.com/guregu/null/v5.String" }
            ]
        }"#,
    );
    assert_eq!(ty, "null.String");
}

#[test]
fn nullable_type_rules_apply_to_nullable_columns() {
    let nullable = name_type(
        r#"{ "package": "dataloader", "overrides": [{ "db_type": "text", "nullable": true, "go_type": "*string" }] }"#,
    );
    assert_eq!(nullable, "*string");

    let not_null_only = name_type(
        r#"{ "package": "dataloader", "overrides": [{ "db_type": "text", "go_type": "*string" }] }"#,
    );
    assert_eq!(not_null_only, "sql.NullString");
}

#[test]
fn first_matching_type_rule_wins() {
    let ty = name_type(
        r#"{
            "package": "dataloader",
            "overrides": [
                { "db_type": "text", "nullable": true, "go_type": "*string" },
                { "db_type": "text", "nullable": true, "go_type": "string" }
            ]
        }"#,
    );
    assert_eq!(ty, "*string");
}

#[test]
fn expanded_go_type_form() {
    let ty = name_type(
        r#"{
            "package": "dataloader",
            "overrides": [{
                "column": "public.authors.name",
                "go_type": { "import": "github.com/guregu/null/v5", "package": "null", "type": "String" }
            }]
        }"#,
    );
    assert_eq!(ty, "null.String");
}

#[test]
fn override_on_the_key_changes_the_loader_key() {
    let request = authors_request(
        r#"{ "package": "dataloader", "overrides": [{ "column": "authors.id", "go_type": "string" }] }"#,
    );

    resolved(&request, |resolution| {
        let key = resolution.loaders[0].primary_key().unwrap();
        assert_eq!(key.ty.to_string(), "string");
    });
}

#[test]
fn rules_without_a_type_are_inert() {
    let ty = name_type(
        r#"{ "package": "dataloader", "overrides": [{ "column": "authors.name" }] }"#,
    );
    assert_eq!(ty, "sql.NullString");
}

proptest! {
    #[test]
    fn column_rule_wins_in_any_position(column_first: bool) {
        let column = r#"{ "column": "authors.name", "go_type": "github.com/guregu/null/v5.String" }"#;
        let db_type = r#"{ "db_type": "text", "nullable": true, "go_type": "*string" }"#;
        let rules = if column_first {
            format!("[{column}, {db_type}]")
        } else {
            format!("[{db_type}, {column}]")
        };

        let ty = name_type(&format!(r#"{{ "package": "dataloader", "overrides": {rules} }}"#));
        prop_assert_eq!(ty, "null.String");
    }
}
