//! Catalog fixtures shared by the integration tests.

#![allow(dead_code)]

use sqlc_loader::prelude::*;

const LIBRARY_CATALOG: &str = r#"{
    "default_schema": "public",
    "schemas": [{
        "name": "public",
        "enums": [{ "name": "status", "vals": ["active", "retired"] }],
        "tables": [
            {
                "rel": { "schema": "public", "name": "authors" },
                "columns": [
                    { "name": "id", "not_null": true, "type": { "name": "uuid" },
                      "table": { "schema": "public", "name": "authors" } },
                    { "name": "name", "type": { "name": "text" },
                      "table": { "schema": "public", "name": "authors" } },
                    { "name": "status", "not_null": true, "type": { "schema": "public", "name": "status" },
                      "table": { "schema": "public", "name": "authors" } }
                ]
            },
            {
                "rel": { "schema": "public", "name": "books" },
                "columns": [
                    { "name": "isbn", "not_null": true, "type": { "name": "text" },
                      "table": { "schema": "public", "name": "books" } },
                    { "name": "author_id", "not_null": true, "type": { "name": "uuid" },
                      "table": { "schema": "public", "name": "books" } },
                    { "name": "shelf_grid", "is_array": true, "array_dims": 2, "type": { "name": "int8" },
                      "table": { "schema": "public", "name": "books" } }
                ]
            }
        ]
    }]
}"#;

/// Request over the library catalog with `plugin` as the options document.
///
/// `tables` lists the tables the single query selects from.
pub fn library_request(engine: &str, tables: &[&str], plugin: &str) -> GenerateRequest {
    let columns = tables
        .iter()
        .map(|table| {
            serde_json::json!({
                "name": "id",
                "table": { "name": table },
            })
        })
        .collect::<Vec<_>>();

    serde_json::from_value(serde_json::json!({
        "settings": { "engine": engine },
        "catalog": serde_json::from_str::<serde_json::Value>(LIBRARY_CATALOG).unwrap(),
        "queries": [{ "name": "ListLibrary", "cmd": ":many", "columns": columns }],
        "plugin_options": plugin.as_bytes(),
    }))
    .unwrap()
}

/// Authors-only request under postgresql.
pub fn authors_request(plugin: &str) -> GenerateRequest {
    library_request("postgresql", &["authors"], plugin)
}

/// Resolve `request` with the options it carries.
pub fn resolved<T>(request: &GenerateRequest, check: impl FnOnce(&Resolution<'_>) -> T) -> T {
    let options = Options::from_request(request).unwrap();
    let resolution = resolve(request, &options).unwrap();

    check(&resolution)
}

/// Field name to Go type string, in field order.
pub fn field_types(structure: &Struct<'_>) -> Vec<(String, String)> {
    structure
        .fields
        .iter()
        .map(|field| (field.name.clone(), field.ty.to_string()))
        .collect()
}
