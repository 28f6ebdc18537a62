//! Request fixtures, written the way sqlc serializes them.

use sqlc_loader_config::Options;
use sqlc_loader_schema::request::GenerateRequest;

const AUTHORS_REQUEST: &str = r#"{
    "settings": { "engine": "postgresql" },
    "catalog": {
        "default_schema": "public",
        "schemas": [{
            "name": "public",
            "enums": [{ "name": "status", "vals": ["active", "retired"] }],
            "tables": [{
                "rel": { "schema": "public", "name": "authors" },
                "columns": [
                    { "name": "id", "not_null": true, "type": { "name": "uuid" },
                      "table": { "schema": "public", "name": "authors" } },
                    { "name": "name", "type": { "name": "text" },
                      "table": { "schema": "public", "name": "authors" } },
                    { "name": "status", "not_null": true, "type": { "schema": "public", "name": "status" },
                      "table": { "schema": "public", "name": "authors" } }
                ]
            }]
        }]
    },
    "queries": [{
        "name": "GetAuthor",
        "cmd": ":one",
        "columns": [
            { "name": "id", "not_null": true, "type": { "name": "uuid" },
              "table": { "name": "authors" } }
        ]
    }]
}"#;

pub fn authors_request() -> GenerateRequest {
    serde_json::from_str(AUTHORS_REQUEST).expect("fixture request deserializes")
}

/// Finalized options; `package` defaults to `dataloader`.
pub fn authors_options(json: &str) -> Options {
    let mut doc: serde_json::Value = serde_json::from_str(json).expect("fixture options are JSON");
    doc.as_object_mut()
        .expect("fixture options are an object")
        .entry("package")
        .or_insert_with(|| "dataloader".into());

    let mut options: Options = serde_json::from_value(doc).expect("fixture options deserialize");
    options.finalize("public").expect("fixture options are valid");

    options
}
