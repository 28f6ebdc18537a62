//! Fixtures shared by the unit tests.

use sqlc_loader_config::Options;
use sqlc_loader_schema::{
    node::{Catalog, Column, Enum, Identifier, Query, Schema, Table},
    request::{GenerateRequest, Settings},
};

/// Finalized options from a plugin JSON document; `package` defaults to
/// `dataloader`.
pub fn options(json: &str) -> Options {
    let mut doc: serde_json::Value = serde_json::from_str(json).expect("fixture options are JSON");
    doc.as_object_mut()
        .expect("fixture options are an object")
        .entry("package")
        .or_insert_with(|| "dataloader".into());

    let mut options: Options = serde_json::from_value(doc).expect("fixture options deserialize");
    options.finalize("public").expect("fixture options are valid");

    options
}

/// Column with an unqualified declared type.
pub fn column(name: &str, ty: &str, not_null: bool) -> Column {
    Column {
        name: name.to_string(),
        not_null,
        ty: Some(Identifier::unqualified(ty)),
        ..Column::default()
    }
}

/// Column owned by `schema.table`.
pub fn table_column(schema: &str, table: &str, name: &str, ty: &str, not_null: bool) -> Column {
    Column {
        table: Some(Identifier::new(schema, table)),
        ..column(name, ty, not_null)
    }
}

pub fn enum_named(name: &str) -> Enum {
    Enum {
        name: name.to_string(),
        vals: vec!["active".to_string(), "inactive".to_string()],
        comment: String::new(),
    }
}

/// Schema holding a single enum.
pub fn schema_with_enum(schema: &str, name: &str) -> Schema {
    Schema {
        name: schema.to_string(),
        enums: vec![enum_named(name)],
        ..Schema::default()
    }
}

/// `public.authors (id uuid not null, name text, status status not null)`
/// reached by one `GetAuthors` query, on postgresql.
pub fn authors_request() -> GenerateRequest {
    let mut status = table_column("public", "authors", "status", "status", true);
    status.ty = Some(Identifier::new("public", "status"));

    let columns = vec![
        table_column("public", "authors", "id", "uuid", true),
        table_column("public", "authors", "name", "text", false),
        status,
    ];

    let mut schema = schema_with_enum("public", "status");
    schema.tables.push(Table {
        rel: Identifier::new("public", "authors"),
        columns: columns.clone(),
        comment: String::new(),
    });

    GenerateRequest {
        settings: Settings {
            engine: "postgresql".to_string(),
            version: "2".to_string(),
        },
        catalog: Catalog {
            default_schema: "public".to_string(),
            schemas: vec![schema],
            ..Catalog::default()
        },
        queries: vec![Query {
            name: "GetAuthors".to_string(),
            cmd: ":many".to_string(),
            columns,
            ..Query::default()
        }],
        ..GenerateRequest::default()
    }
}
