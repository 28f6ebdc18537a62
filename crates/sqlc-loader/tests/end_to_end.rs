mod support;

use pretty_assertions::assert_eq;
use sqlc_loader::prelude::*;
use std::time::Duration;
use support::{authors_request, field_types, library_request, resolved};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(name, ty)| ((*name).to_string(), (*ty).to_string()))
        .collect()
}

#[test]
fn authors_without_configuration() {
    let request = authors_request(r#"{ "package": "dataloader" }"#);

    resolved(&request, |resolution| {
        assert_eq!(resolution.loaders.len(), 1);
        let entity = &resolution.loaders[0];

        assert_eq!(entity.loader_name, "AuthorLoader");
        assert_eq!(entity.cache, CachePolicy::NoCache);

        let key = entity.primary_key().unwrap();
        assert_eq!(key.name, "ID");
        assert_eq!(key.ty.to_string(), "uuid.UUID");

        assert_eq!(
            field_types(&entity.structure),
            pairs(&[("ID", "uuid.UUID"), ("Name", "sql.NullString"), ("Status", "Status")])
        );
    });
}

#[test]
fn lru_cache_keeps_the_struct() {
    let plain = authors_request(r#"{ "package": "dataloader" }"#);
    let cached = authors_request(
        r#"{
            "package": "dataloader",
            "cache": [{ "table": "public.authors", "type": "lru", "ttl": "1m", "size": 10 }]
        }"#,
    );

    let plain_options = Options::from_request(&plain).unwrap();
    let plain = resolve(&plain, &plain_options).unwrap();
    let cached_options = Options::from_request(&cached).unwrap();
    let cached = resolve(&cached, &cached_options).unwrap();

    assert_eq!(plain.loaders[0].structure, cached.loaders[0].structure);
    assert_eq!(
        cached.loaders[0].cache,
        CachePolicy::BoundedLru {
            size: 10,
            ttl: Duration::from_secs(60),
        }
    );
}

#[test]
fn exclusion_drops_the_loader_whatever_the_cache() {
    let request = authors_request(
        r#"{
            "package": "dataloader",
            "exclude_tables": ["public.authors"],
            "cache": [
                { "table": "public.authors", "type": "memory" },
                { "loader_name": "AuthorLoader", "type": "lru", "ttl": "30s", "size": 5 }
            ]
        }"#,
    );

    resolved(&request, |resolution| {
        assert!(resolution.loaders.is_empty());
        assert_eq!(resolution.structs.len(), 1);
    });

    let response = generate(&request, &JsonRenderer).unwrap();
    assert!(response.files.is_empty());
}

#[test]
fn tables_without_a_single_key_get_no_loader() {
    let request = library_request(
        "postgresql",
        &["authors", "books"],
        r#"{ "package": "dataloader" }"#,
    );

    resolved(&request, |resolution| {
        let loaders: Vec<_> = resolution.loaders.iter().map(|l| l.loader_name.as_str()).collect();
        assert_eq!(loaders, ["AuthorLoader"]);

        let dropped: Vec<_> = resolution.dropped_tables().map(ToString::to_string).collect();
        assert_eq!(dropped, ["public.books"]);
    });
}

#[test]
fn configured_key_makes_a_table_eligible() {
    let request = library_request(
        "postgresql",
        &["books"],
        r#"{ "package": "dataloader", "primary_keys_columns": ["books.isbn"] }"#,
    );

    resolved(&request, |resolution| {
        let entity = &resolution.loaders[0];
        assert_eq!(entity.loader_name, "BookLoader");

        let key = entity.primary_key().unwrap();
        assert_eq!((key.db_name.as_str(), key.ty.to_string()), ("isbn", "string".to_string()));
    });
}

#[test]
fn two_configured_keys_leave_the_table_ineligible() {
    let request = library_request(
        "postgresql",
        &["books"],
        r#"{ "package": "dataloader", "primary_keys_columns": ["books.isbn", "public.books.author_id"] }"#,
    );

    resolved(&request, |resolution| {
        let flagged = resolution.structs[0].primary_keys().count();
        assert_eq!(flagged, 2);
        assert!(resolution.loaders.is_empty());
    });
}

#[test]
fn enum_key_resolves_to_enum_type() {
    let request = authors_request(
        r#"{ "package": "dataloader", "primary_keys_columns": ["authors.status"] }"#,
    );

    resolved(&request, |resolution| {
        let key = resolution.loaders[0].primary_key().unwrap();
        assert_eq!(key.ty.to_string(), "Status");
    });
}

#[test]
fn array_columns_nest_slices() {
    let request = library_request(
        "postgresql",
        &["books"],
        r#"{ "package": "dataloader", "primary_keys_columns": ["books.isbn"] }"#,
    );

    resolved(&request, |resolution| {
        let grid = resolution.structs[0].field("ShelfGrid").unwrap();
        assert_eq!(grid.ty.to_string(), "[][]int64");
    });
}

#[test]
fn generate_writes_loader_and_factory() {
    let request = library_request(
        "postgresql",
        &["authors", "books"],
        r#"{
            "package": "dataloader",
            "primary_keys_columns": ["books.isbn"],
            "cache": [{ "loader_name": "BookLoader", "type": "memory" }]
        }"#,
    );

    let response = generate(&request, &JsonRenderer).unwrap();
    let names: Vec<_> = response.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["author_loader.go", "book_loader.go", "loader_factory.go"]);

    let factory: serde_json::Value =
        serde_json::from_slice(&response.file("loader_factory.go").unwrap().contents).unwrap();
    assert_eq!(factory["loaders"][1]["loader_name"], "BookLoader");

    let book: serde_json::Value =
        serde_json::from_slice(&response.file("book_loader.go").unwrap().contents).unwrap();
    assert_eq!(book["cache"]["type"], "unbounded_memory");
    assert_eq!(book["primary_key"]["column_name"], "isbn");
}

#[test]
fn separate_model_package_moves_files() {
    let request = authors_request(
        r#"{ "package": "dataloader", "model_import": "github.com/acme/library/model" }"#,
    );

    let response = generate(&request, &JsonRenderer).unwrap();
    let names: Vec<_> = response.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["dataloader/author.go", "dataloader/loader_factory.go"]);

    let loader: serde_json::Value =
        serde_json::from_slice(&response.file("dataloader/author.go").unwrap().contents).unwrap();
    assert_eq!(loader["struct_type"], "model.Author");
}

#[test]
fn mysql_and_sqlite_engines_resolve() {
    let mysql = library_request("mysql", &["authors"], r#"{ "package": "dataloader" }"#);
    resolved(&mysql, |resolution| {
        assert_eq!(resolution.loaders[0].loader_name, "AuthorLoader");
    });

    let sqlite = library_request("sqlite", &["authors"], r#"{ "package": "dataloader" }"#);
    resolved(&sqlite, |resolution| {
        let name = resolution.structs[0].field("Name").unwrap();
        assert_eq!(name.ty.to_string(), "sql.NullString");
    });
}
