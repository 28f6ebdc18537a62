use sqlc_loader_config::SqlDriver;
use sqlc_loader_core::gotype::Import;
use std::collections::BTreeMap;

pub const CONTEXT: &str = "context";
pub const DATALOADER: &str = "github.com/graph-gophers/dataloader/v7";
pub const TIME: &str = "time";
pub const CACHE_ADAPTER: &str = "github.com/debugger84/sqlc-dataloader/cache";
pub const CACHE_ADAPTER_ALIAS: &str = "loaderCache";

///
/// ImportBuilder
///
/// Import set of one generated file. Paths are unique; the first alias
/// registered for a path is kept.
///

#[derive(Clone, Debug, Default)]
pub struct ImportBuilder {
    imports: BTreeMap<String, Option<String>>,
}

impl ImportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(mut self, path: &str) -> Self {
        self.imports.entry(path.to_string()).or_insert(None);
        self
    }

    #[must_use]
    pub fn add_aliased(mut self, path: &str, alias: &str) -> Self {
        self.imports
            .entry(path.to_string())
            .or_insert_with(|| Some(alias.to_string()));
        self
    }

    #[must_use]
    pub fn add_import(self, import: Option<&Import>) -> Self {
        match import {
            Some(Import {
                path,
                alias: Some(alias),
            }) => self.add_aliased(path, alias),
            Some(Import { path, alias: None }) => self.add(path),
            None => self,
        }
    }

    /// Package providing the driver's `ErrNoRows`.
    #[must_use]
    pub fn add_driver(self, driver: SqlDriver) -> Self {
        self.add(driver.import_path())
    }

    /// Standard-library imports first, then third-party, each by path.
    #[must_use]
    pub fn build(self) -> Vec<Import> {
        let (mut std, third_party): (Vec<_>, Vec<_>) = self
            .imports
            .into_iter()
            .map(|(path, alias)| Import { path, alias })
            .partition(Import::is_std);

        std.extend(third_party);
        std
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(imports: &[Import]) -> Vec<&str> {
        imports.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn std_first_then_sorted() {
        let imports = ImportBuilder::new()
            .add(DATALOADER)
            .add(TIME)
            .add("github.com/google/uuid")
            .add(CONTEXT)
            .add_driver(SqlDriver::LibPq)
            .build();

        assert_eq!(
            paths(&imports),
            [
                "context",
                "database/sql",
                "time",
                "github.com/google/uuid",
                "github.com/graph-gophers/dataloader/v7",
            ]
        );
    }

    #[test]
    fn duplicates_collapse_and_keep_first_alias() {
        let imports = ImportBuilder::new()
            .add_aliased(CACHE_ADAPTER, CACHE_ADAPTER_ALIAS)
            .add(CACHE_ADAPTER)
            .add_import(Some(&Import::new(CONTEXT)))
            .add(CONTEXT)
            .add_import(None)
            .build();

        assert_eq!(
            imports,
            vec![
                Import::new(CONTEXT),
                Import::aliased(CACHE_ADAPTER, CACHE_ADAPTER_ALIAS),
            ]
        );
    }
}
