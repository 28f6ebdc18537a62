use crate::imports::{CACHE_ADAPTER, CACHE_ADAPTER_ALIAS, CONTEXT, DATALOADER, ImportBuilder, TIME};
use convert_case::{Case, Casing};
use serde::Serialize;
use sqlc_loader_config::{CachePolicy, Options};
use sqlc_loader_core::{Resolution, gotype::Import, loader::LoaderEntity};

///
/// PrimaryKeyData
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PrimaryKeyData {
    pub column_name: String,
    pub field_name: String,
    pub field_type: String,
}

///
/// LoaderData
///
/// Everything the loader template reads for one entity.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoaderData {
    pub package: String,
    pub loader_name: String,

    /// Loader name with a lower-case first letter, for unexported helpers.
    pub loader_var: String,

    /// Struct type as written in the loader package (`model.Author`).
    pub struct_type: String,
    pub table: String,
    pub columns: Vec<String>,
    pub primary_key: PrimaryKeyData,
    pub cache: CachePolicy,
    pub imports: Vec<Import>,
}

///
/// FactoryData
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FactoryData {
    pub package: String,
    pub model_package: String,
    pub loaders: Vec<FactoryEntry>,
    pub imports: Vec<Import>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FactoryEntry {
    pub loader_name: String,
    pub loader_var: String,
    pub struct_type: String,
}

///
/// PlannedFile
///
/// Output file name paired with the data its template renders.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedFile<T> {
    pub name: String,
    pub data: T,
}

pub type LoaderFile = PlannedFile<LoaderData>;
pub type FactoryFile = PlannedFile<FactoryData>;

///
/// RenderPlan
///
/// File names and template data for one run. A factory is planned only when
/// at least one loader is.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderPlan {
    pub loaders: Vec<LoaderFile>,
    pub factory: Option<FactoryFile>,
}

impl RenderPlan {
    #[must_use]
    pub fn new(resolution: &Resolution<'_>, options: &Options) -> Self {
        let planner = Planner { options };

        let loaders: Vec<_> = resolution
            .loaders
            .iter()
            .filter_map(|entity| planner.loader(entity))
            .collect();

        let factory = (!loaders.is_empty()).then(|| planner.factory(&loaders));

        Self { loaders, factory }
    }

    /// Planned file names, loaders first.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.loaders
            .iter()
            .map(|file| file.name.as_str())
            .chain(self.factory.iter().map(|file| file.name.as_str()))
    }
}

struct Planner<'a> {
    options: &'a Options,
}

impl Planner<'_> {
    fn separate_package(&self) -> bool {
        self.options.package != self.options.model_package()
    }

    fn loader(&self, entity: &LoaderEntity<'_>) -> Option<LoaderFile> {
        let key = entity.primary_key()?;
        let structure = &entity.structure;

        let mut imports = ImportBuilder::new()
            .add_driver(self.options.driver())
            .add(CONTEXT)
            .add(DATALOADER)
            .add_import(key.ty.import());
        if entity.cache.is_lru() {
            imports = imports
                .add(TIME)
                .add_aliased(CACHE_ADAPTER, CACHE_ADAPTER_ALIAS);
        }
        if self.separate_package() {
            imports = imports.add_import(structure.ty.import());
        }

        let snake = structure.type_name().to_case(Case::Snake);
        let file_name = if self.separate_package() {
            format!("{}/{snake}.go", self.options.package)
        } else {
            format!("{snake}_loader.go")
        };

        let data = LoaderData {
            package: self.options.package.clone(),
            loader_name: entity.loader_name.clone(),
            loader_var: lower_first(&entity.loader_name),
            struct_type: structure.ty.to_string(),
            table: structure.full_table_name(),
            columns: structure.fields.iter().map(|f| f.db_name.clone()).collect(),
            primary_key: PrimaryKeyData {
                column_name: key.db_name.clone(),
                field_name: key.name.clone(),
                field_type: key.ty.to_string(),
            },
            cache: entity.cache,
            imports: imports.build(),
        };

        Some(PlannedFile {
            name: file_name,
            data,
        })
    }

    fn factory(&self, loaders: &[LoaderFile]) -> FactoryFile {
        let mut imports = ImportBuilder::new();
        if self.separate_package() && !self.options.model_import.is_empty() {
            imports = imports.add(&self.options.model_import);
        }

        let file_name = if self.separate_package() {
            format!("{}/loader_factory.go", self.options.package)
        } else {
            "loader_factory.go".to_string()
        };

        let data = FactoryData {
            package: self.options.package.clone(),
            model_package: self.options.model_package().to_string(),
            loaders: loaders
                .iter()
                .map(|file| FactoryEntry {
                    loader_name: file.data.loader_name.clone(),
                    loader_var: file.data.loader_var.clone(),
                    struct_type: file.data.struct_type.clone(),
                })
                .collect(),
            imports: imports.build(),
        };

        PlannedFile {
            name: file_name,
            data,
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
