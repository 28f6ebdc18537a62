use crate::model::{Field, Struct};
use sqlc_loader_config::{CacheEntry, CachePolicy, ConfigError};

///
/// LoaderEntity
///
/// A struct ready for loader rendering: single primary key, not excluded,
/// cache policy assigned.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoaderEntity<'a> {
    pub structure: Struct<'a>,
    pub loader_name: String,
    pub cache: CachePolicy,
}

impl<'a> LoaderEntity<'a> {
    /// Primary key field. Entities are only built for single-key structs.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Field<'a>> {
        self.structure.primary_key()
    }
}

/// `<TypeName>Loader`.
#[must_use]
pub fn loader_name(structure: &Struct<'_>) -> String {
    format!("{}Loader", structure.type_name())
}

/// Turn eligible structs into loader entities.
///
/// Excluded tables are dropped first, then structs without a single primary
/// key. The first `memory` or `lru` entry naming the table or the loader
/// decides the policy; an invalid `lru` entry fails the run.
pub fn assign_cache<'a>(
    structs: &[Struct<'a>],
    cache: &[CacheEntry],
    exclude: &[String],
) -> Result<Vec<LoaderEntity<'a>>, ConfigError> {
    let mut entities = Vec::new();

    for structure in structs {
        let table = structure.full_table_name();
        if exclude.iter().any(|excluded| *excluded == table) {
            tracing::debug!(%table, "table excluded, no loader");
            continue;
        }
        if !structure.is_loader_eligible() {
            tracing::debug!(
                %table,
                keys = structure.primary_keys().count(),
                "table has no single primary key, no loader"
            );
            continue;
        }

        let loader_name = loader_name(structure);
        let mut policy = CachePolicy::NoCache;
        for entry in cache.iter().filter(|entry| entry.targets(&table, &loader_name)) {
            match entry.policy()? {
                Some(found) => {
                    policy = found;
                    break;
                }
                None => {
                    tracing::debug!(%table, kind = %entry.kind, "ignoring cache entry of unknown type");
                }
            }
        }

        entities.push(LoaderEntity {
            structure: structure.clone(),
            loader_name,
            cache: policy,
        });
    }

    Ok(entities)
}
