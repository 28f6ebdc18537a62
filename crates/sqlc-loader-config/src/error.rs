use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Fatal configuration problems. Any of these aborts the run before a model
/// is built.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("cache entry for '{target}' must have a positive size, got {size}")]
    CacheSize { target: String, size: i64 },

    #[error("cache entry for '{target}' has an invalid ttl '{ttl}': {reason}")]
    CacheTtl {
        target: String,
        ttl: String,
        reason: String,
    },

    #[error("invalid options: missing package name")]
    MissingPackage,

    #[error("override pattern '{pattern}' is invalid: {source}")]
    OverridePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(
        "override `column` specifier '{0}' is not the proper format, expected '[catalog.][schema.]tablename.colname'"
    )]
    OverrideSpecifier(String),

    #[error("{0}")]
    OverrideTarget(String),

    #[error("unmarshalling {document} options: {source}")]
    ParseJson {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("parsing options file: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("unsupported sql engine '{0}'")]
    UnsupportedEngine(String),
}
