use crate::ConfigError;
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;

///
/// Pattern
///
/// Glob matched against a whole identifier: `*` matches any run, `?` one
/// character, `\` escapes the next character.
///

#[derive(Clone)]
pub struct Pattern {
    source: String,
    matcher: GlobMatcher,
}

impl Pattern {
    pub fn compile(glob: &str) -> Result<Self, ConfigError> {
        let matcher = GlobBuilder::new(glob)
            .backslash_escape(true)
            .build()
            .map_err(|source| ConfigError::OverridePattern {
                pattern: glob.to_string(),
                source,
            })?
            .compile_matcher();

        Ok(Self {
            source: glob.to_string(),
            matcher,
        })
    }

    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}
