use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

///
/// CachePolicy
///
/// Caching a generated loader carries. The eviction behavior itself lives in
/// the Go cache adapter; this only describes which adapter and how sized.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CachePolicy {
    #[default]
    NoCache,

    UnboundedMemory,

    BoundedLru {
        size: u64,
        #[serde(with = "duration_secs")]
        ttl: Duration,
    },
}

impl CachePolicy {
    /// Tag as written in the options document.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::NoCache => "no-cache",
            Self::UnboundedMemory => "memory",
            Self::BoundedLru { .. } => "lru",
        }
    }

    #[must_use]
    pub const fn is_lru(&self) -> bool {
        matches!(self, Self::BoundedLru { .. })
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(ttl.as_secs_f64())
    }
}

///
/// CacheEntry
///
/// One `cache` option entry. It targets a loader by table name
/// (`public.authors`) or by loader name (`AuthorLoader`).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CacheEntry {
    pub table: String,
    pub loader_name: String,

    /// `memory`, `lru`; any other value is inert.
    #[serde(rename = "type")]
    pub kind: String,

    /// Go-style duration, only read for `lru`.
    pub ttl: String,

    /// Entry bound, only read for `lru`.
    pub size: i64,
}

impl CacheEntry {
    /// Whether this entry names the given table or loader.
    #[must_use]
    pub fn targets(&self, table: &str, loader_name: &str) -> bool {
        (!self.table.is_empty() && self.table == table)
            || (!self.loader_name.is_empty() && self.loader_name == loader_name)
    }

    /// Policy described by this entry, or `None` when its type is not one of
    /// the accepted cache kinds.
    pub fn policy(&self) -> Result<Option<CachePolicy>, ConfigError> {
        match self.kind.as_str() {
            "memory" => Ok(Some(CachePolicy::UnboundedMemory)),
            "lru" => {
                let size = u64::try_from(self.size)
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(|| ConfigError::CacheSize {
                        target: self.target().to_string(),
                        size: self.size,
                    })?;
                let ttl = parse_duration(&self.ttl).map_err(|reason| ConfigError::CacheTtl {
                    target: self.target().to_string(),
                    ttl: self.ttl.clone(),
                    reason,
                })?;

                Ok(Some(CachePolicy::BoundedLru { size, ttl }))
            }
            _ => Ok(None),
        }
    }

    fn target(&self) -> &str {
        if self.table.is_empty() {
            &self.loader_name
        } else {
            &self.table
        }
    }
}

/// Parse a Go-style duration: a sequence of decimal numbers, each with an
/// optional fraction and a unit (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`, `d`).
/// A bare `0` is accepted.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    if input.is_empty() {
        return Err("empty duration".to_string());
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos: f64 = 0.0;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." {
            return Err(format!("expected a number in '{input}'"));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid number '{number}' in '{input}'"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let scale = match unit {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60.0 * 1e9,
            "h" => 3600.0 * 1e9,
            "d" => 86_400.0 * 1e9,
            "" => return Err(format!("missing unit in '{input}'")),
            other => return Err(format!("unknown unit '{other}' in '{input}'")),
        };

        total_nanos += value * scale;
        rest = tail;
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nanos = total_nanos.round() as u64;

    Ok(Duration::from_nanos(nanos))
}
