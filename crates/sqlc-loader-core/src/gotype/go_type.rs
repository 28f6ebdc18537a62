use serde::Serialize;
use sqlc_loader_config::GoTypeSpec;
use std::fmt;

// bare qualifiers with a well-known import path
const KNOWN_PACKAGES: [(&str, &str); 6] = [
    ("json", "encoding/json"),
    ("net", "net"),
    ("netip", "net/netip"),
    ("sql", "database/sql"),
    ("time", "time"),
    ("uuid", "github.com/google/uuid"),
];

///
/// Import
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
}

impl Import {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }

    /// Standard-library paths have no dot in their first segment.
    #[must_use]
    pub fn is_std(&self) -> bool {
        !self.path.split('/').next().unwrap_or_default().contains('.')
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{alias} \"{}\"", self.path),
            None => write!(f, "\"{}\"", self.path),
        }
    }
}

///
/// GoType
///
/// A resolved Go type: element name, its package qualifier and import, an
/// element pointer, and any number of slice levels around it.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct GoType {
    import: Option<Import>,
    package: Option<String>,
    name: String,
    pointer: bool,
    slice_dims: usize,
}

impl GoType {
    /// Unqualified type such as `string` or `Author`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Parse a spec string: `[]…` slice levels, an optional `*`, then
    /// `name`, `pkg.Name` or `import/path/pkg.Name`.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut rest = spec.trim();
        let mut slice_dims = 0;
        while let Some(tail) = rest.strip_prefix("[]") {
            slice_dims += 1;
            rest = tail;
        }
        let (pointer, rest) = match rest.strip_prefix('*') {
            Some(tail) => (true, tail),
            None => (false, rest),
        };

        // generic arguments stay part of the name
        let head_end = rest.find('[').unwrap_or(rest.len());
        let (head, generic) = rest.split_at(head_end);

        let last_segment_start = head.rfind('/').map_or(0, |i| i + 1);
        let Some(dot) = head[last_segment_start..].rfind('.').map(|i| i + last_segment_start) else {
            return Self {
                import: None,
                package: None,
                name: rest.to_string(),
                pointer,
                slice_dims,
            };
        };

        let path = &head[..dot];
        let name = format!("{}{generic}", &head[dot + 1..]);

        let (import, package) = if path.contains('/') {
            (Some(Import::new(path)), package_name(path))
        } else {
            let import = KNOWN_PACKAGES
                .iter()
                .find(|(package, _)| *package == path)
                .map(|(_, import)| Import::new(*import));
            (import, path.to_string())
        };

        Self {
            import,
            package: Some(package),
            name,
            pointer,
            slice_dims,
        }
    }

    /// Resolve an override's replacement type.
    #[must_use]
    pub fn from_spec(spec: &GoTypeSpec) -> Self {
        match spec {
            GoTypeSpec::Spec(spec) => Self::parse(spec),
            GoTypeSpec::Detailed {
                import,
                package,
                type_name,
                pointer,
                slice,
            } => {
                let mut ty = if import.is_empty() {
                    Self::parse(type_name)
                } else {
                    let derived = package_name(import);
                    let import = if package.is_empty() || *package == derived {
                        Import::new(import.as_str())
                    } else {
                        Import::aliased(import.as_str(), package.as_str())
                    };
                    let package = if package.is_empty() { derived } else { package.clone() };

                    Self {
                        import: Some(import),
                        package: Some(package),
                        name: type_name.clone(),
                        ..Self::default()
                    }
                };

                ty.pointer |= *pointer;
                if *slice {
                    ty.slice_dims += 1;
                }

                ty
            }
        }
    }

    /// Same element type qualified with `package`, imported from `import`
    /// when given.
    #[must_use]
    pub fn within(mut self, package: &str, import: Option<&str>) -> Self {
        self.package = Some(package.to_string());
        self.import = import.map(Import::new);
        self
    }

    /// Wrap in `dims` more slice levels.
    #[must_use]
    pub fn wrap_slice(mut self, dims: usize) -> Self {
        self.slice_dims += dims;
        self
    }

    /// Element name without qualifier, pointer or slices.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    #[must_use]
    pub const fn import(&self) -> Option<&Import> {
        self.import.as_ref()
    }

    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        self.pointer
    }

    #[must_use]
    pub const fn slice_dims(&self) -> usize {
        self.slice_dims
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.slice_dims {
            f.write_str("[]")?;
        }
        if self.pointer {
            f.write_str("*")?;
        }
        if let Some(package) = &self.package {
            write!(f, "{package}.")?;
        }

        f.write_str(&self.name)
    }
}

/// Go package name implied by an import path: the last segment, skipping a
/// major-version suffix and any `go-`/`-go` affix.
fn package_name(path: &str) -> String {
    let mut segments = path.rsplit('/');
    let mut last = segments.next().unwrap_or_default();

    let is_version = |s: &str| {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    };
    if is_version(last)
        && let Some(previous) = segments.next()
    {
        last = previous;
    }

    // gopkg.in style `name.v4`
    if let Some((name, version)) = last.rsplit_once('.')
        && is_version(version)
    {
        last = name;
    }

    last.trim_end_matches("-go")
        .trim_start_matches("go-")
        .replace('-', "_")
}
