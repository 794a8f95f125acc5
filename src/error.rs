use thiserror::Error;

/// What kind of name a [`Error::Lookup`] failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// A palette name in a collection.
    Palette,
    /// A color name in a color mapping.
    Color,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::Palette => f.write_str("palette"),
            LookupKind::Color => f.write_str("color"),
        }
    }
}

/// Errors raised while building or querying palettes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input: empty collection, blank or duplicated name,
    /// invalid color, out of range opacity.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// One or more requested names are absent.  All of them are listed.
    #[error("unknown {kind} name(s): {}", quoted(.missing))]
    Lookup { kind: LookupKind, missing: Vec<String> },
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub(crate) fn lookup(kind: LookupKind, missing: Vec<String>) -> Self {
        Error::Lookup { kind, missing }
    }
}

fn quoted(names: &[String]) -> String {
    names.iter().map(|n| format!("“{n}”")).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
