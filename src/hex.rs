//! Hex accessor factory: look colors up by name.

use log::debug;
use crate::error::{Error, LookupKind, Result};
use crate::validate::{validate_color, validate_named_collection};

/// A named color mapping.
///
/// # Example
///
/// ```
/// use palette_scales::hex::HexAccessor;
/// let brand = HexAccessor::new([("red", "#701B06"), ("blue", "#78A8D1"),
///                               ("yellow", "#D5BF98")])?;
/// assert_eq!(brand.get(&["yellow", "blue", "red"])?,
///            ["#D5BF98", "#78A8D1", "#701B06"]);
/// assert!(brand.get(&["green"]).is_err());
/// # Ok::<(), palette_scales::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct HexAccessor {
    colors: Vec<(String, String)>, // Invariant: non-empty, unique names
}

impl HexAccessor {
    /// Validate the names and colors of `colors`.  Values are kept
    /// as given.
    pub fn new<I, N, V>(colors: I) -> Result<Self>
    where I: IntoIterator<Item = (N, V)>,
          N: Into<String>,
          V: Into<String> {
        let colors: Vec<(String, String)> = colors.into_iter()
            .map(|(n, v)| (n.into(), v.into()))
            .collect();
        validate_named_collection(colors.iter().map(|(n, _)| n.as_str()),
                                  "color mapping")?;
        for (name, value) in &colors {
            validate_color(value).map_err(|e| match e {
                Error::Config(msg) =>
                    Error::config(format!("color “{name}”: {msg}")),
                e => e,
            })?;
        }
        debug!("hex accessor built with {} colors", colors.len());
        Ok(HexAccessor { colors })
    }

    fn find(&self, name: &str) -> Option<&str> {
        self.colors.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Return the values of `names`, in the same order.  Fails listing
    /// all names that are unknown.
    pub fn get<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(names.len());
        let mut missing = vec![];
        for name in names {
            match self.find(name.as_ref()) {
                Some(v) => values.push(v.to_string()),
                None => missing.push(name.as_ref().to_string()),
            }
        }
        if missing.is_empty() { Ok(values) }
        else { Err(Error::lookup(LookupKind::Color, missing)) }
    }

    /// Names of the colors, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|(n, _)| n.as_str())
    }

    /// All values, in the order of the mapping.
    pub fn all(&self) -> Vec<String> {
        self.colors.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Named color mappings.
#[derive(Clone, Debug)]
pub struct NestedHexAccessor {
    palettes: Vec<(String, HexAccessor)>, // Invariant: non-empty
}

impl NestedHexAccessor {
    /// Validate the palette names and every color mapping.
    pub fn new<I, P, C, N, V>(palettes: I) -> Result<Self>
    where I: IntoIterator<Item = (P, C)>,
          P: Into<String>,
          C: IntoIterator<Item = (N, V)>,
          N: Into<String>,
          V: Into<String> {
        let mut v = vec![];
        for (name, colors) in palettes {
            let name = name.into();
            let hex = HexAccessor::new(colors).map_err(|e| match e {
                Error::Config(msg) =>
                    Error::config(format!("palette “{name}”: {msg}")),
                e => e,
            })?;
            v.push((name, hex));
        }
        validate_named_collection(v.iter().map(|(n, _)| n.as_str()),
                                  "palette collection")?;
        debug!("nested hex accessor built with {} palettes", v.len());
        Ok(NestedHexAccessor { palettes: v })
    }

    /// Return the color mapping `name`.
    pub fn palette(&self, name: &str) -> Result<&HexAccessor> {
        self.palettes.iter().find(|(n, _)| n == name).map(|(_, h)| h)
            .ok_or_else(|| Error::lookup(LookupKind::Palette,
                                         vec![name.to_string()]))
    }

    /// Names of the palettes, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|(n, _)| n.as_str())
    }

    /// Return the values of `names` in the palette `palette`.
    pub fn get<S: AsRef<str>>(&self, palette: &str, names: &[S])
                              -> Result<Vec<String>> {
        self.palette(palette)?.get(names)
    }
}
