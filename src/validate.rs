//! Checks run when palettes and accessors are built.
//!
//! Every factory of this crate validates its input eagerly so that a
//! misconfigured color table is reported where it is declared rather
//! than when a chart is rendered.

use std::collections::HashSet;
use rgb::RGBA;
use crate::error::{Error, Result};

/// Check that `names` is non-empty and that every name is non-blank
/// and unique.  `what` describes the collection in error messages.
pub fn validate_named_collection<'a, I>(names: I, what: &str) -> Result<()>
where I: IntoIterator<Item = &'a str> {
    let mut seen = HashSet::new();
    for (i, name) in names.into_iter().enumerate() {
        if name.trim().is_empty() {
            return Err(Error::config(format!(
                "{what}: element {} has a blank name", i + 1)))
        }
        if !seen.insert(name) {
            return Err(Error::config(format!(
                "{what}: duplicated name “{name}”")))
        }
    }
    if seen.is_empty() {
        return Err(Error::config(format!("{what}: empty collection")))
    }
    Ok(())
}

/// Parse `value` as a color.  Components of the result are in
/// \[0, 255\], alpha included.
pub fn validate_color(value: &str) -> Result<RGBA<f64>> {
    let c = csscolorparser::parse(value).map_err(|e| {
        Error::config(format!("“{value}” is not a valid color: {e}"))
    })?;
    let [r, g, b, a] = c.to_rgba8();
    Ok(RGBA { r: r as f64, g: g as f64, b: b as f64, a: a as f64 })
}

/// Parse every color of `values`, failing on the first invalid one.
pub fn validate_color_collection<I, S>(values: I) -> Result<Vec<RGBA<f64>>>
where I: IntoIterator<Item = S>,
      S: AsRef<str> {
    let mut colors = vec![];
    for (i, v) in values.into_iter().enumerate() {
        let c = validate_color(v.as_ref()).map_err(|e| match e {
            Error::Config(msg) =>
                Error::config(format!("element {}: {msg}", i + 1)),
            e => e,
        })?;
        colors.push(c);
    }
    if colors.is_empty() {
        return Err(Error::config("empty color list"))
    }
    Ok(colors)
}
