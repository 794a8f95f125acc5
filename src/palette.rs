//! Palette factory.
//!
//! A palette is an ordered list of anchor colors.  It is turned, given
//! [`RampOptions`], into a [`Ramp`]: a function producing any number
//! of colors evenly spread along the anchors.

use log::{debug, trace};
use rgb::{RGBA, RGBA8};
use crate::{ColorRange, Gradient, RGBColor};
use crate::error::{Error, LookupKind, Result};
use crate::validate::{validate_color_collection, validate_named_collection};

/// Color space in which a [`Ramp`] interpolates between anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Piecewise linear in RGB.  Anchors are reproduced exactly.
    #[default]
    Rgb,
    /// Piecewise linear in CIE L*C*h.
    Lab,
}

/// Call time parameters of a palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampOptions {
    opacity: f64,
    reverse: bool,
    space: Interpolation,
}

impl Default for RampOptions {
    fn default() -> Self {
        RampOptions { opacity: 1., reverse: false, space: Interpolation::Rgb }
    }
}

impl RampOptions {
    /// Opacity in \[0, 1\], applied as a factor of each anchor's alpha.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Reverse the anchors before interpolating.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Color space used between anchors.
    pub fn space(mut self, space: Interpolation) -> Self {
        self.space = space;
        self
    }

    fn check(&self) -> Result<()> {
        if (0. ..= 1.).contains(&self.opacity) { Ok(()) }
        else { Err(Error::config(format!(
            "opacity must be in [0, 1], got {}", self.opacity))) }
    }
}

/// A single palette.
#[derive(Clone, Debug)]
pub struct SinglePalette {
    anchors: Vec<RGBA<f64>>, // Invariant: non-empty
}

impl SinglePalette {
    /// Validate `colors` and build a palette from them.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where I: IntoIterator<Item = S>,
          S: AsRef<str> {
        let anchors = validate_color_collection(colors)?;
        debug!("palette built from {} colors", anchors.len());
        Ok(SinglePalette { anchors })
    }

    /// Number of anchor colors.
    pub fn len(&self) -> usize { self.anchors.len() }

    /// Always `false`: a palette has at least one color.
    pub fn is_empty(&self) -> bool { self.anchors.is_empty() }

    /// Return the interpolation function for these options.
    pub fn ramp(&self, opts: &RampOptions) -> Result<Ramp> {
        opts.check()?;
        Ok(Ramp::new(&self.anchors, opts))
    }
}

/// Named palettes, kept in the order they were given.
#[derive(Clone, Debug)]
pub struct PaletteCollection {
    palettes: Vec<(String, SinglePalette)>, // Invariant: non-empty
}

impl PaletteCollection {
    /// Validate every name and every color of `palettes`.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_scales::palette::{PaletteCollection, RampOptions};
    /// let pals = PaletteCollection::new([
    ///     ("grey", vec!["#000000", "#FFFFFF"]),
    ///     ("warm", vec!["#701B06", "#D5BF98"]),
    /// ])?;
    /// let ramp = pals.ramp("grey", &RampOptions::default())?;
    /// assert_eq!(ramp.colors(2), ["#000000", "#FFFFFF"]);
    /// assert!(pals.ramp("cold", &RampOptions::default()).is_err());
    /// # Ok::<(), palette_scales::Error>(())
    /// ```
    pub fn new<I, N, C, S>(palettes: I) -> Result<Self>
    where I: IntoIterator<Item = (N, C)>,
          N: Into<String>,
          C: IntoIterator<Item = S>,
          S: AsRef<str> {
        let mut v = vec![];
        for (name, colors) in palettes {
            let name = name.into();
            let pal = SinglePalette::new(colors).map_err(|e| match e {
                Error::Config(msg) =>
                    Error::config(format!("palette “{name}”: {msg}")),
                e => e,
            })?;
            v.push((name, pal));
        }
        validate_named_collection(v.iter().map(|(n, _)| n.as_str()),
                                  "palette collection")?;
        debug!("palette collection built with {} palettes", v.len());
        Ok(PaletteCollection { palettes: v })
    }

    /// Names of the palettes, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|(n, _)| n.as_str())
    }

    /// Name of the first palette, the default one.
    pub fn first_name(&self) -> &str { &self.palettes[0].0 }

    /// Return the palette `name`.
    pub fn get(&self, name: &str) -> Result<&SinglePalette> {
        self.palettes.iter().find(|(n, _)| n == name).map(|(_, p)| p)
            .ok_or_else(|| Error::lookup(LookupKind::Palette,
                                         vec![name.to_string()]))
    }

    /// Return the interpolation function of the palette `name`.
    pub fn ramp(&self, name: &str, opts: &RampOptions) -> Result<Ramp> {
        self.get(name)?.ramp(opts)
    }
}

/// Either a single palette or a named collection of them.
#[derive(Clone, Debug)]
pub enum PaletteSource {
    /// One palette, no selector.
    Single(SinglePalette),
    /// Palettes selected by name.
    Collection(PaletteCollection),
}

impl PaletteSource {
    /// Validate `colors` as a single palette.
    pub fn single<I, S>(colors: I) -> Result<Self>
    where I: IntoIterator<Item = S>,
          S: AsRef<str> {
        SinglePalette::new(colors).map(PaletteSource::Single)
    }

    /// Validate `palettes` as a named collection.
    pub fn collection<I, N, C, S>(palettes: I) -> Result<Self>
    where I: IntoIterator<Item = (N, C)>,
          N: Into<String>,
          C: IntoIterator<Item = S>,
          S: AsRef<str> {
        PaletteCollection::new(palettes).map(PaletteSource::Collection)
    }

    /// Return the interpolation function.  `name` selects a palette of
    /// a collection, `None` meaning the first one; a single palette
    /// takes no selector.
    pub fn ramp(&self, name: Option<&str>, opts: &RampOptions)
                -> Result<Ramp> {
        match self {
            PaletteSource::Single(p) => match name {
                None => p.ramp(opts),
                Some(name) => Err(Error::config(format!(
                    "palette selector “{name}” given for a single palette"))),
            },
            PaletteSource::Collection(c) =>
                c.ramp(name.unwrap_or_else(|| c.first_name()), opts),
        }
    }
}

impl From<SinglePalette> for PaletteSource {
    fn from(p: SinglePalette) -> Self { PaletteSource::Single(p) }
}

impl From<PaletteCollection> for PaletteSource {
    fn from(c: PaletteCollection) -> Self { PaletteSource::Collection(c) }
}

#[derive(Clone, Debug)]
enum Segments {
    Rgb(Vec<RGBA<f64>>),
    Lab(Vec<Gradient<RGBA<f64>>>),
}

/// Interpolation function over the anchors of a palette.
///
/// See the [`ColorRange`] trait for sampling it with other color
/// types.
#[derive(Clone, Debug)]
pub struct Ramp {
    segments: Segments, // Invariant: non-empty
}

impl Ramp {
    fn new(anchors: &[RGBA<f64>], opts: &RampOptions) -> Self {
        let mut anchors: Vec<_> = anchors.iter()
            .map(|&c| RGBA { a: c.a * opts.opacity, ..c })
            .collect();
        if opts.reverse { anchors.reverse() }
        let segments = match opts.space {
            Interpolation::Rgb => Segments::Rgb(anchors),
            Interpolation::Lab => {
                let mut g: Vec<_> = anchors.windows(2)
                    .map(|c| c[0].gradient(&c[1]))
                    .collect();
                if g.is_empty() { g.push(anchors[0].gradient(&anchors[0])) }
                Segments::Lab(g)
            }
        };
        Ramp { segments }
    }

    fn rgba(&self, t: f64) -> RGBA<f64> {
        let t = t.clamp(0., 1.);
        match &self.segments {
            Segments::Rgb(c) => {
                let n = c.len() - 1;
                if n == 0 { return c[0] }
                let tn = t * n as f64;
                let i = tn.trunc() as usize;
                if i < n {
                    let s = tn.fract();
                    let (c0, c1) = (c[i], c[i + 1]);
                    RGBA { r: c0.r + s * (c1.r - c0.r),
                           g: c0.g + s * (c1.g - c0.g),
                           b: c0.b + s * (c1.b - c0.b),
                           a: c0.a + s * (c1.a - c0.a) }
                } else { c[n] }
            }
            Segments::Lab(g) => {
                let n = g.len();
                let tn = t * n as f64;
                let i = tn.trunc() as usize;
                if i < n { g[i].rgb_unsafe(tn.fract()) }
                else { g[n - 1].rgb_unsafe(1.) }
            }
        }
    }

    /// Returns `n` colors evenly spaced along the ramp, the first and
    /// last anchors included (for `n ≥ 2`).  Colors are formatted as
    /// `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn colors(&self, n: usize) -> Vec<String> {
        trace!("sampling {n} colors");
        ColorRange::<RGBA8>::range(self, 0., 1., n)
            .map(|(_, c)| to_hex(c))
            .collect()
    }
}

impl<Color: RGBColor> ColorRange<Color> for Ramp {
    fn rgb(&self, t: f64) -> Color { Color::from_rgba(self.rgba(t)) }
}

/// Format `c` as `#RRGGBB`, or `#RRGGBBAA` if `c` is not opaque.
pub fn to_hex(c: RGBA8) -> String {
    if c.a == 255 { format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b) }
    else { format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a) }
}
