//! Scale factory.
//!
//! Wraps a palette into a description of a `colour` or `fill` scale:
//! discrete scales hand the plotting library a [`Ramp`] that it samples
//! once it knows how many categories there are, continuous scales carry
//! a fixed gradient of [`CONTINUOUS_STEPS`] colors.

use std::collections::BTreeMap;
use log::debug;
use rgb::RGBA8;
use crate::ColorRange;
use crate::error::Result;
use crate::palette::{to_hex, PaletteCollection, Ramp, RampOptions,
                     SinglePalette};

/// Number of colors sampled from a palette for a continuous scale.
pub const CONTINUOUS_STEPS: usize = 256;

/// The aesthetic channel a scale targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aesthetic {
    /// Stroke color of points, lines and outlines.
    Colour,
    /// Fill color of areas, bars and polygons.
    Fill,
}

impl Aesthetic {
    /// Name of the channel as the plotting library spells it.
    pub fn name(self) -> &'static str {
        match self {
            Aesthetic::Colour => "colour",
            Aesthetic::Fill => "fill",
        }
    }
}

/// Call time parameters of a scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOptions {
    discrete: bool,
    ramp: RampOptions,
    extra: BTreeMap<String, String>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        ScaleOptions { discrete: true, ramp: RampOptions::default(),
                       extra: BTreeMap::new() }
    }
}

impl ScaleOptions {
    /// Build a discrete (default) or a continuous scale.
    pub fn discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    /// Opacity, reversal and interpolation of the palette.
    pub fn ramp(mut self, ramp: RampOptions) -> Self {
        self.ramp = ramp;
        self
    }

    /// Option passed unchanged to continuous scales (ignored by
    /// discrete ones).  Use several times to set more than one.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>)
                 -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Clone, Debug)]
enum Kind {
    Discrete,
    Continuous {
        gradient: Vec<String>, // CONTINUOUS_STEPS colors
        extra: BTreeMap<String, String>,
    },
}

/// A scale ready to be handed to the plotting library.
///
/// Built by [`SingleScale::build`] or [`CollectionScale::build`].  A
/// discrete scale gives one color per category, the count being
/// supplied later; a continuous scale is a smooth gradient over a
/// numeric range.
#[derive(Clone, Debug)]
pub struct Scale {
    aesthetic: Aesthetic,
    ramp: Ramp,
    kind: Kind,
}

impl Scale {
    fn build(aesthetic: Aesthetic, ramp: Ramp, opts: &ScaleOptions) -> Self {
        let kind = if opts.discrete {
            debug!("discrete {} scale", aesthetic.name());
            Kind::Discrete
        } else {
            debug!("continuous {} scale with {} extra option(s)",
                   aesthetic.name(), opts.extra.len());
            Kind::Continuous { gradient: ramp.colors(CONTINUOUS_STEPS),
                               extra: opts.extra.clone() }
        };
        Scale { aesthetic, ramp, kind }
    }

    /// The aesthetic channel the scale targets.
    pub fn aesthetic(&self) -> Aesthetic { self.aesthetic }

    /// Says whether the scale is discrete.
    pub fn is_discrete(&self) -> bool { matches!(self.kind, Kind::Discrete) }

    /// Return `n` colors of the scale: one per category for a
    /// discrete scale, an even subsample of the gradient otherwise.
    pub fn colors(&self, n: usize) -> Vec<String> {
        match self.kind {
            Kind::Discrete => self.ramp.colors(n),
            Kind::Continuous { .. } => {
                if n == 1 { return vec![self.map(0.)] }
                let last = n.saturating_sub(1) as f64;
                (0 .. n).map(|i| self.map(i as f64 / last)).collect()
            }
        }
    }

    /// Color at position `t` ∈ \[0, 1\] (clamped) of the scale.
    pub fn map(&self, t: f64) -> String {
        let t = t.clamp(0., 1.);
        if let Kind::Continuous { gradient, .. } = &self.kind {
            let last = gradient.len().saturating_sub(1);
            let i = (t * last as f64).round() as usize;
            if let Some(c) = gradient.get(i) { return c.clone() }
        }
        to_hex(ColorRange::<RGBA8>::rgb(&self.ramp, t))
    }

    /// The sampled colors of a continuous scale.
    pub fn gradient(&self) -> Option<&[String]> {
        match &self.kind {
            Kind::Discrete => None,
            Kind::Continuous { gradient, .. } => Some(gradient),
        }
    }

    /// Options forwarded to a continuous scale.
    pub fn extra(&self) -> Option<&BTreeMap<String, String>> {
        match &self.kind {
            Kind::Discrete => None,
            Kind::Continuous { extra, .. } => Some(extra),
        }
    }
}

/// Scale factory over a single palette.
#[derive(Clone, Debug)]
pub struct SingleScale {
    aesthetic: Aesthetic,
    palette: SinglePalette,
}

impl SingleScale {
    /// Scale factory for `aesthetic` over `palette`.
    pub fn new(aesthetic: Aesthetic, palette: SinglePalette) -> Self {
        SingleScale { aesthetic, palette }
    }

    /// Scale factory for the `colour` aesthetic.
    pub fn color(palette: SinglePalette) -> Self {
        Self::new(Aesthetic::Colour, palette)
    }

    /// Scale factory for the `fill` aesthetic.
    pub fn fill(palette: SinglePalette) -> Self {
        Self::new(Aesthetic::Fill, palette)
    }

    /// Build the scale.  Fails if the options are invalid.
    pub fn build(&self, opts: &ScaleOptions) -> Result<Scale> {
        let ramp = self.palette.ramp(&opts.ramp)?;
        Ok(Scale::build(self.aesthetic, ramp, opts))
    }
}

/// Scale factory over a palette collection.
#[derive(Clone, Debug)]
pub struct CollectionScale {
    aesthetic: Aesthetic,
    palettes: PaletteCollection,
}

impl CollectionScale {
    /// Scale factory for `aesthetic` over `palettes`.
    pub fn new(aesthetic: Aesthetic, palettes: PaletteCollection) -> Self {
        CollectionScale { aesthetic, palettes }
    }

    /// Scale factory for the `colour` aesthetic.
    pub fn color(palettes: PaletteCollection) -> Self {
        Self::new(Aesthetic::Colour, palettes)
    }

    /// Scale factory for the `fill` aesthetic.
    pub fn fill(palettes: PaletteCollection) -> Self {
        Self::new(Aesthetic::Fill, palettes)
    }

    /// Build the scale of the palette `name`, or of the first palette
    /// of the collection if `name` is `None`.
    pub fn build(&self, name: Option<&str>, opts: &ScaleOptions)
                 -> Result<Scale> {
        let name = name.unwrap_or_else(|| self.palettes.first_name());
        let ramp = self.palettes.ramp(name, &opts.ramp)?;
        Ok(Scale::build(self.aesthetic, ramp, opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LookupKind};

    fn bw() -> SinglePalette {
        SinglePalette::new(["#000000", "#FFFFFF"]).unwrap()
    }

    #[test]
    fn aesthetic_names() {
        assert_eq!(Aesthetic::Colour.name(), "colour");
        assert_eq!(Aesthetic::Fill.name(), "fill");
    }

    #[test]
    fn discrete_by_default() {
        let s = SingleScale::color(bw()).build(&ScaleOptions::default())
            .unwrap();
        assert!(s.is_discrete());
        assert_eq!(s.aesthetic(), Aesthetic::Colour);
        assert_eq!(s.colors(3), ["#000000", "#808080", "#FFFFFF"]);
        assert!(s.extra().is_none());
        assert!(s.gradient().is_none());
    }

    #[test]
    fn empty_gradient_falls_back_to_ramp() {
        let ramp = bw().ramp(&RampOptions::default()).unwrap();
        let s = Scale { aesthetic: Aesthetic::Fill, ramp,
                        kind: Kind::Continuous { gradient: vec![],
                                                 extra: BTreeMap::new() } };
        assert_eq!(s.map(0.5), "#808080");
        assert_eq!(s.map(1.), "#FFFFFF");
        assert_eq!(s.colors(3), ["#000000", "#808080", "#FFFFFF"]);
    }

    #[test]
    fn continuous() {
        let opts = ScaleOptions::default().discrete(false)
            .extra("name", "Depth").extra("na.value", "grey50");
        let s = SingleScale::fill(bw()).build(&opts).unwrap();
        assert_eq!(s.aesthetic(), Aesthetic::Fill);
        assert!(!s.is_discrete());
        let gradient = s.gradient().unwrap();
        assert_eq!(gradient.len(), CONTINUOUS_STEPS);
        assert_eq!(gradient[0], "#000000");
        assert_eq!(gradient[255], "#FFFFFF");
        let extra = s.extra().unwrap();
        assert_eq!(extra.get("name").map(String::as_str), Some("Depth"));
        assert_eq!(extra.len(), 2);
        assert_eq!(s.map(-1.), "#000000");
        assert_eq!(s.map(2.), "#FFFFFF");
        assert_eq!(s.colors(2), ["#000000", "#FFFFFF"]);
        assert_eq!(s.colors(1), ["#000000"]);
    }

    #[test]
    fn extra_ignored_by_discrete() {
        let opts = ScaleOptions::default().extra("name", "Depth");
        let s = SingleScale::color(bw()).build(&opts).unwrap();
        assert!(s.extra().is_none());
    }

    #[test]
    fn discrete_map() {
        let s = SingleScale::color(bw()).build(&ScaleOptions::default())
            .unwrap();
        assert_eq!(s.map(0.), "#000000");
        assert_eq!(s.map(1.), "#FFFFFF");
    }

    #[test]
    fn reversed_with_opacity() {
        let ramp = RampOptions::default().reverse(true).opacity(0.5);
        let opts = ScaleOptions::default().ramp(ramp);
        let s = SingleScale::color(bw()).build(&opts).unwrap();
        assert_eq!(s.colors(2), ["#FFFFFF80", "#00000080"]);
        let e = SingleScale::color(bw())
            .build(&ScaleOptions::default()
                   .ramp(RampOptions::default().opacity(3.)))
            .unwrap_err();
        assert!(matches!(e, Error::Config(_)));
    }

    #[test]
    fn collection_scale() {
        let pals = PaletteCollection::new([
            ("warm", vec!["#701B06", "#D5BF98"]),
            ("cold", vec!["#78A8D1", "#000000"]),
        ]).unwrap();
        let f = CollectionScale::fill(pals);
        let s = f.build(None, &ScaleOptions::default()).unwrap();
        assert_eq!(s.colors(2), ["#701B06", "#D5BF98"]);
        let s = f.build(Some("cold"), &ScaleOptions::default().discrete(false))
            .unwrap();
        assert_eq!(s.map(0.), "#78A8D1");
        let e = f.build(Some("hot"), &ScaleOptions::default()).unwrap_err();
        assert_eq!(e, Error::Lookup { kind: LookupKind::Palette,
                                      missing: vec!["hot".into()] });
    }
}
