//! Palettes, color ramps and plotting scales built from named color
//! tables.
//!
//! - [`hex::HexAccessor`] / [`hex::NestedHexAccessor`]: look colors up
//!   by name.
//! - [`palette::SinglePalette`] / [`palette::PaletteCollection`]: turn
//!   a list of anchor colors into a [`palette::Ramp`] producing any
//!   number of interpolated colors.
//! - [`scale::SingleScale`] / [`scale::CollectionScale`]: wrap a palette
//!   into a discrete or continuous [`scale::Scale`] for the `colour` or
//!   `fill` aesthetic.
//!
//! All inputs are validated when the accessor, palette or scale factory
//! is built (see [`validate`]); lookups of unknown names fail with
//! [`Error::Lookup`] at call time.
//!
//! ```
//! use palette_scales::hex::HexAccessor;
//! use palette_scales::palette::{SinglePalette, RampOptions};
//!
//! let brand = HexAccessor::new([("red", "#701B06"), ("blue", "#78A8D1")])?;
//! assert_eq!(brand.get(&["blue", "red"])?, ["#78A8D1", "#701B06"]);
//!
//! let pal = SinglePalette::new(["#000000", "#FFFFFF"])?;
//! let ramp = pal.ramp(&RampOptions::default())?;
//! assert_eq!(ramp.colors(3), ["#000000", "#808080", "#FFFFFF"]);
//! # Ok::<(), palette_scales::Error>(())
//! ```

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

pub mod error;
pub mod validate;
pub mod palette;
pub mod scale;
pub mod hex;

pub use error::{Error, LookupKind, Result};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<R, Color> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { <R as ColorRange<Color>>::rgb(*self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`, interpolated
    /// in the CIE L*C*h color space.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_scales::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in degrees in the range 0. to 2π.
    h: f64,
    /// Alpha component, kept in \[0, 255\].
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (c.r / 255., c.g / 255., c.b / 255.);
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        // Out of gamut colors are clipped.
        RGBA { r: (255. * r).clamp(0., 255.), g: (255. * g).clamp(0., 255.),
               b: (255. * b).clamp(0., 255.), a: self.a.clamp(0., 255.) }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Copy, Debug)]
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    pub(crate) fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_range() {
        let g = RGB8::new(0, 0, 0).gradient(&RGB8::new(255, 255, 255));
        let v: Vec<(f64, RGB8)> = g.range(0., 1., 11).collect();
        assert_eq!(v.len(), 11);
        for (i, &(x, c)) in v.iter().enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(g.rgb(x), c);
        }
        assert_eq!(v[0].1, RGB8::new(0, 0, 0));
        assert_eq!(v[10].1, RGB8::new(255, 255, 255));
    }

    #[test]
    fn range_both_ends() {
        let g = RGB8::new(255, 0, 0).gradient(&RGB8::new(0, 0, 255));
        let mut r = (&g).range(10., 0., 3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(0.));
        assert_eq!(r.next().map(|(x, _)| x), Some(10.));
        assert_eq!(r.next().map(|(x, _)| x), Some(5.));
        assert!(r.next().is_none());
        assert_eq!(g.range(0., 1., 0).count(), 0);
    }

    #[test]
    fn lab_roundtrip() {
        for c in [RGBA8::new(112, 27, 6, 255), RGBA8::new(120, 168, 209, 128),
                  RGBA8::new(213, 191, 152, 0)] {
            let g = c.gradient(&c);
            assert_eq!(g.rgb(0.5), c);
        }
    }
}
