//! Color representation and HSV conversion.
//!
//! Yaplot palettes are defined from RGB triples. The palette generators
//! work in HSV space internally, so this module also provides the
//! sextant-based HSV to RGB conversion they rely on.

/// An RGB color with `f64` channels.
///
/// Channel values are interpreted against a caller-chosen maximum when a
/// palette entry is emitted, so both normalized (`0.0..=1.0`) and byte
/// (`0.0..=255.0`) conventions work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Creates a color from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self { r, g, b }
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}

/// Converts an HSV color to RGB.
///
/// `h` is a turn fraction and wraps, so any real value is accepted; `s`
/// and `v` are expected in `0.0..=1.0`. The returned channels are in
/// `0.0..=1.0`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    // The wrap must keep in-range hues bit-exact, or sextant-boundary
    // hues drift into the neighboring sextant.
    let h = h.rem_euclid(1.0) * 6.0;
    let i = h.floor() as i32;
    let f = h - f64::from(i);
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(r, g, b)
}
