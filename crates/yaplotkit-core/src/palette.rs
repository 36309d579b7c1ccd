//! Palette block generators.
//!
//! Yaplot reserves slots 0..=9 for its built-in colors, so generated
//! palettes start at [`DEFAULT_PALETTE_OFFSET`] unless told otherwise.
//! Each generator returns a block of `@` definition commands ready to be
//! prepended to frame output.

use crate::color::{hsv_to_rgb, Rgb};
use crate::commands;
use crate::error::{PaletteError, PaletteResult};

/// First palette slot past the built-in Yaplot colors.
pub const DEFAULT_PALETTE_OFFSET: u32 = 10;

/// Generates `n` well-separated pastel entries starting at slot `offset`.
///
/// Hues advance by the golden ratio per slot, so consecutive entries stay
/// visually distinct for any `n`. The sequence is deterministic.
pub fn random_palettes(n: usize, offset: u32) -> String {
    let omega = 2.0 / (5.0_f64.sqrt() - 1.0);
    let mut out = String::new();
    for i in 0..n {
        let hue = (omega * i as f64).fract();
        let rgb = hsv_to_rgb(hue, 0.5, 1.0);
        out.push_str(&commands::set_palette(offset + i as u32, rgb, 1.0));
    }
    out
}

/// Generates `n` entries sweeping the full hue circle, starting at slot
/// `offset`.
pub fn rainbow_palettes(n: usize, offset: u32) -> String {
    let mut out = String::new();
    for i in 0..n {
        let hue = i as f64 / n as f64;
        let rgb = hsv_to_rgb(hue, 0.5, 1.0);
        out.push_str(&commands::set_palette(offset + i as u32, rgb, 1.0));
    }
    out
}

/// Generates `n` entries interpolating linearly from `from` to `to`,
/// starting at slot `offset`. Endpoint channels are read against
/// `maxval`.
///
/// The first entry is exactly `from` and the last exactly `to`. Zero
/// slots produce an empty block; a single slot is rejected because no
/// interpolation ratio exists for it.
pub fn gradation_palettes(
    n: usize,
    from: impl Into<Rgb>,
    to: impl Into<Rgb>,
    offset: u32,
    maxval: f64,
) -> PaletteResult<String> {
    if n == 1 {
        return Err(PaletteError::SingleSlotGradation);
    }
    let from = from.into();
    let to = to.into();
    let mut out = String::new();
    for i in 0..n {
        let ratio = i as f64 / (n - 1) as f64;
        let rgb = Rgb::new(
            from.r * (1.0 - ratio) + to.r * ratio,
            from.g * (1.0 - ratio) + to.g * ratio,
            from.b * (1.0 - ratio) + to.b * ratio,
        );
        out.push_str(&commands::set_palette(offset + i as u32, rgb, maxval));
    }
    Ok(out)
}
