//! # Yaplotkit Core
//!
//! Stateless building blocks for Yaplot scene files.
//! Provides single-command constructors, the RGB/HSV color types, and
//! the palette block generators. Anything stateful (attribute tracking,
//! frames, documents) lives in `yaplotkit-draw` on top of this crate.

pub mod color;
pub mod commands;
pub mod error;
pub mod palette;

pub use color::{hsv_to_rgb, Rgb};

pub use error::{PaletteError, PaletteResult};

// Re-export the generators for convenience
pub use palette::{
    gradation_palettes, rainbow_palettes, random_palettes, DEFAULT_PALETTE_OFFSET,
};
