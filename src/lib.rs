//! # Yaplotkit
//!
//! An emitter for the Yaplot scene-file format. Yaplot renders simple
//! plain-text drawing commands, one per line, which makes it a handy
//! target for visualizing simulation output:
//! - `l`, `s`, `c`, `p`, `t` draw lines, arrows, circles, polygons, text
//! - `@`, `r`, `y`, `a` switch color, size, layer, and arrow style
//! - a blank line starts a new page, one page per animation step
//!
//! ## Architecture
//!
//! Yaplotkit is organized as a workspace with two crates:
//!
//! 1. **yaplotkit-core** - Stateless command constructors, colors, palettes
//! 2. **yaplotkit-draw** - Stateful frames and multi-frame documents
//!
//! This crate re-exports both, so most users depend on `yaplotkit` alone.
//!
//! ## Example
//!
//! ```
//! use yaplotkit::{Document, DEFAULT_PALETTE_OFFSET};
//!
//! let mut doc = Document::new();
//! doc.rainbow_palettes(4, DEFAULT_PALETTE_OFFSET);
//! doc.line(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], None, Some(10));
//! doc.new_frame();
//! doc.circle(&[0.5, 0.5, 0.0], None, Some(11), Some(2.0));
//!
//! let text = doc.to_text();
//! assert!(text.starts_with("@ 10 255 127 127\n"));
//! ```

pub use yaplotkit_core::{color, commands, palette};

pub use yaplotkit_core::{
    gradation_palettes, hsv_to_rgb, rainbow_palettes, random_palettes, PaletteError,
    PaletteResult, Rgb, DEFAULT_PALETTE_OFFSET,
};

pub use yaplotkit_draw::{
    Document, DrawError, DrawResult, Frame, DEFAULT_ARROW_TYPE, DEFAULT_COLOR, DEFAULT_LAYER,
    DEFAULT_SIZE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
