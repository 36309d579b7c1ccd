//! Frame accumulation with drawing-attribute tracking.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};
use yaplotkit_core::{commands, palette, Rgb};

use crate::error::DrawResult;

/// Layer selected at the start of every page.
pub const DEFAULT_LAYER: u32 = 1;
/// Palette slot selected at the start of every page.
pub const DEFAULT_COLOR: u32 = 2;
/// Point and line size at the start of every page.
pub const DEFAULT_SIZE: f64 = 1.0;
/// Arrow style at the start of every page.
pub const DEFAULT_ARROW_TYPE: u32 = 1;

/// One accumulated unit of Yaplot commands with its own attribute state.
///
/// The frame tracks the layer, color, size, and arrow style currently in
/// effect and only emits a state-change command when a drawing call asks
/// for something different, so the buffer stays a minimal command
/// sequence. Drawing methods take optional per-call attribute overrides;
/// `None` leaves the current value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    buf: String,
    layer: u32,
    color: u32,
    size: f64,
    arrow_type: u32,
}

impl Frame {
    /// Creates an empty frame with the page-default attributes.
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            layer: DEFAULT_LAYER,
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE,
            arrow_type: DEFAULT_ARROW_TYPE,
        }
    }

    /// Returns the accumulated command text.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns true when nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Currently selected layer.
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Currently selected palette slot.
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Current point and line size.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Current arrow style.
    pub fn arrow_type(&self) -> u32 {
        self.arrow_type
    }

    /// Switches the drawing layer. A switch to the current layer emits
    /// nothing.
    pub fn set_layer(&mut self, layer: u32) {
        if layer != self.layer {
            self.buf.push_str(&commands::layer(layer));
            self.layer = layer;
        }
    }

    /// Selects a palette slot for subsequent primitives. Reselecting the
    /// current slot emits nothing.
    pub fn set_color(&mut self, color: u32) {
        if color != self.color {
            self.buf.push_str(&commands::color(color));
            self.color = color;
        }
    }

    /// Sets the point and line size. Setting the current size emits
    /// nothing.
    pub fn set_size(&mut self, size: f64) {
        if size != self.size {
            self.buf.push_str(&commands::size(size));
            self.size = size;
        }
    }

    /// Sets the arrow style. Setting the current style emits nothing.
    pub fn set_arrow_type(&mut self, arrow_type: u32) {
        if arrow_type != self.arrow_type {
            self.buf.push_str(&commands::arrow_type(arrow_type));
            self.arrow_type = arrow_type;
        }
    }

    // Overrides apply in a fixed order: layer, color, size, arrow style.
    fn apply_overrides(
        &mut self,
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
        arrow_type: Option<u32>,
    ) {
        if let Some(layer) = layer {
            self.set_layer(layer);
        }
        if let Some(color) = color {
            self.set_color(color);
        }
        if let Some(size) = size {
            self.set_size(size);
        }
        if let Some(arrow_type) = arrow_type {
            self.set_arrow_type(arrow_type);
        }
    }

    /// Draws a line segment from `start` to `end`.
    pub fn line(&mut self, start: &[f64], end: &[f64], layer: Option<u32>, color: Option<u32>) {
        self.apply_overrides(layer, color, None, None);
        self.buf.push_str(&commands::line(start, end));
    }

    /// Draws an arrow from `start` to `end`.
    pub fn arrow(
        &mut self,
        start: &[f64],
        end: &[f64],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
        arrow_type: Option<u32>,
    ) {
        self.apply_overrides(layer, color, size, arrow_type);
        self.buf.push_str(&commands::arrow(start, end));
    }

    /// Draws a circle marker at `center`.
    pub fn circle(
        &mut self,
        center: &[f64],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
    ) {
        self.apply_overrides(layer, color, size, None);
        self.buf.push_str(&commands::circle(center));
    }

    /// Draws a filled polygon over `vertices`.
    pub fn polygon<V: AsRef<[f64]>>(
        &mut self,
        vertices: &[V],
        layer: Option<u32>,
        color: Option<u32>,
    ) {
        self.apply_overrides(layer, color, None, None);
        self.buf.push_str(&commands::polygon(vertices));
    }

    /// Draws a text label anchored at `position`.
    pub fn text(&mut self, position: &[f64], label: &str, layer: Option<u32>, color: Option<u32>) {
        self.apply_overrides(layer, color, None, None);
        self.buf.push_str(&commands::text(position, label));
    }

    /// Draws a circle marker at every point, sharing one set of
    /// overrides. The state-change commands are emitted at most once for
    /// the whole batch.
    pub fn points<V: AsRef<[f64]>>(
        &mut self,
        points: &[V],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
    ) {
        for p in points {
            self.circle(p.as_ref(), layer, color, size);
        }
    }

    /// Draws a line for every segment, sharing one set of overrides.
    pub fn lines<V: AsRef<[f64]>>(
        &mut self,
        segments: &[(V, V)],
        layer: Option<u32>,
        color: Option<u32>,
    ) {
        for (start, end) in segments {
            self.line(start.as_ref(), end.as_ref(), layer, color);
        }
    }

    /// Draws an arrow for every segment, sharing one set of overrides.
    pub fn arrows<V: AsRef<[f64]>>(
        &mut self,
        segments: &[(V, V)],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
        arrow_type: Option<u32>,
    ) {
        for (start, end) in segments {
            self.arrow(start.as_ref(), end.as_ref(), layer, color, size, arrow_type);
        }
    }

    /// Defines palette slot `index` from an RGB triple read against
    /// `maxval`.
    pub fn set_palette(&mut self, index: u32, rgb: impl Into<Rgb>, maxval: f64) {
        self.buf.push_str(&commands::set_palette(index, rgb, maxval));
    }

    /// Appends a block of well-separated palette entries starting at
    /// slot `offset`.
    pub fn random_palettes(&mut self, n: usize, offset: u32) {
        self.buf.push_str(&palette::random_palettes(n, offset));
    }

    /// Appends a block of hue-sweep palette entries starting at slot
    /// `offset`.
    pub fn rainbow_palettes(&mut self, n: usize, offset: u32) {
        self.buf.push_str(&palette::rainbow_palettes(n, offset));
    }

    /// Appends a linear gradation block from `from` to `to` starting at
    /// slot `offset`.
    pub fn gradation_palettes(
        &mut self,
        n: usize,
        from: impl Into<Rgb>,
        to: impl Into<Rgb>,
        offset: u32,
        maxval: f64,
    ) -> DrawResult<()> {
        let block = palette::gradation_palettes(n, from, to, offset, maxval)?;
        self.buf.push_str(&block);
        Ok(())
    }

    /// Ends the current page and resets the tracked attributes to the
    /// page defaults, so the next page starts from a known state.
    pub fn new_page(&mut self) {
        self.buf.push_str(&commands::new_page());
        self.layer = DEFAULT_LAYER;
        self.color = DEFAULT_COLOR;
        self.size = DEFAULT_SIZE;
        self.arrow_type = DEFAULT_ARROW_TYPE;
        trace!("page break, attribute state reset");
    }

    /// Writes the accumulated command text to `path`, replacing any
    /// existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> DrawResult<()> {
        let path = path.as_ref();
        fs::write(path, &self.buf)?;
        debug!("wrote {} bytes to {}", self.buf.len(), path.display());
        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
