//! Multi-frame documents.
//!
//! A [`Document`] owns an ordered list of [`Frame`]s and keeps a cursor
//! on the one currently being drawn into. Frame operations on the
//! document forward to the cursor frame, so simple scripts never need to
//! hold a frame reference themselves.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};
use yaplotkit_core::Rgb;

use crate::error::DrawResult;
use crate::frame::Frame;

/// An ordered collection of frames rendered as one scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    frames: Vec<Frame>,
    current: usize,
}

impl Document {
    /// Creates a document holding one empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
            current: 0,
        }
    }

    /// Appends a fresh frame, moves the cursor to it, and returns it.
    pub fn new_frame(&mut self) -> &mut Frame {
        self.frames.push(Frame::new());
        self.current = self.frames.len() - 1;
        trace!("started frame {}", self.current);
        &mut self.frames[self.current]
    }

    /// The frame the cursor points at.
    pub fn current(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Mutable access to the cursor frame.
    pub fn current_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current]
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames, including untouched ones.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Switches the drawing layer on the cursor frame.
    pub fn set_layer(&mut self, layer: u32) {
        self.current_mut().set_layer(layer);
    }

    /// Selects a palette slot on the cursor frame.
    pub fn set_color(&mut self, color: u32) {
        self.current_mut().set_color(color);
    }

    /// Sets the point and line size on the cursor frame.
    pub fn set_size(&mut self, size: f64) {
        self.current_mut().set_size(size);
    }

    /// Sets the arrow style on the cursor frame.
    pub fn set_arrow_type(&mut self, arrow_type: u32) {
        self.current_mut().set_arrow_type(arrow_type);
    }

    /// Draws a line segment on the cursor frame.
    pub fn line(&mut self, start: &[f64], end: &[f64], layer: Option<u32>, color: Option<u32>) {
        self.current_mut().line(start, end, layer, color);
    }

    /// Draws an arrow on the cursor frame.
    pub fn arrow(
        &mut self,
        start: &[f64],
        end: &[f64],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
        arrow_type: Option<u32>,
    ) {
        self.current_mut()
            .arrow(start, end, layer, color, size, arrow_type);
    }

    /// Draws a circle marker on the cursor frame.
    pub fn circle(
        &mut self,
        center: &[f64],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
    ) {
        self.current_mut().circle(center, layer, color, size);
    }

    /// Draws a filled polygon on the cursor frame.
    pub fn polygon<V: AsRef<[f64]>>(
        &mut self,
        vertices: &[V],
        layer: Option<u32>,
        color: Option<u32>,
    ) {
        self.current_mut().polygon(vertices, layer, color);
    }

    /// Draws a text label on the cursor frame.
    pub fn text(&mut self, position: &[f64], label: &str, layer: Option<u32>, color: Option<u32>) {
        self.current_mut().text(position, label, layer, color);
    }

    /// Draws a circle marker at every point on the cursor frame.
    pub fn points<V: AsRef<[f64]>>(
        &mut self,
        points: &[V],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
    ) {
        self.current_mut().points(points, layer, color, size);
    }

    /// Draws a line for every segment on the cursor frame.
    pub fn lines<V: AsRef<[f64]>>(
        &mut self,
        segments: &[(V, V)],
        layer: Option<u32>,
        color: Option<u32>,
    ) {
        self.current_mut().lines(segments, layer, color);
    }

    /// Draws an arrow for every segment on the cursor frame.
    pub fn arrows<V: AsRef<[f64]>>(
        &mut self,
        segments: &[(V, V)],
        layer: Option<u32>,
        color: Option<u32>,
        size: Option<f64>,
        arrow_type: Option<u32>,
    ) {
        self.current_mut()
            .arrows(segments, layer, color, size, arrow_type);
    }

    /// Defines a palette slot on the cursor frame.
    pub fn set_palette(&mut self, index: u32, rgb: impl Into<Rgb>, maxval: f64) {
        self.current_mut().set_palette(index, rgb, maxval);
    }

    /// Appends a block of well-separated palette entries on the cursor
    /// frame.
    pub fn random_palettes(&mut self, n: usize, offset: u32) {
        self.current_mut().random_palettes(n, offset);
    }

    /// Appends a block of hue-sweep palette entries on the cursor frame.
    pub fn rainbow_palettes(&mut self, n: usize, offset: u32) {
        self.current_mut().rainbow_palettes(n, offset);
    }

    /// Appends a linear gradation block on the cursor frame.
    pub fn gradation_palettes(
        &mut self,
        n: usize,
        from: impl Into<Rgb>,
        to: impl Into<Rgb>,
        offset: u32,
        maxval: f64,
    ) -> DrawResult<()> {
        self.current_mut()
            .gradation_palettes(n, from, to, offset, maxval)
    }

    /// Ends the current page on the cursor frame.
    pub fn new_page(&mut self) {
        self.current_mut().new_page();
    }

    /// Renders the whole document as scene-file text.
    ///
    /// Frames are stripped of trailing newlines and joined with one
    /// blank line, which is what separates pages in the format. An
    /// untouched document renders as the empty string.
    pub fn to_text(&self) -> String {
        self.frames
            .iter()
            .map(|f| f.as_str().trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Writes the rendered document to `path`, replacing any existing
    /// file.
    pub fn save(&self, path: impl AsRef<Path>) -> DrawResult<()> {
        let path = path.as_ref();
        let text = self.to_text();
        fs::write(path, &text)?;
        debug!(
            "wrote {} frames ({} bytes) to {}",
            self.frames.len(),
            text.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_renders_empty() {
        let doc = Document::new();
        assert_eq!(doc.frame_count(), 1);
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn test_new_frame_moves_cursor() {
        let mut doc = Document::new();
        doc.circle(&[0.0, 0.0], None, None, None);
        doc.new_frame();
        doc.circle(&[1.0, 1.0], None, None, None);
        assert_eq!(doc.frame_count(), 2);
        assert_eq!(doc.frames()[0].as_str(), "c 0.0000 0.0000 \n");
        assert_eq!(doc.current().as_str(), "c 1.0000 1.0000 \n");
    }

    #[test]
    fn test_frames_join_with_blank_line() {
        let mut doc = Document::new();
        doc.line(&[0.0, 0.0], &[1.0, 1.0], None, None);
        doc.new_frame();
        doc.line(&[1.0, 1.0], &[2.0, 2.0], None, None);
        assert_eq!(
            doc.to_text(),
            "l 0.0000 0.0000 1.0000 1.0000 \n\nl 1.0000 1.0000 2.0000 2.0000 "
        );
    }

    #[test]
    fn test_state_is_per_frame() {
        let mut doc = Document::new();
        doc.set_color(5);
        doc.new_frame();
        // The fresh frame starts from the defaults again.
        doc.set_color(5);
        assert_eq!(doc.to_text(), "@ 5\n\n@ 5");
    }

    #[test]
    fn test_new_frame_returns_workable_reference() {
        let mut doc = Document::new();
        let frame = doc.new_frame();
        frame.set_layer(2);
        assert_eq!(doc.current().layer(), 2);
    }

    #[test]
    fn test_display_matches_to_text() {
        let mut doc = Document::new();
        doc.circle(&[0.5, 0.5], None, None, None);
        assert_eq!(format!("{}", doc), doc.to_text());
    }
}
