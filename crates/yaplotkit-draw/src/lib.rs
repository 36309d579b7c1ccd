//! # Yaplotkit Draw
//!
//! Stateful Yaplot emission on top of `yaplotkit-core`.
//! A [`Frame`] accumulates drawing commands while tracking the layer,
//! color, size, and arrow style in effect; a [`Document`] strings frames
//! together into a complete scene file.

pub mod document;
pub mod error;
pub mod frame;

pub use document::Document;
pub use error::{DrawError, DrawResult};
pub use frame::{Frame, DEFAULT_ARROW_TYPE, DEFAULT_COLOR, DEFAULT_LAYER, DEFAULT_SIZE};
