//! Error types for the core emission crate.
//!
//! This module provides structured error types for palette generation.
//! Command constructors are infallible and return plain strings.

use thiserror::Error;

/// Errors that can occur while generating palette definition blocks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// A gradation was requested across a single palette slot, which has
    /// no defined interpolation ratio.
    #[error("Gradation requires at least two palette slots")]
    SingleSlotGradation,
}

/// Result type alias for palette generation.
pub type PaletteResult<T> = Result<T, PaletteError>;
