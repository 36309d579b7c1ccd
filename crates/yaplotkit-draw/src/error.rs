//! Error types for the stateful emission crate.

use std::io;
use thiserror::Error;
use yaplotkit_core::PaletteError;

/// Errors that can occur during frame and document operations.
#[derive(Error, Debug)]
pub enum DrawError {
    /// Palette generation was asked for an impossible block.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// I/O error while writing a scene file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for frame and document operations.
pub type DrawResult<T> = Result<T, DrawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_passes_through_display() {
        let err = DrawError::from(PaletteError::SingleSlotGradation);
        assert_eq!(
            err.to_string(),
            "Gradation requires at least two palette slots"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such directory");
        let err = DrawError::from(io_err);
        assert!(matches!(err, DrawError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: no such directory");
    }
}
