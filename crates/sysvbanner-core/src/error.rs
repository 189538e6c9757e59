//! Error types for sysvbanner

use thiserror::Error;

/// Result type for banner rendering
pub type Result<T> = std::result::Result<T, BannerError>;

/// Rendering errors
#[derive(Error, Debug)]
pub enum BannerError {
    /// The font has no glyph for a character and the policy forbids blanks
    #[error("unsupported character {ch:?} at position {index}")]
    UnsupportedChar { ch: char, index: usize },

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
