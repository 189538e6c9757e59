//! # sysvbanner Core
//!
//! Big block-letter banners, the way the System V `banner` command prints
//! them.
//!
//! This crate provides:
//! - The fixed 6×8 banner font ([`glyph`])
//! - A renderer that writes banners to any [`std::io::Write`] sink ([`render`](mod@render))

pub mod error;
pub mod glyph;
pub mod render;

pub use error::{BannerError, Result};
pub use glyph::{
    is_supported, lookup, Glyph, BANNER_HEIGHT, GLYPH_ROWS, GLYPH_WIDTH, SUPPORTED_CHARS,
    TRAILING_BLANK_LINES,
};
pub use render::{render, Banner, UnsupportedPolicy};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
