//! Error types for the editor.
//! State-layer misuse (out-of-bounds paint, erase on empty) is a silent
//! no-op and never reaches this enum; these are the real failures.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Pushing the framebuffer to the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// A color string was not of the form `#RRGGBB`
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    /// Encoding or writing the exported PNG failed
    #[error("PNG export error: {0}")]
    Export(#[from] image::ImageError),
}
