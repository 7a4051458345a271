//! PixelPad: a small pixel-art editor. Paint and erase cells on a
//! fixed-size grid at a chosen zoom level, then export the canvas as a
//! PNG where one cell becomes one pixel.

pub mod color;
pub mod editor;
pub mod error;
pub mod export;
pub mod grid;
pub mod render;
pub mod types;
pub mod window;
