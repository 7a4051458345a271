// One-shot PNG export: serialize the grid into a width x height raster,
// one output pixel per cell, no zoom scaling and no resampling anywhere.

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;

use crate::error::Result;
use crate::grid::Grid;

/// Build the export raster. Row-major over the whole canvas: set slots
/// become fully opaque pixels in their stored color, unset slots become
/// all-zero fully transparent pixels.
pub fn rasterize(grid: &Grid) -> RgbaImage {
    let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pixel = match grid.color_at(x, y) {
                Some(c) => Rgba([c.r, c.g, c.b, 255]),
                None => Rgba([0, 0, 0, 0]),
            };
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }
    img
}

/// Rasterize and write a PNG to `path`. Runs to completion synchronously;
/// the caller decides what to tell the user afterwards.
pub fn save_png(grid: &Grid, path: &Path) -> Result<()> {
    rasterize(grid).save_with_format(path, image::ImageFormat::Png)?;
    info!(
        "exported {}x{} canvas to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
