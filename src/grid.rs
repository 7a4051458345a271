// Grid state: canvas dimensions, zoom level, and the dense cell-color map.
// This is the single source of truth; rendering and export are projections
// of this state, never the other way around.

use crate::color::Rgb;

// Zoom is the on-screen size of one cell, in window pixels.
pub const MIN_ZOOM: f32 = 8.0;
pub const MAX_ZOOM: f32 = 64.0;
/// Zoom change per discrete wheel tick.
pub const ZOOM_STEP: f32 = 0.5;

/// Accepted range for either canvas dimension.
pub const MIN_DIM: usize = 1;
pub const MAX_DIM: usize = 256;

pub struct Grid {
    width: usize,
    height: usize,
    zoom: f32,
    /// Dense slot map indexed by `x + y * width`; `None` = transparent.
    cells: Vec<Option<Rgb>>,
}

impl Grid {
    /// Returns `None` when either dimension is outside the accepted range.
    pub fn new(width: usize, height: usize, zoom: f32) -> Option<Self> {
        if !dims_valid(width, height) {
            return None;
        }
        Some(Self {
            width,
            height,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            cells: vec![None; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Change the canvas size. Invalid dimensions and a same-size request
    /// are both no-ops; an actual resize rebuilds the slot map all-unset,
    /// so every painted cell is lost. That loss is intentional.
    /// Returns true only when the map was rebuilt.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> bool {
        if !dims_valid(new_width, new_height) {
            return false;
        }
        if new_width == self.width && new_height == self.height {
            return false;
        }
        self.width = new_width;
        self.height = new_height;
        self.cells = vec![None; new_width * new_height];
        true
    }

    /// Set the zoom, clamped into [MIN_ZOOM, MAX_ZOOM].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Set the slot at (x, y). Out-of-bounds coordinates are silently
    /// ignored; re-painting an already-set cell overwrites it.
    pub fn paint(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Some(color);
        }
    }

    /// Clear the slot at (x, y). Out of bounds or already unset: no-op.
    pub fn erase(&mut self, x: usize, y: usize) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = None;
        }
    }

    /// Stored color at (x, y); `None` for unset slots and for coordinates
    /// outside the canvas.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// All painted cells as (x, y, color). Lets the renderer do an
    /// O(painted cells) pass instead of scanning the whole canvas area.
    pub fn painted_cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, slot)| {
            slot.map(|color| (idx % self.width, idx / self.width, color))
        })
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x + y * self.width)
        } else {
            None
        }
    }
}

/// The positive-integer-in-range constraint the dimension controls enforce.
pub fn dims_valid(width: usize, height: usize) -> bool {
    (MIN_DIM..=MAX_DIM).contains(&width) && (MIN_DIM..=MAX_DIM).contains(&height)
}
