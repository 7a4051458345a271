// The single owned editor-state object: grid, active color, interaction
// mode, and the pending dimension inputs. All event handlers receive it
// explicitly; there is no module-level mutable state anywhere.

use log::{info, warn};

use crate::color::Rgb;
use crate::grid::{self, Grid, ZOOM_STEP};

/// Which pointer button started the current gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// What pointer-move events do right now. Set on pointer-down, cleared on
/// pointer-up; Painting and Erasing are mutually exclusive by construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Idle,
    Painting,
    Erasing,
}

/// One frame's press/release edges, derived from polled button state.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PointerEdges {
    pub primary_pressed: bool,
    pub secondary_pressed: bool,
    pub any_released: bool,
}

/// Remembers last frame's button state so the polling loop can turn
/// level-sampled buttons into press and release edges.
#[derive(Default)]
pub struct ButtonTracker {
    left: bool,
    right: bool,
}

impl ButtonTracker {
    /// Feed this frame's sampled state, get back the edges. Releasing
    /// either button counts as a release even while the other stays held:
    /// any button-up ends the current gesture.
    pub fn update(&mut self, left: bool, right: bool) -> PointerEdges {
        let edges = PointerEdges {
            primary_pressed: left && !self.left,
            secondary_pressed: right && !self.right,
            any_released: (self.left && !left) || (self.right && !right),
        };
        self.left = left;
        self.right = right;
        edges
    }
}

pub struct Editor {
    pub grid: Grid,
    active_color: Rgb,
    mode: Mode,
    /// Dimension inputs as typed but not yet applied. May hold values the
    /// resize step will reject; validation happens on apply, like a form
    /// field that only complains when submitted.
    pending_width: usize,
    pending_height: usize,
    /// Last transient message for the HUD (validation errors, export path).
    status: String,
}

impl Editor {
    pub fn new(grid: Grid, active_color: Rgb) -> Self {
        let (w, h) = (grid.width(), grid.height());
        Self {
            grid,
            active_color,
            mode: Mode::Idle,
            pending_width: w,
            pending_height: h,
            status: String::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_color(&self) -> Rgb {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Rgb) {
        self.active_color = color;
    }

    pub fn pending_dims(&self) -> (usize, usize) {
        (self.pending_width, self.pending_height)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /* ---------------- Pointer gestures ---------------- */

    /// Pointer pressed at (rel_x, rel_y), relative to the canvas origin.
    /// Enters Painting or Erasing only when the position lands on a cell;
    /// a press outside the canvas leaves the editor Idle.
    pub fn pointer_down(&mut self, button: PointerButton, rel_x: f32, rel_y: f32) {
        let Some((x, y)) = self.cell_under(rel_x, rel_y) else {
            return;
        };
        match button {
            PointerButton::Primary => {
                self.mode = Mode::Painting;
                self.grid.paint(x, y, self.active_color);
            }
            PointerButton::Secondary => {
                self.mode = Mode::Erasing;
                self.grid.erase(x, y);
            }
        }
    }

    /// Pointer moved. Paints or erases at the current cell depending on the
    /// mode; in Idle this does nothing. Positions that map outside the
    /// canvas are ignored without leaving the gesture.
    pub fn pointer_move(&mut self, rel_x: f32, rel_y: f32) {
        let Some((x, y)) = self.cell_under(rel_x, rel_y) else {
            return;
        };
        match self.mode {
            Mode::Painting => self.grid.paint(x, y, self.active_color),
            Mode::Erasing => self.grid.erase(x, y),
            Mode::Idle => {}
        }
    }

    /// Button released, anywhere on screen.
    pub fn pointer_up(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Map a canvas-relative pointer position to a cell coordinate.
    /// A position at or before the origin is outside the canvas, as is
    /// anything past the far edge at the current zoom.
    pub fn cell_under(&self, rel_x: f32, rel_y: f32) -> Option<(usize, usize)> {
        if rel_x <= 0.0 || rel_y <= 0.0 {
            return None;
        }
        let zoom = self.grid.zoom();
        let column = (rel_x / zoom).floor() as usize;
        let row = (rel_y / zoom).floor() as usize;
        if column < self.grid.width() && row < self.grid.height() {
            Some((column, row))
        } else {
            None
        }
    }

    /* ---------------- Zoom ---------------- */

    /// One wheel event: a fixed step per tick, direction from the sign of
    /// the scroll delta (up = zoom in). The grid clamps the result.
    pub fn wheel(&mut self, scroll_y: f32) {
        if scroll_y > 0.0 {
            self.grid.set_zoom(self.grid.zoom() + ZOOM_STEP);
        } else if scroll_y < 0.0 {
            self.grid.set_zoom(self.grid.zoom() - ZOOM_STEP);
        }
    }

    /* ---------------- Resize form ---------------- */

    /// Nudge the pending inputs. They may step outside the accepted range;
    /// apply_resize is where that gets rejected.
    pub fn adjust_pending(&mut self, dw: isize, dh: isize) {
        self.pending_width = self.pending_width.saturating_add_signed(dw);
        self.pending_height = self.pending_height.saturating_add_signed(dh);
    }

    /// Apply the pending dimensions. Invalid input surfaces a validation
    /// message and changes nothing; a same-size apply is a quiet no-op; a
    /// real resize clears every cell.
    pub fn apply_resize(&mut self) {
        let (w, h) = (self.pending_width, self.pending_height);
        if !grid::dims_valid(w, h) {
            warn!("rejected resize to {w}x{h}");
            self.status = format!(
                "INVALID SIZE {w}X{h} - USE {}-{}",
                grid::MIN_DIM,
                grid::MAX_DIM
            );
            return;
        }
        if self.grid.resize(w, h) {
            info!("resized canvas to {w}x{h}");
            self.status = format!("RESIZED TO {w}X{h}");
        } else {
            // Same-size apply: quiet no-op, but drop any stale message.
            self.status.clear();
        }
    }
}
