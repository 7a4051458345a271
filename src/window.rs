// Thin wrapper around the minifb window so the event loop stays clean.
// Everything here is a straight question to the input system; the editor
// decides what the answers mean.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::types::FrameBuffer;

pub struct EditorWindow {
    window: Window,
}

impl EditorWindow {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&fb.pixels, fb.width, fb.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates. Pass-through
    /// mode: positions outside the window come back as-is, so the canvas
    /// mapping can reject them itself.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Pass)
    }

    pub fn left_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn right_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Right)
    }

    /// Vertical wheel movement since the last poll, if any.
    pub fn scroll_y(&self) -> Option<f32> {
        self.window
            .get_scroll_wheel()
            .and_then(|(_, y)| if y != 0.0 { Some(y) } else { None })
    }

    /// S = export the canvas.
    pub fn export_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    /// Enter = apply the pending dimensions.
    pub fn resize_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Enter, KeyRepeat::No)
    }

    /// Arrow keys nudge the pending dimension inputs (left/right = width,
    /// down/up = height). Repeat is allowed so holding a key scrubs.
    pub fn dim_nudge(&self) -> (isize, isize) {
        let mut dw = 0;
        let mut dh = 0;
        if self.window.is_key_pressed(Key::Right, KeyRepeat::Yes) {
            dw += 1;
        }
        if self.window.is_key_pressed(Key::Left, KeyRepeat::Yes) {
            dw -= 1;
        }
        if self.window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            dh += 1;
        }
        if self.window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            dh -= 1;
        }
        (dw, dh)
    }

    /// Number row 1..9 selects the matching preset swatch.
    pub fn preset_pressed_once(&self) -> Option<usize> {
        const DIGITS: [Key; 9] = [
            Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5,
            Key::Key6, Key::Key7, Key::Key8, Key::Key9,
        ];
        DIGITS
            .iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
    }
}
