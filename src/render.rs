// Software rendering: project the editor state into the framebuffer.
// Visual layout: a toolbar strip of preset swatches across the top, the
// canvas below it, and one HUD text line along the bottom edge.

use crate::color::Rgb;
use crate::editor::{Editor, Mode};
use crate::types::FrameBuffer;

/// Height of the toolbar strip; the canvas origin sits just below it.
pub const TOOLBAR_H: i32 = 28;
const SWATCH: i32 = 20;
const SWATCH_GAP: i32 = 4;

const WINDOW_BG: u32 = 0x0030_3030;
const TOOLBAR_BG: u32 = 0x0020_2020;
const CANVAS_BG: u32 = 0x00F2_F2F2;
const GRID_LINE: u32 = 0x00D8_D8D8;
const HIGHLIGHT: u32 = 0x00FF_FFFF;
const HUD_TEXT: u32 = 0x00FF_FFFF;

/// Window position -> canvas-relative position (canvas origin is just
/// below the toolbar).
pub fn canvas_rel(px: f32, py: f32) -> (f32, f32) {
    (px, py - TOOLBAR_H as f32)
}

/// Which preset swatch (if any) sits under a window position.
pub fn swatch_hit(px: f32, py: f32, palette_len: usize) -> Option<usize> {
    if py < 4.0 || py >= (4 + SWATCH) as f32 {
        return None;
    }
    for i in 0..palette_len {
        let x0 = (SWATCH_GAP + i as i32 * (SWATCH + SWATCH_GAP)) as f32;
        if px >= x0 && px < x0 + SWATCH as f32 {
            return Some(i);
        }
    }
    None
}

/// Redraw everything. The canvas pass walks only the painted cells, so a
/// zoom change costs O(painted cells), not O(grid area).
pub fn render(fb: &mut FrameBuffer, editor: &Editor, palette: &[Rgb]) {
    fb.clear(WINDOW_BG);

    draw_canvas(fb, editor);
    draw_toolbar(fb, editor, palette);
    draw_hud(fb, editor);
}

fn draw_canvas(fb: &mut FrameBuffer, editor: &Editor) {
    let grid = &editor.grid;
    let zoom = grid.zoom();
    let w_px = (grid.width() as f32 * zoom) as i32;
    let h_px = (grid.height() as f32 * zoom) as i32;

    // Backdrop: unset cells show through as the light canvas color.
    fb.fill_rect(0, TOOLBAR_H, w_px, h_px, CANVAS_BG);

    // Faint cell boundaries so the user can aim at empty slots.
    for c in 0..=grid.width() {
        let x = (c as f32 * zoom) as i32;
        fb.fill_rect(x, TOOLBAR_H, 1, h_px, GRID_LINE);
    }
    for r in 0..=grid.height() {
        let y = TOOLBAR_H + (r as f32 * zoom) as i32;
        fb.fill_rect(0, y, w_px, 1, GRID_LINE);
    }

    // Painted cells as zoom-sized squares. Edges are computed from the
    // neighbouring boundary so fractional zoom levels tile without seams.
    for (x, y, color) in grid.painted_cells() {
        let x0 = (x as f32 * zoom) as i32;
        let y0 = (y as f32 * zoom) as i32;
        let x1 = ((x + 1) as f32 * zoom) as i32;
        let y1 = ((y + 1) as f32 * zoom) as i32;
        fb.fill_rect(x0, TOOLBAR_H + y0, x1 - x0, y1 - y0, color.pack());
    }
}

fn draw_toolbar(fb: &mut FrameBuffer, editor: &Editor, palette: &[Rgb]) {
    fb.fill_rect(0, 0, fb.width as i32, TOOLBAR_H, TOOLBAR_BG);

    for (i, color) in palette.iter().enumerate() {
        let x = SWATCH_GAP + i as i32 * (SWATCH + SWATCH_GAP);
        if *color == editor.active_color() {
            // White ring marks the selected swatch.
            fb.fill_rect(x - 2, 2, SWATCH + 4, SWATCH + 4, HIGHLIGHT);
        }
        fb.fill_rect(x, 4, SWATCH, SWATCH, color.pack());
    }

    // Current color box on the right, whatever its source (swatch or CLI).
    let x = fb.width as i32 - SWATCH - SWATCH_GAP;
    fb.fill_rect(x - 2, 2, SWATCH + 4, SWATCH + 4, HIGHLIGHT);
    fb.fill_rect(x, 4, SWATCH, SWATCH, editor.active_color().pack());
}

fn draw_hud(fb: &mut FrameBuffer, editor: &Editor) {
    let mode = match editor.mode() {
        Mode::Idle => "IDLE",
        Mode::Painting => "PAINT",
        Mode::Erasing => "ERASE",
    };
    let (pw, ph) = editor.pending_dims();
    let line = format!(
        "{}X{} Z:{:.1} | NEW {}X{} | {} | {}",
        editor.grid.width(),
        editor.grid.height(),
        editor.grid.zoom(),
        pw,
        ph,
        mode,
        editor.status(),
    );
    let y = fb.height as i32 - 12;
    draw_text_5x7(fb, 8, y, &line, HUD_TEXT);
}

/* ---------- 5x7 bitmap font for the HUD line ---------- */

/// Return a 5x7 glyph bitmap. Each u8 is a row; the low 5 bits are the
/// pixels (bit 4 = leftmost). Unknown characters render as a blank column.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b01110,0b00000,0b00000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),
        '/' => g!(0b00001,0b00001,0b00010,0b00100,0b01000,0b10000,0b10000),
        '\\' => g!(0b10000,0b10000,0b01000,0b00100,0b00010,0b00001,0b00001),
        '#' => g!(0b01010,0b11111,0b01010,0b01010,0b01010,0b11111,0b01010),

        _ => None,
    }
}

/// Draw a single glyph at (x, y) with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.put_pixel(x + rx as i32 + 1, y + ry as i32 + 1, 0x0000_0000);
                }
            }
        }
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.put_pixel(x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string; lowercase input is mapped through the uppercase
/// glyph table. Each glyph is 5x7 with 1 pixel of spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch.to_ascii_uppercase(), color);
        x += 6;
    }
}
