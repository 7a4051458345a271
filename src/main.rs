// What you SEE and DO:
// • A toolbar of preset swatches on top; click one (or press 1-9) to pick
//   the paint color. The box on the right shows the current color.
// • Drag Left Mouse over the canvas to paint cells; Right Mouse erases.
// • Scroll wheel zooms the cells between 8 and 64 pixels.
// • Arrow keys adjust the pending canvas size shown in the HUD; Enter
//   applies it (resizing clears the canvas). S saves the PNG. ESC quits.

use clap::Parser;
use std::path::PathBuf;

use pixelpad::color::{self, Rgb};
use pixelpad::editor::{ButtonTracker, Editor, PointerButton};
use pixelpad::error::Result;
use pixelpad::export;
use pixelpad::grid::{self, Grid};
use pixelpad::render;
use pixelpad::types::FrameBuffer;
use pixelpad::window::EditorWindow;

const WINDOW_W: usize = 960;
const WINDOW_H: usize = 600;

#[derive(Parser, Debug)]
#[command(name = "pixelpad", about = "Tiny pixel-art editor")]
struct Args {
    /// Canvas width in cells
    #[arg(long, default_value_t = 16,
          value_parser = clap::value_parser!(u64).range(grid::MIN_DIM as u64..=grid::MAX_DIM as u64))]
    width: u64,

    /// Canvas height in cells
    #[arg(long, default_value_t = 16,
          value_parser = clap::value_parser!(u64).range(grid::MIN_DIM as u64..=grid::MAX_DIM as u64))]
    height: u64,

    /// Initial on-screen cell size in pixels (clamped to 8..64)
    #[arg(long, default_value_t = 16.0)]
    zoom: f32,

    /// Initial paint color as #RRGGBB
    #[arg(long, default_value = "#000000", value_parser = Rgb::from_hex)]
    color: Rgb,

    /// Where the exported PNG goes
    #[arg(long, default_value = "pixel-art.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    /* --- Editor state + window setup ---
       Visual: an empty light canvas under a dark toolbar strip. */
    let palette = color::preset_palette()?;
    let grid = match Grid::new(args.width as usize, args.height as usize, args.zoom) {
        Some(g) => g,
        // clap's range check makes this unreachable, but the constructor
        // owns the rule, so honor its answer.
        None => {
            eprintln!("canvas dimensions out of range");
            std::process::exit(2);
        }
    };
    let mut editor = Editor::new(grid, args.color);
    let mut win = EditorWindow::new("PixelPad", WINDOW_W, WINDOW_H)?;
    let mut fb = FrameBuffer::new(WINDOW_W, WINDOW_H);

    // Turns per-frame button polling into press/release edges.
    let mut buttons = ButtonTracker::default();

    /* ------------------------------ Main loop ------------------------------ */
    while win.is_open() && !win.esc_pressed() {
        /* 1) Keyboard: preset selection, resize form, export trigger. */
        if let Some(i) = win.preset_pressed_once() {
            if let Some(&c) = palette.get(i) {
                editor.set_active_color(c);
            }
        }
        let (dw, dh) = win.dim_nudge();
        if dw != 0 || dh != 0 {
            editor.adjust_pending(dw, dh);
        }
        if win.resize_pressed_once() {
            editor.apply_resize();
        }
        if win.export_pressed_once() {
            export::save_png(&editor.grid, &args.output)?;
            editor.set_status(format!("SAVED {}", args.output.display()));
        }

        /* 2) Wheel: one fixed zoom step per tick, clamped by the grid. */
        if let Some(dy) = win.scroll_y() {
            editor.wheel(dy);
        }

        /* 3) Mouse: press edges start a gesture (or pick a swatch when the
           press lands on the toolbar); any release edge ends it, even if
           the other button is still held. */
        let edges = buttons.update(win.left_down(), win.right_down());
        if let Some((mx, my)) = win.mouse_pos() {
            if edges.primary_pressed {
                if let Some(i) = render::swatch_hit(mx, my, palette.len()) {
                    editor.set_active_color(palette[i]);
                } else {
                    let (rx, ry) = render::canvas_rel(mx, my);
                    editor.pointer_down(PointerButton::Primary, rx, ry);
                }
            }
            if edges.secondary_pressed {
                let (rx, ry) = render::canvas_rel(mx, my);
                editor.pointer_down(PointerButton::Secondary, rx, ry);
            }

            /* 4) While a gesture is active, every move paints or erases the
               cell under the cursor. Idle moves do nothing. */
            let (rx, ry) = render::canvas_rel(mx, my);
            editor.pointer_move(rx, ry);
        }
        if edges.any_released {
            editor.pointer_up();
        }

        /* 5) Project state to pixels and present. */
        render::render(&mut fb, &editor, &palette);
        win.present(&fb)?;
    }

    Ok(())
}
