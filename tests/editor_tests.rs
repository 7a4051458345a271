// Editor behavior: the pointer gesture state machine, the pointer-to-cell
// mapping, wheel zoom, and the resize form.

use pixelpad::color::Rgb;
use pixelpad::editor::{ButtonTracker, Editor, Mode, PointerButton};
use pixelpad::grid::{Grid, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

fn rgb(hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap()
}

fn editor_4x4() -> Editor {
    Editor::new(Grid::new(4, 4, 16.0).unwrap(), rgb("#FF0000"))
}

/* ---------------- Gesture state machine ---------------- */

#[test]
fn primary_press_enters_painting_and_paints() {
    let mut ed = editor_4x4();
    ed.pointer_down(PointerButton::Primary, 8.0, 8.0);
    assert_eq!(ed.mode(), Mode::Painting);
    assert_eq!(ed.grid.color_at(0, 0), Some(rgb("#FF0000")));
    ed.pointer_up();
    assert_eq!(ed.mode(), Mode::Idle);
}

#[test]
fn secondary_press_enters_erasing_and_erases() {
    let mut ed = editor_4x4();
    ed.grid.paint(1, 1, rgb("#00FF00"));
    ed.pointer_down(PointerButton::Secondary, 24.0, 24.0);
    assert_eq!(ed.mode(), Mode::Erasing);
    assert_eq!(ed.grid.color_at(1, 1), None);
    ed.pointer_up();
    assert_eq!(ed.mode(), Mode::Idle);
}

#[test]
fn press_outside_the_canvas_stays_idle() {
    let mut ed = editor_4x4();
    // At or before the origin counts as outside.
    ed.pointer_down(PointerButton::Primary, 0.0, 8.0);
    ed.pointer_down(PointerButton::Primary, -5.0, 8.0);
    // Past the far edge (4 cells * zoom 16 = 64) too.
    ed.pointer_down(PointerButton::Primary, 80.0, 8.0);
    assert_eq!(ed.mode(), Mode::Idle);
    assert_eq!(ed.grid.painted_cells().count(), 0);
}

#[test]
fn moves_while_painting_paint_each_cell_under_the_cursor() {
    let mut ed = editor_4x4();
    ed.pointer_down(PointerButton::Primary, 8.0, 8.0);
    ed.pointer_move(24.0, 8.0);
    ed.pointer_move(40.0, 8.0);
    assert_eq!(ed.grid.color_at(0, 0), Some(rgb("#FF0000")));
    assert_eq!(ed.grid.color_at(1, 0), Some(rgb("#FF0000")));
    assert_eq!(ed.grid.color_at(2, 0), Some(rgb("#FF0000")));
}

#[test]
fn moves_while_idle_do_nothing() {
    let mut ed = editor_4x4();
    ed.pointer_move(8.0, 8.0);
    assert_eq!(ed.grid.painted_cells().count(), 0);
}

#[test]
fn moves_outside_the_canvas_are_ignored_without_ending_the_gesture() {
    let mut ed = editor_4x4();
    ed.pointer_down(PointerButton::Primary, 8.0, 8.0);
    ed.pointer_move(-10.0, -10.0);
    assert_eq!(ed.mode(), Mode::Painting);
    ed.pointer_move(24.0, 8.0);
    assert_eq!(ed.grid.color_at(1, 0), Some(rgb("#FF0000")));
}

#[test]
fn dragging_over_a_painted_cell_recolors_it() {
    let mut ed = editor_4x4();
    ed.grid.paint(1, 0, rgb("#0000FF"));
    ed.pointer_down(PointerButton::Primary, 8.0, 8.0);
    ed.pointer_move(24.0, 8.0);
    assert_eq!(ed.grid.color_at(1, 0), Some(rgb("#FF0000")));
}

#[test]
fn releasing_either_button_of_a_chord_ends_the_gesture() {
    // Hold Right (erasing), chord Left (painting), then release Left while
    // Right stays held: the release must still end the gesture, so later
    // moves with only Right down cannot keep painting.
    let mut ed = editor_4x4();
    let mut buttons = ButtonTracker::default();

    let edges = buttons.update(false, true);
    assert!(edges.secondary_pressed);
    ed.pointer_down(PointerButton::Secondary, 8.0, 8.0);

    let edges = buttons.update(true, true);
    assert!(edges.primary_pressed && !edges.any_released);
    ed.pointer_down(PointerButton::Primary, 8.0, 8.0);
    assert_eq!(ed.mode(), Mode::Painting);

    let edges = buttons.update(false, true);
    assert!(edges.any_released);
    ed.pointer_up();
    assert_eq!(ed.mode(), Mode::Idle);
    ed.pointer_move(24.0, 8.0);
    assert_eq!(ed.grid.color_at(1, 0), None);
}

#[test]
fn button_tracker_reports_edges_only_on_transitions() {
    let mut buttons = ButtonTracker::default();
    let edges = buttons.update(true, false);
    assert!(edges.primary_pressed && !edges.any_released);
    // Held steady: no new edges.
    let edges = buttons.update(true, false);
    assert_eq!(edges, Default::default());
    let edges = buttons.update(false, false);
    assert!(edges.any_released && !edges.primary_pressed);
}

/* ---------------- Pointer-to-cell mapping ---------------- */

#[test]
fn mapping_uses_floor_division_by_zoom() {
    let ed = editor_4x4();
    assert_eq!(ed.cell_under(0.5, 0.5), Some((0, 0)));
    assert_eq!(ed.cell_under(15.9, 15.9), Some((0, 0)));
    assert_eq!(ed.cell_under(16.0, 16.0), Some((1, 1)));
    assert_eq!(ed.cell_under(63.9, 63.9), Some((3, 3)));
}

#[test]
fn origin_and_beyond_are_outside() {
    let ed = editor_4x4();
    assert_eq!(ed.cell_under(0.0, 8.0), None);
    assert_eq!(ed.cell_under(8.0, 0.0), None);
    assert_eq!(ed.cell_under(-1.0, -1.0), None);
    assert_eq!(ed.cell_under(64.0, 8.0), None);
    assert_eq!(ed.cell_under(8.0, 64.0), None);
}

/* ---------------- Wheel zoom ---------------- */

#[test]
fn wheel_moves_zoom_one_fixed_step_per_tick() {
    let mut ed = editor_4x4();
    ed.wheel(3.0); // magnitude is irrelevant, only the sign counts
    assert_eq!(ed.grid.zoom(), 16.0 + ZOOM_STEP);
    ed.wheel(-0.1);
    ed.wheel(-0.1);
    assert_eq!(ed.grid.zoom(), 16.0 - ZOOM_STEP);
    ed.wheel(0.0);
    assert_eq!(ed.grid.zoom(), 16.0 - ZOOM_STEP);
}

#[test]
fn cumulative_wheel_input_stays_clamped() {
    let mut ed = Editor::new(Grid::new(4, 4, MIN_ZOOM).unwrap(), rgb("#FF0000"));
    for _ in 0..50 {
        ed.wheel(-1.0);
    }
    assert_eq!(ed.grid.zoom(), MIN_ZOOM);
    for _ in 0..500 {
        ed.wheel(1.0);
    }
    assert_eq!(ed.grid.zoom(), MAX_ZOOM);
}

/* ---------------- Resize form ---------------- */

#[test]
fn apply_resize_validates_then_clears() {
    let mut ed = editor_4x4();
    ed.grid.paint(1, 1, rgb("#00FF00"));

    // Same size: quiet no-op, the painted cell survives.
    ed.apply_resize();
    assert_eq!(ed.grid.color_at(1, 1), Some(rgb("#00FF00")));

    // Grow by one in each direction and apply: everything is cleared.
    ed.adjust_pending(1, 1);
    ed.apply_resize();
    assert_eq!((ed.grid.width(), ed.grid.height()), (5, 5));
    assert_eq!(ed.grid.color_at(1, 1), None);
}

#[test]
fn invalid_pending_dimensions_are_rejected_with_a_message() {
    let mut ed = editor_4x4();
    ed.grid.paint(0, 0, rgb("#00FF00"));
    ed.adjust_pending(-4, 0); // width drops to 0
    ed.apply_resize();
    assert_eq!((ed.grid.width(), ed.grid.height()), (4, 4));
    assert_eq!(ed.grid.color_at(0, 0), Some(rgb("#00FF00")));
    assert!(ed.status().contains("INVALID SIZE"));
}

#[test]
fn same_size_apply_drops_a_stale_message() {
    let mut ed = editor_4x4();
    ed.adjust_pending(-4, 0); // width down to 0
    ed.apply_resize();
    assert!(ed.status().contains("INVALID SIZE"));

    // Back to the grid's current size: the quiet no-op must not keep
    // showing the old validation message.
    ed.adjust_pending(4, 0);
    ed.apply_resize();
    assert_eq!(ed.status(), "");
    assert_eq!((ed.grid.width(), ed.grid.height()), (4, 4));
}

#[test]
fn active_color_is_independent_of_the_grid() {
    let mut ed = editor_4x4();
    ed.set_active_color(rgb("#00FFFF"));
    ed.adjust_pending(1, 0);
    ed.apply_resize();
    assert_eq!(ed.active_color(), rgb("#00FFFF"));
}
