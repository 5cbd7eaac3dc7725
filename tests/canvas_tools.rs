use pixeledit::{CanvasSession, Color, DEFAULT_PALETTE, Edit, PixelGrid, Point, Tool};

const RED: Color = Color::new(255, 0, 0, 255);
const GREEN: Color = Color::new(0, 255, 0, 255);
const BLACK: Color = Color::new(0, 0, 0, 255);

#[test]
fn drag_emits_one_edit_per_distinct_cell() {
    let mut session = CanvasSession::new();
    session.set_color(RED);
    session.pointer_down();

    let a = session.pointer_move(Point::new(0, 0));
    let b = session.pointer_move(Point::new(0, 0)); // sub-cell motion
    let c = session.pointer_move(Point::new(1, 0));

    assert_eq!(a, Some(Edit::new(RED, vec![Point::new(0, 0)])));
    assert!(b.is_none());
    assert_eq!(c, Some(Edit::new(RED, vec![Point::new(1, 0)])));

    // releasing after a drag does not repaint the last cell
    let grid = PixelGrid::new(4, 4).unwrap();
    assert!(session.pointer_up(Point::new(1, 0), &grid).is_none());
}

#[test]
fn click_paints_a_single_cell() {
    let mut session = CanvasSession::new();
    session.set_color(RED);
    let grid = PixelGrid::new(4, 4).unwrap();

    session.pointer_down();
    let edit = session.pointer_up(Point::new(2, 2), &grid);
    assert_eq!(edit, Some(Edit::new(RED, vec![Point::new(2, 2)])));
}

#[test]
fn pointer_motion_without_a_press_is_ignored() {
    let mut session = CanvasSession::new();
    assert!(session.pointer_move(Point::new(1, 1)).is_none());
}

#[test]
fn eraser_paints_the_transparent_color() {
    let mut session = CanvasSession::new();
    session.set_color(RED);
    session.set_tool(Tool::Eraser);
    let grid = PixelGrid::new(4, 4).unwrap();

    session.pointer_down();
    let edit = session.pointer_up(Point::new(1, 1), &grid).unwrap();
    assert_eq!(edit.color, Color::TRANSPARENT);
}

#[test]
fn fill_click_covers_the_connected_region() {
    let mut grid = PixelGrid::new(3, 3).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            grid.set(Point::new(x, y), BLACK);
        }
    }
    grid.set(Point::new(1, 1), Color::new(255, 255, 255, 255));

    let mut session = CanvasSession::new();
    session.set_tool(Tool::Fill);
    session.set_color(GREEN);

    session.pointer_down();
    let edit = session.pointer_up(Point::new(0, 0), &grid).unwrap();
    assert_eq!(edit.color, GREEN);
    assert_eq!(edit.stroke.len(), 8);
    assert!(!edit.stroke.contains(&Point::new(1, 1)));
}

#[test]
fn fill_with_the_regions_own_color_is_a_noop() {
    let grid = PixelGrid::new(3, 3).unwrap();
    let mut session = CanvasSession::new();
    session.set_tool(Tool::Fill);
    session.set_color(Color::TRANSPARENT);

    session.pointer_down();
    assert!(session.pointer_up(Point::new(0, 0), &grid).is_none());
}

#[test]
fn fill_outside_the_grid_is_ignored() {
    let grid = PixelGrid::new(3, 3).unwrap();
    let mut session = CanvasSession::new();
    session.set_tool(Tool::Fill);
    session.set_color(GREEN);

    session.pointer_down();
    assert!(session.pointer_up(Point::new(-1, -1), &grid).is_none());
}

#[test]
fn line_tool_needs_two_anchor_clicks() {
    let grid = PixelGrid::new(8, 8).unwrap();
    let mut session = CanvasSession::new();
    session.set_tool(Tool::Line);
    session.set_color(RED);

    session.pointer_down();
    assert!(session.pointer_up(Point::new(0, 0), &grid).is_none());

    session.pointer_down();
    let edit = session.pointer_up(Point::new(3, 3), &grid).unwrap();
    assert_eq!(edit.color, RED);
    assert_eq!(edit.stroke.first(), Some(&Point::new(0, 0)));
    assert_eq!(edit.stroke.last(), Some(&Point::new(3, 3)));
    assert_eq!(edit.stroke.len(), 4);
}

#[test]
fn switching_tools_drops_a_pending_line_anchor() {
    let grid = PixelGrid::new(8, 8).unwrap();
    let mut session = CanvasSession::new();
    session.set_tool(Tool::Line);

    session.pointer_down();
    assert!(session.pointer_up(Point::new(0, 0), &grid).is_none());

    session.set_tool(Tool::Line); // re-selecting resets the anchor
    session.pointer_down();
    assert!(session.pointer_up(Point::new(5, 5), &grid).is_none());
}

#[test]
fn circle_and_ellipse_stamps_use_the_active_color() {
    let mut session = CanvasSession::new();
    session.set_color(GREEN);

    let circle = session.stamp_circle(Point::new(4, 4), 3);
    assert_eq!(circle.color, GREEN);
    assert!(circle.stroke.contains(&Point::new(7, 4)));

    let ellipse = session.stamp_ellipse(Point::new(4, 4), 4, 2);
    assert_eq!(ellipse.color, GREEN);
    assert!(ellipse.stroke.contains(&Point::new(0, 4)));
    assert!(ellipse.stroke.contains(&Point::new(4, 6)));
}

#[test]
fn clear_produces_one_whole_canvas_edit() {
    let mut grid = PixelGrid::new(3, 2).unwrap();
    grid.set(Point::new(1, 1), RED);

    let edit = CanvasSession::clear(&grid);
    assert_eq!(edit.color, Color::TRANSPARENT);
    assert_eq!(edit.stroke.len(), 6);

    grid.apply(&edit);
    assert_eq!(grid.get(Point::new(1, 1)).unwrap(), Color::TRANSPARENT);
}

#[test]
fn default_palette_starts_with_black_and_has_twenty_entries() {
    assert_eq!(DEFAULT_PALETTE.len(), 20);
    assert_eq!(DEFAULT_PALETTE[0], BLACK);
}
