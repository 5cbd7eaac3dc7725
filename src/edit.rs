use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A grid-cell coordinate. These are logical art pixels, not device pixels.
///
/// Serialized as the `[x, y]` pair the surface protocol uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// The ordered list of cells touched by one edit.
pub type Stroke = Vec<Point>;

/// One undoable unit of change: paint every point of `stroke` with `color`.
///
/// Within a single edit, later points override earlier ones at the same
/// cell; the order only matters for replay determinism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub color: Color,
    pub stroke: Stroke,
}

impl Edit {
    pub fn new(color: Color, stroke: Stroke) -> Self {
        Self { color, stroke }
    }

    /// A single-cell edit, the unit the pen and eraser tools emit.
    pub fn point(color: Color, point: Point) -> Self {
        Self {
            color,
            stroke: vec![point],
        }
    }

    /// An erasing edit paints the designated transparent color.
    pub fn eraser(stroke: Stroke) -> Self {
        Self {
            color: Color::TRANSPARENT,
            stroke,
        }
    }
}
