//! Pointer-to-edit translation: the active tool, active color and
//! previous-point bookkeeping of one editing session.

use crate::color::Color;
use crate::edit::{Edit, Point, Stroke};
use crate::fill::flood_fill;
use crate::grid::PixelGrid;
use crate::shapes;

/// The drawing tools a surface can put the session into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Fill,
    Line,
    Circle,
    Ellipse,
}

/// The 20-entry starter palette of the editor.
pub const DEFAULT_PALETTE: [Color; 20] = [
    Color::new(0, 0, 0, 255),
    Color::new(127, 127, 127, 255),
    Color::new(136, 0, 21, 255),
    Color::new(237, 28, 36, 255),
    Color::new(255, 127, 39, 255),
    Color::new(255, 242, 0, 255),
    Color::new(34, 177, 36, 255),
    Color::new(0, 162, 232, 255),
    Color::new(63, 72, 204, 255),
    Color::new(163, 73, 164, 255),
    Color::new(255, 255, 255, 255),
    Color::new(195, 195, 195, 255),
    Color::new(185, 122, 87, 255),
    Color::new(255, 174, 201, 255),
    Color::new(255, 201, 14, 255),
    Color::new(239, 228, 176, 255),
    Color::new(181, 230, 29, 255),
    Color::new(153, 217, 234, 255),
    Color::new(112, 146, 190, 255),
    Color::new(200, 191, 231, 255),
];

/// Per-surface editing state.
///
/// Owns the current tool, the current color and the previous sampled cell
/// used to coalesce sub-cell pointer motion. The session never owns pixel
/// state; it reads the grid to compute fill regions and hands finished
/// [`Edit`]s back to the document.
#[derive(Debug)]
pub struct CanvasSession {
    tool: Tool,
    color: Color,
    prev_point: Option<Point>,
    active: bool,
    line_anchor: Option<Point>,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasSession {
    pub fn new() -> Self {
        Self {
            tool: Tool::Pen,
            color: Color::new(0, 0, 0, 255),
            prev_point: None,
            active: false,
            line_anchor: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.line_anchor = None;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Pointer pressed: begin a streak. Clearing the previous point is what
    /// later tells a plain click apart from the tail of a drag.
    pub fn pointer_down(&mut self) {
        self.prev_point = None;
        self.active = true;
    }

    /// Pointer moved while pressed. Pen and eraser emit one single-cell edit
    /// per distinct cell entered; motion within a cell emits nothing.
    pub fn pointer_move(&mut self, cell: Point) -> Option<Edit> {
        if !self.active {
            return None;
        }
        match self.tool {
            Tool::Pen | Tool::Eraser => {
                if self.prev_point == Some(cell) {
                    return None;
                }
                self.prev_point = Some(cell);
                Some(Edit::point(self.draw_color(), cell))
            }
            _ => None,
        }
    }

    /// Pointer released. A click (no drag happened) applies the tool at
    /// `cell`; the end of a drag emits nothing further since the streak
    /// already painted its last cell.
    pub fn pointer_up(&mut self, cell: Point, grid: &PixelGrid) -> Option<Edit> {
        self.active = false;
        if self.prev_point.is_some() {
            return None;
        }
        match self.tool {
            Tool::Pen | Tool::Eraser => Some(Edit::point(self.draw_color(), cell)),
            Tool::Fill => {
                let target = grid.get(cell).ok()?;
                if target == self.color {
                    // painting a region its own color is a no-op
                    return None;
                }
                Some(Edit::new(self.color, flood_fill(grid, cell, target)))
            }
            Tool::Line => match self.line_anchor.take() {
                Some(anchor) => Some(Edit::new(self.color, shapes::line(anchor, cell))),
                None => {
                    self.line_anchor = Some(cell);
                    None
                }
            },
            // Circle and ellipse radii come from the surface UI; those tools
            // are stamped through the explicit methods below.
            Tool::Circle | Tool::Ellipse => None,
        }
    }

    /// One circle outline in the active color.
    pub fn stamp_circle(&self, center: Point, radius: i32) -> Edit {
        Edit::new(self.color, shapes::circle(center, radius))
    }

    /// One ellipse outline in the active color.
    pub fn stamp_ellipse(&self, center: Point, rx: i32, ry: i32) -> Edit {
        Edit::new(self.color, shapes::ellipse(center, rx, ry))
    }

    /// An edit that wipes the whole canvas back to transparent, expressed as
    /// an ordinary stroke so it participates in undo/redo.
    pub fn clear(grid: &PixelGrid) -> Edit {
        let mut stroke = Stroke::with_capacity(grid.width() as usize * grid.height() as usize);
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                stroke.push(Point::new(x, y));
            }
        }
        Edit::eraser(stroke)
    }

    fn draw_color(&self) -> Color {
        if self.tool == Tool::Eraser {
            Color::TRANSPARENT
        } else {
            self.color
        }
    }
}
