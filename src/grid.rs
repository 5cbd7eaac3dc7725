use thiserror::Error;

use crate::color::Color;
use crate::edit::{Edit, Point};

/// Errors from grid construction and access. These are contract violations
/// by the caller rather than recoverable I/O conditions.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// The authoritative pixel state of one document: a fixed-size 2-D array of
/// colors indexed by cell coordinate.
///
/// Dimensions never change for the lifetime of a grid and every cell always
/// holds a valid color; a fresh grid is fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<Color>, // row-major, y * width + x
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Color::TRANSPARENT; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `point` addresses a cell of this grid.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    pub fn get(&self, point: Point) -> Result<Color, GridError> {
        if !self.contains(point) {
            return Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(point)])
    }

    /// Writes one cell. Out-of-range coordinates are silently ignored so a
    /// stroke running off the edge of the canvas never fails.
    pub fn set(&mut self, point: Point, color: Color) {
        if self.contains(point) {
            let i = self.index(point);
            self.cells[i] = color;
        }
    }

    /// Paints every stroke point of `edit`, in order.
    pub fn apply(&mut self, edit: &Edit) {
        for &point in &edit.stroke {
            self.set(point, edit.color);
        }
    }

    fn index(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}
