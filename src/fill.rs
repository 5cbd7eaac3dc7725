use std::collections::HashSet;

use crate::color::Color;
use crate::edit::{Point, Stroke};
use crate::grid::PixelGrid;

/// Collects the maximal 4-connected region of cells matching `target`,
/// growing outward from `seed`. Callers pass the color currently at `seed`;
/// if `target` differs from it, or `seed` is off the grid, the region is
/// empty.
///
/// Uses an explicit worklist and a visited set so that filling a large
/// canvas can neither recurse past the stack limit nor visit a cell twice.
pub fn flood_fill(grid: &PixelGrid, seed: Point, target: Color) -> Stroke {
    let matches = |point: Point| grid.get(point).is_ok_and(|color| color == target);
    if !matches(seed) {
        return Stroke::new();
    }

    let mut region = Stroke::new();
    let mut visited = HashSet::new();
    let mut worklist = vec![seed];
    visited.insert(seed);

    while let Some(point) = worklist.pop() {
        region.push(point);

        let neighbors = [
            Point::new(point.x + 1, point.y),
            Point::new(point.x - 1, point.y),
            Point::new(point.x, point.y + 1),
            Point::new(point.x, point.y - 1),
        ];
        for next in neighbors {
            if matches(next) && visited.insert(next) {
                worklist.push(next);
            }
        }
    }

    region
}
