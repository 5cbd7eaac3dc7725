//! Cell rasterization for the line, circle and ellipse tools.
//!
//! All functions return strokes in grid coordinates; points may land outside
//! the grid and are dropped by [`PixelGrid::set`](crate::grid::PixelGrid::set)
//! when painted.

use std::collections::HashSet;

use crate::edit::{Point, Stroke};

/// Bresenham line from `from` to `to`, inclusive of both endpoints.
pub fn line(from: Point, to: Point) -> Stroke {
    let mut points = Stroke::new();
    let dx = (to.x - from.x).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let dy = -(to.y - from.y).abs();
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (from.x, from.y);
    loop {
        points.push(Point::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Midpoint circle of radius `r` around `center`.
pub fn circle(center: Point, r: i32) -> Stroke {
    if r <= 0 {
        return vec![center];
    }

    // One octant, mirrored eight ways afterwards.
    let mut octant = Stroke::new();
    let mut x = 0;
    let mut y = r;
    octant.push(Point::new(x, y));
    let mut p = 1 - r;

    while x <= y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x + 1 - 2 * y;
        }
        octant.push(Point::new(x, y));
    }

    translate(mirror8(&octant), center)
}

/// Midpoint ellipse with semi-axes `rx` and `ry` around `center`.
pub fn ellipse(center: Point, rx: i32, ry: i32) -> Stroke {
    if rx <= 0 || ry <= 0 {
        return vec![center];
    }
    // squared in f64 so large radii cannot overflow i32
    let rx2 = f64::from(rx) * f64::from(rx);
    let ry2 = f64::from(ry) * f64::from(ry);

    // One quadrant in two regions, split where the tangent slope passes -1.
    let mut quadrant = Stroke::new();
    let mut x = 0i32;
    let mut y = ry;
    quadrant.push(Point::new(x, y));

    let mut p1 = ry2 + 0.25 * rx2 - rx2 * f64::from(ry);
    while 2.0 * ry2 * f64::from(x) < 2.0 * rx2 * f64::from(y) {
        x += 1;
        if p1 < 0.0 {
            p1 += 2.0 * ry2 * f64::from(x) + ry2;
        } else {
            y -= 1;
            p1 += 2.0 * ry2 * f64::from(x) - 2.0 * rx2 * f64::from(y) + ry2;
        }
        quadrant.push(Point::new(x, y));
    }

    let mut p2 = ry2 * (f64::from(x) + 0.5).powi(2) + rx2 * (f64::from(y) - 1.0).powi(2)
        - rx2 * ry2;
    while y > 0 {
        y -= 1;
        if p2 < 0.0 {
            p2 += -2.0 * rx2 * f64::from(y) + rx2;
        } else {
            x += 1;
            p2 += 2.0 * ry2 * f64::from(x) - 2.0 * rx2 * f64::from(y) + rx2;
        }
        quadrant.push(Point::new(x, y));
    }

    translate(mirror4(&quadrant), center)
}

fn translate(points: Stroke, by: Point) -> Stroke {
    points
        .into_iter()
        .map(|p| Point::new(p.x + by.x, p.y + by.y))
        .collect()
}

// Points on the axes and diagonals mirror onto themselves; the seen set
// keeps each cell in the stroke exactly once.
fn mirror8(points: &[Point]) -> Stroke {
    let mut seen = HashSet::new();
    let mut all = Stroke::with_capacity(points.len() * 8);
    for &p in points {
        for m in [
            p,
            Point::new(p.y, p.x),
            Point::new(-p.y, p.x),
            Point::new(-p.x, p.y),
            Point::new(-p.x, -p.y),
            Point::new(-p.y, -p.x),
            Point::new(p.y, -p.x),
            Point::new(p.x, -p.y),
        ] {
            if seen.insert(m) {
                all.push(m);
            }
        }
    }
    all
}

fn mirror4(points: &[Point]) -> Stroke {
    let mut seen = HashSet::new();
    let mut all = Stroke::with_capacity(points.len() * 4);
    for &p in points {
        for m in [
            p,
            Point::new(-p.x, p.y),
            Point::new(-p.x, -p.y),
            Point::new(p.x, -p.y),
        ] {
            if seen.insert(m) {
                all.push(m);
            }
        }
    }
    all
}
