//! Polygon geometry for freehand strokes.
//!
//! A completed freehand stroke is a polygon in image coordinates. The only
//! geometric operation the tool needs is rasterizing that polygon into a
//! boolean membership array over the image's pixel grid: pixel `(r, c)` is
//! true iff the polygon contains the point `(x=c, y=r)`.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Minimum number of vertices required for a valid polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A 2D point in image coordinates (x = column, y = row).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A closed polygon defined by a sequence of vertices.
///
/// The last vertex is implicitly connected back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// The vertices of the polygon in order.
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a polygon from (x, y) coordinate pairs.
    pub fn from_vertices(vertices: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self {
            vertices: vertices.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        }
    }

    /// Add a vertex to the polygon.
    pub fn push(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Check if the polygon encloses any area at all.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Check if a point is inside the polygon (ray casting algorithm).
    ///
    /// Degenerate polygons (fewer than [`MIN_POLYGON_VERTICES`] vertices)
    /// contain nothing.
    pub fn contains(&self, point: &Point) -> bool {
        if !self.is_valid() {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let (xi, yi) = (self.vertices[i].x, self.vertices[i].y);
            let (xj, yj) = (self.vertices[j].x, self.vertices[j].y);
            if ((yi > point.y) != (yj > point.y))
                && (point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Rasterize the polygon into a boolean membership array of `shape`.
    ///
    /// Every pixel `(r, c)` of the grid is tested at coordinates
    /// `(x = c, y = r)`. A degenerate polygon yields an all-false array.
    pub fn membership(&self, shape: (usize, usize)) -> Array2<bool> {
        Array2::from_shape_fn(shape, |(r, c)| {
            self.contains(&Point::new(c as f32, r as f32))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
