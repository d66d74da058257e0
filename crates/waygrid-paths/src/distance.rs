//! Distance metrics on grid coordinates.

use waygrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Exact on a 4-connected unit-cost grid, which is what makes it an
/// admissible A* heuristic here.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points, truncated to an integer.
///
/// Truncation makes this inadmissible as a search heuristic in general, so
/// it is provided as a plain metric only and is not used by either search
/// mode.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt() as i32
}
