use std::fmt;

use waygrid_core::{Grid, Point};

/// One entry of a search trace: a node at the moment it became current.
///
/// `seq` is the monotone counter stamped when the node first entered the
/// frontier (0 for the start node). It is ordering information for
/// visualization only and never acts as a priority key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceNode {
    pub pos: Point,
    pub cost: i32,
    pub seq: u32,
}

// ---------------------------------------------------------------------------
// Internal node for the best-first searches
// ---------------------------------------------------------------------------

/// Per-coordinate search bookkeeping. Keyed by flat cell index, so frontier
/// membership and relaxation are looked up by coordinate alone, independent
/// of cost.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) seq: u32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            seq: 0,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Errors raised before a search begins. An unreachable goal is *not* an
/// error; it is reported as an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start coordinate lies outside the grid.
    StartOutOfBounds { pos: Point, size: Point },
    /// The goal coordinate lies outside the grid.
    GoalOutOfBounds { pos: Point, size: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { pos, size } => {
                write!(f, "start {pos} is outside the {}x{} grid", size.x, size.y)
            }
            Self::GoalOutOfBounds { pos, size } => {
                write!(f, "goal {pos} is outside the {}x{} grid", size.x, size.y)
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// PathField
// ---------------------------------------------------------------------------

/// Central coordinator for searches over one grid size.
///
/// `PathField` owns the flat node array so that repeated queries reuse its
/// storage instead of reallocating. Nodes are lazily invalidated between
/// searches by a generation counter; the array itself is never cleared.
pub struct PathField {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
}

impl PathField {
    /// Create a new `PathField` for a width×height grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h],
            generation: 0,
        }
    }

    /// Change the grid size this field serves.
    ///
    /// If the new cell count fits within existing capacity, the node array is
    /// kept and only the generation counter is bumped so stale entries are
    /// ignored. Otherwise the array is reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let new_len = w * h;
        let capacity = self.nodes.len();
        self.width = w;
        self.height = h;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid size currently served, as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// Match the field's dimensions to `grid`, if they differ.
    pub(crate) fn fit_grid(&mut self, grid: &Grid) {
        if self.width != grid.width() as usize || self.height != grid.height() as usize {
            self.resize(grid.width(), grid.height());
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Follow parent links from `goal_idx` back to the parentless start,
    /// collecting coordinates goal-first. The start node is included.
    pub(crate) fn build_path(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut field = PathField::new(20, 20);
        let original_cap = field.nodes.len(); // 400

        field.resize(5, 5);
        assert_eq!(field.size(), Point::new(5, 5));
        assert_eq!(field.nodes.len(), original_cap); // still 400
        // Generation bumped so stale entries are ignored.
        assert!(field.generation > 0);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut field = PathField::new(5, 5);
        let old_cap = field.nodes.len(); // 25

        field.resize(20, 20);
        assert_eq!(field.size(), Point::new(20, 20));
        assert!(field.nodes.len() > old_cap);
        assert_eq!(field.nodes.len(), 400);
    }

    #[test]
    fn resize_same_area_preserves_capacity() {
        let mut field = PathField::new(10, 10);
        let cap = field.nodes.len();

        field.resize(5, 20);
        assert_eq!(field.nodes.len(), cap);
        assert_eq!(field.size(), Point::new(5, 20));
    }

    #[test]
    fn idx_and_point_round_trip() {
        let field = PathField::new(7, 3);
        for y in 0..3 {
            for x in 0..7 {
                let p = Point::new(x, y);
                let i = field.idx(p).unwrap();
                assert_eq!(field.point(i), p);
            }
        }
        assert!(field.idx(Point::new(7, 0)).is_none());
        assert!(field.idx(Point::new(0, 3)).is_none());
        assert!(field.idx(Point::new(-1, 1)).is_none());
    }

    #[test]
    fn search_error_messages() {
        let err = SearchError::StartOutOfBounds {
            pos: Point::new(-1, 2),
            size: Point::new(5, 5),
        };
        assert_eq!(err.to_string(), "start (-1, 2) is outside the 5x5 grid");
        let err = SearchError::GoalOutOfBounds {
            pos: Point::new(9, 9),
            size: Point::new(5, 5),
        };
        assert_eq!(err.to_string(), "goal (9, 9) is outside the 5x5 grid");
    }
}
