//! The [`Grid`] type — a rectangular board of classified cells.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::geom::Point;

/// Neighbor offsets in expansion order: right, down, left, up.
///
/// The order is fixed; search tie-breaking is only reproducible because
/// neighbors are always enumerated in this sequence.
const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// A width×height board of [`Cell`]s, row-major, anchored at the origin.
///
/// Invariant: every stored cell's `pos` matches its matrix position. All
/// mutation rewrites the cell kind in place and never moves cells, so the
/// invariant holds for the life of the grid. Edits take `&mut self` while
/// searches borrow `&self`, which keeps the two phases mutually exclusive.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid of the given dimensions, entirely empty.
    /// Negative dimensions clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut cells = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self {
            width: w,
            height: h,
            cells,
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The up-to-4 axis-aligned neighbor cells of `p`, in fixed right, down,
    /// left, up order. Out-of-range positions are omitted, not errors.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Cell> + '_ {
        DIRS.iter().filter_map(move |&d| self.at(p + d))
    }

    fn set_kind(&mut self, p: Point, kind: CellKind) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size(),
        })?;
        self.cells[i].kind = kind;
        Ok(())
    }

    /// Place a wall at `p`.
    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        self.set_kind(p, CellKind::Wall)
    }

    /// Reset the cell at `p` to empty.
    pub fn clear(&mut self, p: Point) -> Result<(), GridError> {
        self.set_kind(p, CellKind::Empty)
    }

    /// Toggle the wall state of one cell: a wall becomes empty, anything
    /// else (empty or marker) becomes a wall.
    pub fn toggle_wall(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size(),
        })?;
        self.cells[i].kind = match self.cells[i].kind {
            CellKind::Wall => CellKind::Empty,
            CellKind::Empty | CellKind::PathMarker => CellKind::Wall,
        };
        Ok(())
    }

    /// Reset every path marker back to empty, leaving walls untouched.
    pub fn clear_markers(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.kind == CellKind::PathMarker {
                cell.kind = CellKind::Empty;
            }
        }
    }

    /// Paint a path marker on every listed cell, for display of a computed
    /// path. Fails on the first out-of-bounds point.
    pub fn mark_path(&mut self, path: &[Point]) -> Result<(), GridError> {
        for &p in path {
            self.set_kind(p, CellKind::PathMarker)?;
        }
        Ok(())
    }

    /// Fill every cell with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        for cell in self.cells.iter_mut() {
            cell.kind = kind;
        }
    }

    /// Apply a single edit operation.
    pub fn edit(&mut self, op: EditOp) -> Result<(), GridError> {
        match op {
            EditOp::ToggleWall(p) => self.toggle_wall(p),
            EditOp::ClearMarkers => {
                self.clear_markers();
                Ok(())
            }
        }
    }

    /// Row-major iterator over all cells, for display.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// EditOp / GridError
// ---------------------------------------------------------------------------

/// A single grid edit, as issued by the editing collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOp {
    /// Toggle the wall state of one cell.
    ToggleWall(Point),
    /// Reset every path marker to empty.
    ClearMarkers,
}

/// Errors from grid edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The target cell lies outside the grid.
    OutOfBounds { pos: Point, size: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "cell {pos} is outside the {}x{} grid", size.x, size.y)
            }
        }
    }
}

impl std::error::Error for GridError {}
