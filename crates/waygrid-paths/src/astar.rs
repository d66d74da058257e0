//! A* search: the frontier is ordered by cost so far plus the Manhattan
//! estimate to the goal.
//!
//! Manhattan distance is admissible and consistent on a 4-connected
//! unit-cost grid, so A* returns the same path lengths as uniform-cost
//! search while expanding no more of the board than it has to.

use waygrid_core::{Grid, Point};

use crate::PathField;
use crate::field::SearchError;
use crate::search::{Mode, SearchOutcome};

impl PathField {
    /// Compute the shortest path from `from` to `to` using A*, without trace
    /// bookkeeping.
    ///
    /// The path is ordered goal to start; an unreachable goal yields an
    /// empty path. Out-of-bounds endpoints are rejected before the search
    /// begins.
    pub fn astar_path(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let goal = self.run(grid, from, to, Mode::AStar, None)?;
        Ok(goal.map(|gi| self.build_path(gi)).unwrap_or_default())
    }

    /// Like [`astar_path`](Self::astar_path), additionally recording the
    /// visitation trace for step-by-step display.
    pub fn astar_search(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, SearchError> {
        let mut trace = Vec::new();
        let goal = self.run(grid, from, to, Mode::AStar, Some(&mut trace))?;
        let path = goal.map(|gi| self.build_path(gi)).unwrap_or_default();
        Ok(SearchOutcome { trace, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn open_grid_path_is_optimal() {
        let grid = Grid::new(5, 5);
        let mut field = PathField::new(5, 5);
        let path = field
            .astar_path(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Point::new(4, 4));
        assert_eq!(*path.last().unwrap(), Point::new(0, 0));
    }

    #[test]
    fn agrees_with_uniform_cost_on_random_boards() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut field = PathField::new(12, 12);
        let from = Point::new(0, 0);
        let to = Point::new(11, 11);

        for _ in 0..30 {
            let mut grid = Grid::new(12, 12);
            for cell in 0..(12 * 12) {
                let p = Point::new(cell % 12, cell / 12);
                if p == from || p == to {
                    continue;
                }
                if rng.random_range(0..10) < 3 {
                    grid.set_wall(p).unwrap();
                }
            }

            let uniform = field.uniform_cost_path(&grid, from, to).unwrap();
            let astar = field.astar_path(&grid, from, to).unwrap();
            assert_eq!(uniform.len(), astar.len());
        }
    }

    #[test]
    fn expands_less_than_uniform_cost_on_an_open_corridor() {
        // With the goal straight to the right, every off-row cell has a
        // priority above the true cost, so A* stays on the row while
        // uniform-cost floods the whole disc.
        let grid = Grid::new(9, 9);
        let mut field = PathField::new(9, 9);
        let from = Point::new(0, 4);
        let to = Point::new(8, 4);

        let uniform = field.uniform_cost_search(&grid, from, to).unwrap();
        let astar = field.astar_search(&grid, from, to).unwrap();
        assert_eq!(uniform.path.len(), astar.path.len());
        assert!(astar.trace.len() < uniform.trace.len());
    }

    #[test]
    fn walls_are_never_entered() {
        let mut grid = Grid::new(7, 7);
        for y in 1..7 {
            grid.set_wall(Point::new(3, y)).unwrap();
        }
        let mut field = PathField::new(7, 7);
        let outcome = field
            .astar_search(&grid, Point::new(1, 5), Point::new(5, 5))
            .unwrap();
        assert!(!outcome.path.is_empty());
        for t in &outcome.trace {
            assert!(grid.at(t.pos).unwrap().is_passable());
        }
        for &p in &outcome.path {
            assert!(grid.at(p).unwrap().is_passable());
        }
    }

    #[test]
    fn start_cell_kind_is_not_inspected() {
        // The search begins from the start node regardless of what occupies
        // its cell; only neighbor cells are filtered.
        let mut grid = Grid::new(3, 3);
        grid.set_wall(Point::new(0, 0)).unwrap();
        let mut field = PathField::new(3, 3);
        let path = field
            .astar_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn walled_goal_is_unreachable() {
        let mut grid = Grid::new(5, 5);
        grid.set_wall(Point::new(4, 4)).unwrap();
        let mut field = PathField::new(5, 5);
        let path = field
            .astar_path(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn markers_block_like_walls() {
        let mut grid = Grid::new(3, 1);
        grid.mark_path(&[Point::new(1, 0)]).unwrap();
        let mut field = PathField::new(3, 1);
        let blocked = field
            .astar_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert!(blocked.is_empty());

        grid.clear_markers();
        let open = field
            .astar_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(open.len(), 3);
    }
}
