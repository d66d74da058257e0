//! Uniform-cost search: the frontier is ordered by cost so far alone.

use waygrid_core::{Grid, Point};

use crate::PathField;
use crate::field::SearchError;
use crate::search::{Mode, SearchOutcome};

impl PathField {
    /// Compute the shortest path from `from` to `to` in non-decreasing cost
    /// order, without trace bookkeeping.
    ///
    /// The path is ordered goal to start; an unreachable goal yields an
    /// empty path. Out-of-bounds endpoints are rejected before the search
    /// begins.
    pub fn uniform_cost_path(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let goal = self.run(grid, from, to, Mode::UniformCost, None)?;
        Ok(goal.map(|gi| self.build_path(gi)).unwrap_or_default())
    }

    /// Like [`uniform_cost_path`](Self::uniform_cost_path), additionally
    /// recording the visitation trace for step-by-step display.
    pub fn uniform_cost_search(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, SearchError> {
        let mut trace = Vec::new();
        let goal = self.run(grid, from, to, Mode::UniformCost, Some(&mut trace))?;
        let path = goal.map(|gi| self.build_path(gi)).unwrap_or_default();
        Ok(SearchOutcome { trace, path })
    }
}
