//! The best-first loop shared by both search modes.

use std::collections::BinaryHeap;

use waygrid_core::{Grid, Point};

use crate::PathField;
use crate::distance::manhattan;
use crate::field::{NodeRef, SearchError, TraceNode};

/// Which priority function orders the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Order by cost so far alone; breadth-first expansion under unit costs.
    UniformCost,
    /// Order by cost so far plus the Manhattan estimate to the goal.
    AStar,
}

impl Mode {
    /// Heuristic term added to the cost so far.
    #[inline]
    fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Mode::UniformCost => 0,
            Mode::AStar => manhattan(from, to),
        }
    }
}

/// Everything one traced search produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Nodes in the order they became current.
    pub trace: Vec<TraceNode>,
    /// Path coordinates, goal to start; empty when the goal is unreachable.
    pub path: Vec<Point>,
}

/// One-shot traced search over a fresh [`PathField`].
///
/// Collaborators running many searches should hold a `PathField` and call
/// [`PathField::uniform_cost_search`] / [`PathField::astar_search`] to reuse
/// its caches.
pub fn search(
    grid: &Grid,
    from: Point,
    to: Point,
    mode: Mode,
) -> Result<SearchOutcome, SearchError> {
    let mut field = PathField::new(grid.width(), grid.height());
    match mode {
        Mode::UniformCost => field.uniform_cost_search(grid, from, to),
        Mode::AStar => field.astar_search(grid, from, to),
    }
}

impl PathField {
    /// Run the best-first loop. Returns the goal's node index when a path
    /// was found, `None` when the frontier drained first.
    ///
    /// When `trace` is given, every node is recorded at the moment it becomes
    /// current, the goal included; blocked cells never do.
    pub(crate) fn run(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
        mode: Mode,
        mut trace: Option<&mut Vec<TraceNode>>,
    ) -> Result<Option<usize>, SearchError> {
        self.fit_grid(grid);
        let start_idx = self.idx(from).ok_or(SearchError::StartOutOfBounds {
            pos: from,
            size: grid.size(),
        })?;
        let goal_idx = self.idx(to).ok_or(SearchError::GoalOutOfBounds {
            pos: to,
            size: grid.size(),
        })?;

        // Bump the generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        let mut seq: u32 = 0;
        let mut expanded: usize = 0;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = mode.estimate(from, to);
            node.parent = usize::MAX;
            node.seq = 0;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);
            expanded += 1;

            if let Some(t) = trace.as_deref_mut() {
                t.push(TraceNode {
                    pos: cp,
                    cost: current_g,
                    seq: self.nodes[ci].seq,
                });
            }

            // The goal's own neighbors are never expanded.
            if ci == goal_idx {
                break 'search true;
            }

            for cell in grid.neighbors4(cp) {
                let Some(ni) = self.idx(cell.pos) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                // Already finalized this generation: an expanded node or a
                // blocked cell seen before.
                if n.generation == cur_gen && !n.open {
                    continue;
                }

                // Blocked cells are closed on first touch and never enter
                // the frontier.
                if !cell.is_passable() {
                    n.generation = cur_gen;
                    n.open = false;
                    continue;
                }

                let tentative = current_g + 1;
                if n.generation == cur_gen {
                    // Already in the frontier: relax only a strict improvement.
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    seq += 1;
                    n.seq = seq;
                }

                n.g = tentative;
                n.f = tentative + mode.estimate(cell.pos, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        log::debug!("{mode:?} search {from} -> {to}: expanded {expanded} nodes, found={found}");

        Ok(if found { Some(goal_idx) } else { None })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use waygrid_core::Grid;

    #[test]
    fn mode_round_trip() {
        for mode in [Mode::UniformCost, Mode::AStar] {
            let json = serde_json::to_string(&mode).unwrap();
            let back: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, back);
        }
    }

    #[test]
    fn outcome_round_trip() {
        let grid = Grid::new(3, 3);
        let outcome = search(&grid, Point::new(0, 0), Point::new(2, 2), Mode::AStar).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
