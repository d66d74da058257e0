//! **waygrid-core** — grid and cell types for the waygrid shortest-path
//! engine.
//!
//! This crate provides the board the searches in `waygrid-paths` operate on:
//! the [`Point`] coordinate, cell classification ([`Cell`], [`CellKind`]) and
//! the bounds-checked [`Grid`] container with its edit operations.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use geom::Point;
pub use grid::{EditOp, Grid, GridError};
