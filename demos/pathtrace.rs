//! Terminal walkthrough of the search engine.
//!
//! Builds a small board, carves a wall line with a gap, runs both search
//! modes and prints the marked path the way a rendering collaborator would.
//!
//! Run: cargo run --bin pathtrace

use waygrid_core::{CellKind, EditOp, Grid, Point};
use waygrid_paths::{Mode, search};

const WIDTH: i32 = 16;
const HEIGHT: i32 = 9;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    for y in 1..HEIGHT {
        grid.edit(EditOp::ToggleWall(Point::new(7, y)))?;
    }

    let start = Point::new(2, 4);
    let goal = Point::new(13, 4);

    for mode in [Mode::UniformCost, Mode::AStar] {
        let outcome = search(&grid, start, goal, mode)?;
        println!(
            "{mode:?}: expanded {} nodes, path length {}",
            outcome.trace.len(),
            outcome.path.len()
        );
    }

    let outcome = search(&grid, start, goal, Mode::AStar)?;
    grid.mark_path(&outcome.path)?;
    render(&grid, start, goal);
    grid.edit(EditOp::ClearMarkers)?;

    Ok(())
}

fn render(grid: &Grid, start: Point, goal: Point) {
    let mut row = String::new();
    for cell in grid.iter() {
        let ch = if cell.pos == start {
            'S'
        } else if cell.pos == goal {
            'G'
        } else {
            match cell.kind {
                CellKind::Empty => '.',
                CellKind::Wall => '#',
                CellKind::PathMarker => '*',
            }
        };
        row.push(ch);
        if cell.pos.x == grid.width() - 1 {
            println!("{row}");
            row.clear();
        }
    }
}
