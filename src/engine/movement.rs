use super::{
    collapse::collapse,
    grid::Grid,
    structs::{Direction, Vec2},
};

/// Result of shifting a whole grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub grid: Grid,
    pub score: u64,
    pub changed: bool,
}

/// Board coordinate of the `pos`-th cell of line `line`, counting from the
/// edge the tiles travel toward.
fn line_coord(direction: Direction, size: usize, line: usize, pos: usize) -> Vec2 {
    match direction {
        Direction::Up => Vec2 { row: pos, col: line },
        Direction::Down => Vec2 {
            row: size - 1 - pos,
            col: line,
        },
        Direction::Left => Vec2 { row: line, col: pos },
        Direction::Right => Vec2 {
            row: line,
            col: size - 1 - pos,
        },
    }
}

/// Shifts every line of `grid` toward `direction`. The input is left as is.
pub fn shift(grid: &Grid, direction: Direction) -> Shift {
    let size = grid.size();
    let mut next = grid.clone();
    let mut score = 0;
    let mut changed = false;

    for line in 0..size {
        let cells = (0..size)
            .map(|pos| grid.get(line_coord(direction, size, line, pos)))
            .collect::<Vec<_>>();
        let collapsed = collapse(&cells);
        for (pos, cell) in collapsed.cells.into_iter().enumerate() {
            next.set(line_coord(direction, size, line, pos), cell);
        }
        score += collapsed.score;
        changed |= collapsed.changed;
    }

    Shift {
        grid: next,
        score,
        changed,
    }
}

/// Whether shifting toward `direction` would move or merge anything.
pub fn can_shift(grid: &Grid, direction: Direction) -> bool {
    shift(grid, direction).changed
}
