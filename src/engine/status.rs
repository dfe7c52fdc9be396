use super::{
    grid::Grid,
    structs::{GameStatus, Vec2},
};

pub const DEFAULT_WIN_THRESHOLD: u32 = 2048;

/// Whether any move is left: an empty cell or an equal neighbour pair.
pub fn is_move_available(grid: &Grid) -> bool {
    if grid.has_empty() {
        return true;
    }

    let size = grid.size();
    grid.positions().any(|pos| {
        let here = grid.get(pos);
        let right = Vec2 { col: pos.col + 1, ..pos };
        let down = Vec2 { row: pos.row + 1, ..pos };
        (right.col < size && here.merges_with(&grid.get(right)))
            || (down.row < size && here.merges_with(&grid.get(down)))
    })
}

/// Classifies `grid`. A win is reported before a loss.
pub fn check_game_state(grid: &Grid, win_threshold: u32) -> GameStatus {
    if grid.max_tile() >= win_threshold {
        GameStatus::Won
    } else if !is_move_available(grid) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
