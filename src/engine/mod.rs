//! Board rules: sliding, merging, spawning and end-of-game detection.
//!
//! Everything here is pure. Functions take a board or session by reference
//! and hand back a new value, and the only randomness comes from the
//! [`TileSource`] the caller passes in.

use crate::error::GridError;

pub mod collapse;
pub mod grid;
pub mod movement;
pub mod spawn;
pub mod status;
pub mod structs;

pub use grid::Grid;
pub use spawn::{RandomTiles, TileSource};
pub use status::{DEFAULT_WIN_THRESHOLD, check_game_state, is_move_available};
pub use structs::{Cell, Direction, GameStatus, MoveResult, SpawnedTile, Vec2};

/// Number of tiles placed on a fresh board.
pub const START_TILES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    score: u64,
    best_score: u64,
    status: GameStatus,
    win_threshold: u32,
}

impl GameSession {
    /// Wraps an existing board, e.g. a saved or hand-made position.
    pub fn from_grid(grid: Grid, win_threshold: u32, best_score: u64) -> Result<Self, GridError> {
        check_threshold(win_threshold)?;
        let status = check_game_state(&grid, win_threshold);
        Ok(Self {
            grid,
            score: 0,
            best_score,
            status,
            win_threshold,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }
}

/// Rejects thresholds no tile could ever land on exactly.
pub fn check_threshold(win_threshold: u32) -> Result<(), GridError> {
    if win_threshold < 4 || !win_threshold.is_power_of_two() {
        return Err(GridError::InvalidThreshold(win_threshold));
    }
    Ok(())
}

/// Starts a session on an empty `size` x `size` board with two spawned tiles.
pub fn new_game<S: TileSource + ?Sized>(
    size: usize,
    win_threshold: u32,
    best_score: u64,
    source: &mut S,
) -> Result<GameSession, GridError> {
    let mut grid = Grid::new(size)?;
    for _ in 0..START_TILES {
        if let Some((next, _)) = spawn::add_cell(&grid, source) {
            grid = next;
        }
    }
    GameSession::from_grid(grid, win_threshold, best_score)
}

/// Plays one move.
///
/// A move that slides or merges nothing returns the session unchanged and
/// spawns no tile. Once won, the session stays won while play continues.
/// A lost session accepts no moves.
pub fn apply_move<S: TileSource + ?Sized>(
    session: &GameSession,
    direction: Direction,
    source: &mut S,
) -> (GameSession, MoveResult) {
    if session.status == GameStatus::Lost {
        return (session.clone(), MoveResult::default());
    }

    let shifted = movement::shift(&session.grid, direction);
    if !shifted.changed {
        return (session.clone(), MoveResult::default());
    }

    let (grid, spawned_tile) = match spawn::add_cell(&shifted.grid, source) {
        Some((grid, tile)) => (grid, Some(tile)),
        None => (shifted.grid, None),
    };

    let score = session.score + shifted.score;
    let status = match session.status {
        GameStatus::Won => GameStatus::Won,
        _ => check_game_state(&grid, session.win_threshold),
    };

    let next = GameSession {
        grid,
        score,
        best_score: session.best_score.max(score),
        status,
        win_threshold: session.win_threshold,
    };
    let result = MoveResult {
        changed: true,
        score_gained: shifted.score,
        spawned_tile,
    };
    (next, result)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Replays queued picks; falls back to the first cell and a 2.
    #[derive(Default)]
    struct Script {
        cells: VecDeque<usize>,
        values: VecDeque<u32>,
        calls: usize,
    }

    impl TileSource for Script {
        fn pick_cell(&mut self, _: usize) -> usize {
            self.calls += 1;
            self.cells.pop_front().unwrap_or(0)
        }

        fn pick_value(&mut self) -> u32 {
            self.values.pop_front().unwrap_or(2)
        }
    }

    fn session(rows: &[[u32; 4]]) -> GameSession {
        GameSession::from_grid(Grid::from_rows(rows).unwrap(), 2048, 0).unwrap()
    }

    #[test]
    fn new_game_places_two_tiles() {
        let mut source = RandomTiles::new(ChaCha8Rng::seed_from_u64(1));
        let game = new_game(4, 2048, 300, &mut source).unwrap();
        let tiles = game
            .grid()
            .rows()
            .flatten()
            .filter(|cell| !cell.empty())
            .collect::<Vec<_>>();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|cell| matches!(cell.get(), 2 | 4)));
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 300);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = RandomTiles::new(ChaCha8Rng::seed_from_u64(99));
        let mut b = RandomTiles::new(ChaCha8Rng::seed_from_u64(99));
        let mut game_a = new_game(4, 2048, 0, &mut a).unwrap();
        let mut game_b = new_game(4, 2048, 0, &mut b).unwrap();
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            game_a = apply_move(&game_a, direction, &mut a).0;
            game_b = apply_move(&game_b, direction, &mut b).0;
            assert_eq!(game_a, game_b);
        }
    }

    #[test]
    fn new_game_rejects_bad_parameters() {
        let mut source = Script::default();
        assert_eq!(
            new_game(1, 2048, 0, &mut source),
            Err(GridError::TooSmall(1))
        );
        assert_eq!(
            new_game(4, 1000, 0, &mut source),
            Err(GridError::InvalidThreshold(1000))
        );
        assert_eq!(
            new_game(4, 2, 0, &mut source),
            Err(GridError::InvalidThreshold(2))
        );
    }

    #[test]
    fn no_op_move_spawns_nothing() {
        let game = session(&[[2, 0, 0, 0], [4, 0, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0]]);
        let mut source = Script::default();
        let (next, result) = apply_move(&game, Direction::Left, &mut source);
        assert!(!result.changed);
        assert_eq!(result.score_gained, 0);
        assert_eq!(result.spawned_tile, None);
        assert_eq!(next, game);
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn move_scores_and_spawns() {
        let game = session(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]]);
        let mut source = Script {
            cells: VecDeque::from([0]),
            values: VecDeque::from([4]),
            ..Default::default()
        };
        let (next, result) = apply_move(&game, Direction::Left, &mut source);
        assert!(result.changed);
        assert_eq!(result.score_gained, 4);
        assert_eq!(
            result.spawned_tile,
            Some(SpawnedTile {
                pos: Vec2 { row: 0, col: 1 },
                value: 4
            })
        );
        assert_eq!(
            next.grid().to_rows(),
            vec![
                vec![4, 4, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![4, 0, 0, 0],
            ]
        );
        assert_eq!(next.score(), 4);
        assert_eq!(next.best_score(), 4);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn merge_on_full_board_frees_exactly_the_spawn_cell() {
        let game = session(&[[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
        assert!(!game.grid().has_empty());
        let mut source = Script::default();
        let (next, result) = apply_move(&game, Direction::Left, &mut source);
        assert!(result.changed);
        assert_eq!(result.score_gained, 4);
        assert_eq!(
            result.spawned_tile,
            Some(SpawnedTile {
                pos: Vec2 { row: 0, col: 3 },
                value: 2
            })
        );
        assert!(!next.grid().has_empty());
        assert_eq!(next.grid().to_rows()[0], vec![4, 4, 8, 2]);
        assert_eq!(next.status(), GameStatus::Playing);
    }

    #[test]
    fn best_score_is_kept_when_higher() {
        let game = GameSession::from_grid(
            Grid::from_rows(&[[2, 2], [0, 0]]).unwrap(),
            2048,
            1000,
        )
        .unwrap();
        let (next, _) = apply_move(&game, Direction::Left, &mut Script::default());
        assert_eq!(next.score(), 4);
        assert_eq!(next.best_score(), 1000);
    }

    #[test]
    fn reaching_threshold_wins_and_play_continues() {
        let game = session(&[[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]);
        let mut source = Script::default();
        let (won, result) = apply_move(&game, Direction::Left, &mut source);
        assert_eq!(result.score_gained, 2048);
        assert_eq!(won.status(), GameStatus::Won);

        let (after, result) = apply_move(&won, Direction::Down, &mut source);
        assert!(result.changed);
        assert_eq!(after.status(), GameStatus::Won);
    }

    #[test]
    fn move_that_fills_the_board_loses() {
        let game = GameSession::from_grid(
            Grid::from_rows(&[[0, 2], [4, 8]]).unwrap(),
            2048,
            0,
        )
        .unwrap();
        let mut source = Script {
            values: VecDeque::from([16]),
            ..Default::default()
        };
        let (next, result) = apply_move(&game, Direction::Left, &mut source);
        assert!(result.changed);
        assert_eq!(next.grid().to_rows(), vec![vec![2, 16], vec![4, 8]]);
        assert_eq!(next.status(), GameStatus::Lost);
        assert!(!is_move_available(next.grid()));
    }

    #[test]
    fn lost_session_ignores_moves() {
        let game = session(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(game.status(), GameStatus::Lost);
        let mut source = Script::default();
        for direction in Direction::ALL {
            let (next, result) = apply_move(&game, direction, &mut source);
            assert!(!result.changed);
            assert_eq!(next, game);
        }
    }
}
