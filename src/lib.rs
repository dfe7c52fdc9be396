//! A sliding-tile 2048 game.
//!
//! [`engine`] holds the rules and has no I/O. [`app`] is the ratatui
//! front-end that turns key presses into moves and keeps the best score.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tile2048::engine::{Direction, RandomTiles, apply_move, new_game};
//!
//! let mut tiles = RandomTiles::new(ChaCha8Rng::seed_from_u64(42));
//! let game = new_game(4, 2048, 0, &mut tiles).unwrap();
//! let (game, result) = apply_move(&game, Direction::Left, &mut tiles);
//! println!("score {} changed {}", game.score(), result.changed);
//! ```

pub mod app;
pub mod engine;
pub mod error;
