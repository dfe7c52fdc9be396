use rand::Rng;

use super::{
    grid::Grid,
    structs::{Cell, SpawnedTile},
};

/// Probability that a new tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Randomness consumed by the spawner.
pub trait TileSource {
    /// Index into the list of empty cells. `count` is never zero.
    fn pick_cell(&mut self, count: usize) -> usize;

    /// Value of the new tile, 2 or 4.
    fn pick_value(&mut self) -> u32;
}

/// [`TileSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTiles<R> {
    rng: R,
}

impl<R: Rng> RandomTiles<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandomTiles<R> {
    fn pick_cell(&mut self, count: usize) -> usize {
        self.rng.random_range(0..count)
    }

    fn pick_value(&mut self) -> u32 {
        if self.rng.random_bool(TWO_PROBABILITY) {
            2
        } else {
            4
        }
    }
}

/// Places one tile on a uniformly chosen empty cell.
///
/// Returns `None` without touching anything when the board is full.
pub fn add_cell<S: TileSource + ?Sized>(
    grid: &Grid,
    source: &mut S,
) -> Option<(Grid, SpawnedTile)> {
    let empty_cells = grid.empty_cells();
    if empty_cells.is_empty() {
        return None;
    }

    let pos = empty_cells[source.pick_cell(empty_cells.len()) % empty_cells.len()];
    let value = source.pick_value();
    let mut next = grid.clone();
    next.set(pos, Cell::new(value));
    Some((next, SpawnedTile { pos, value }))
}
