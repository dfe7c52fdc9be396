use std::ops::Mul;

/// A single board square. `0` is an empty square, anything else is a tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Copy, Hash)]
pub struct Cell {
    value: u32,
}

impl Cell {
    pub const EMPTY: Self = Self { value: 0 };
    /// Largest representable tile. It never merges, since doubling it overflows.
    pub const MAX_TILE: u32 = 1 << 31;

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn empty(&self) -> bool {
        self.value == 0
    }

    /// Whether this tile and `other` combine into one tile of double value.
    pub fn merges_with(&self, other: &Self) -> bool {
        !self.empty() && self.value < Self::MAX_TILE && self == other
    }

    /// Whether the value may appear on a board: empty, or a power of two from 2 up.
    pub fn is_valid(&self) -> bool {
        self.value == 0 || (self.value >= 2 && self.value.is_power_of_two())
    }
}

impl Mul<u32> for Cell {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            value: self.value * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub row: usize,
    pub col: usize,
}

/// Direction the tiles travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// The tile placed after a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub pos: Vec2,
    pub value: u32,
}

/// Outcome of one `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any tile slid or merged. When false nothing was spawned.
    pub changed: bool,
    pub score_gained: u64,
    pub spawned_tile: Option<SpawnedTile>,
}
