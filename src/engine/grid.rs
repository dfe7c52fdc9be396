use std::fmt;

use crate::error::GridError;

use super::structs::{Cell, Vec2};

/// Square board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < 2 {
            return Err(GridError::TooSmall(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::EMPTY; size * size],
        })
    }

    /// Builds a grid from raw rows, checking shape and tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::new(value);
                if !cell.is_valid() {
                    return Err(GridError::InvalidValue { row, col, value });
                }
                grid.set(Vec2 { row, col }, cell);
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Vec2) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Vec2, cell: Cell) {
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(Cell::get).collect())
            .collect()
    }

    pub fn empty_cells(&self) -> Vec<Vec2> {
        self.positions().filter(|&pos| self.get(pos).empty()).collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Cell::empty)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(Cell::get).max().unwrap_or(0)
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|cell| u64::from(cell.get())).sum()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Vec2 { row, col }))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                if cell.empty() {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", cell.get())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
