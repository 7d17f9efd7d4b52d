//! Square grid of cells.

use crate::{Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// N×N grid of cells, stored row-major.
///
/// Every coordinate always holds exactly one [`Cell`]. Cells only move from
/// `Empty` to `Occupied` through [`Grid::set`]; [`Grid::reset`] clears them all.
///
/// Out-of-range coordinates and writes to occupied cells are caller bugs and
/// panic. Move legality is checked before reaching the grid (see
/// [`crate::LegalMove`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {} out of range for {}x{} grid",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }

    /// Gets the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of range.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Returns true if the cell at `coord` is unclaimed.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Claims the cell at `coord` for `player`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of range or already occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn set(&mut self, coord: Coord, player: Player) {
        let idx = self.index(coord);
        assert!(
            self.cells[idx] == Cell::Empty,
            "cell {} is already occupied by {:?}",
            coord,
            self.cells[idx]
        );
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Clears every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Coordinates of every unclaimed cell, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.coords().filter(|c| self.is_empty(*c)).collect()
    }

    /// Number of cells claimed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Replaces a cell without the empty-cell check.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseGridError {
    /// No rows were found.
    #[display("board text contains no rows")]
    Empty,

    /// A character is not `X`, `O` or `.`.
    #[display("unknown symbol {:?} at row {}, column {}", symbol, row, col)]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
    },

    /// A row's length differs from the number of rows.
    #[display("row {} has {} cells, expected {}", row, found, expected)]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Number of rows, which every row must match.
        expected: usize,
        /// Cells found in the row.
        found: usize,
    },
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses one line per row: `X`, `O` (either case) or `.` per cell.
    /// Whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != size {
                return Err(ParseGridError::NotSquare {
                    row,
                    expected: size,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.iter().enumerate() {
                let cell = match symbol {
                    'X' | 'x' => Cell::Occupied(Player::X),
                    'O' | 'o' => Cell::Occupied(Player::O),
                    '.' => Cell::Empty,
                    other => {
                        return Err(ParseGridError::UnknownSymbol {
                            symbol: *other,
                            row,
                            col,
                        });
                    }
                };
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }
}
