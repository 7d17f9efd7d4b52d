//! King-move neighborhood on a square grid.

use crate::Coord;

/// Row/column offsets of the eight king moves.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Iterator over the in-range neighbors of a cell.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coord,
    size: usize,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while let Some(&(dr, dc)) = DIRECTIONS.get(self.next) {
            self.next += 1;
            let row = self.center.row.checked_add_signed(dr);
            let col = self.center.col.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col)
                && row < self.size
                && col < self.size
            {
                return Some(Coord::new(row, col));
            }
        }
        None
    }
}

/// Neighbors of `center` on a `size`×`size` grid, clipped at the edges.
pub fn neighbors(center: Coord, size: usize) -> Neighbors {
    Neighbors {
        center,
        size,
        next: 0,
    }
}
