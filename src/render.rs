//! Text rendering of the grid.

use shannon_switch::{Coord, Grid, WinningPath};
use std::fmt;

/// Renders `grid` with row and column indices.
///
/// Cells on `path` are drawn as `[X]` in place of the usual ` X `, so a
/// winning chain stands out from the player's other marks.
pub fn render(grid: &Grid, path: Option<&WinningPath>) -> String {
    BoardView { grid, path }.to_string()
}

/// A grid and its highlighted chain, formatted one row per line.
struct BoardView<'a> {
    grid: &'a Grid,
    path: Option<&'a WinningPath>,
}

impl BoardView<'_> {
    /// Widest index printed in either margin.
    fn index_digits(&self) -> usize {
        self.grid.size().saturating_sub(1).to_string().len()
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        let digits = self.index_digits();
        let label = digits.max(2);
        let cell = (digits + 1).max(3);

        let mut line = " ".repeat(label + 1);
        for col in 0..size {
            line.push_str(&format!("{:^cell$}", col));
        }
        write!(f, "{}", line.trim_end())?;

        for row in 0..size {
            line = format!("{:>label$} ", row);
            for coord in (0..size).map(|col| Coord::new(row, col)) {
                let symbol = self.grid.get(coord).symbol();
                let text = if self.path.is_some_and(|p| p.contains(coord)) {
                    format!("[{}]", symbol)
                } else {
                    symbol.to_string()
                };
                line.push_str(&format!("{:^cell$}", text));
            }
            write!(f, "\n{}", line.trim_end())?;
        }
        Ok(())
    }
}
