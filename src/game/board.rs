use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column ordering for move generation: center-first, which tightens
/// alpha-beta bounds faster than left-to-right.
pub const SEARCH_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// The four line directions as (row, col) steps. Together with their
/// reverses these cover every possible four-in-a-row.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A 7×6 Connect Four board. Row 0 is the top, row 5 the bottom.
///
/// `Board` is `Copy`, and every search ply works on its own copy, so no
/// node ever observes a sibling's or descendant's mutations. The derived
/// `Hash`/`Eq` over the cell array serve as the canonical encoding for
/// the search engine's visited-state set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Pieces land on the lowest empty row, so occupied cells in a column
    /// are always contiguous from the bottom.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Copying variant of [`drop_piece`](Self::drop_piece): returns the
    /// board that results from the move, leaving `self` untouched.
    pub fn child(&self, col: usize, cell: Cell) -> Result<Board, MoveError> {
        let mut next = *self;
        next.drop_piece(col, cell)?;
        Ok(next)
    }

    /// Columns with an empty top cell, in [`SEARCH_ORDER`].
    pub fn possible_moves(&self) -> Vec<usize> {
        SEARCH_ORDER
            .into_iter()
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Scan the whole board for a four-in-a-row and return the winning
    /// cell colour, if any.
    ///
    /// Every cell is treated as a potential line start and extended along
    /// each of the four [`DIRECTIONS`]; a window only counts when all four
    /// cells are on the board, non-empty, and equal. In a legal position at
    /// most one colour can have a completed line, so scan order is
    /// irrelevant.
    pub fn winner(&self) -> Option<Cell> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    if self.line_of_four(row, col, dr, dc, cell) {
                        return Some(cell);
                    }
                }
            }
        }
        None
    }

    fn line_of_four(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        for i in 1..4isize {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                return false;
            }
            if self.cells[r as usize][c as usize] != cell {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
