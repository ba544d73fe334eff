use super::player::PlayerId;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Row-major grid of cells. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Iterate over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[row * self.cols..(row + 1) * self.cols].iter().copied()
    }

    /// Number of pieces already stacked in `col`.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .filter(|&row| !self.get(row, col).is_empty())
            .count()
    }

    /// A column accepts a piece while its topmost cell is empty.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(0, col).is_empty()
    }

    /// Columns with at least one empty cell, ascending.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_column_open(col)).collect()
    }

    /// Row a piece dropped into `col` would land on, if the column is open.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if !self.is_column_open(col) {
            return None;
        }
        Some(self.rows - self.column_height(col) - 1)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_open(col))
    }

    /// Drop a piece for `id` into `col`, returning the landing row.
    ///
    /// Callers validate the column first; a closed column is a logic error.
    pub(crate) fn place(&mut self, col: usize, id: PlayerId) -> usize {
        let row = self
            .landing_row(col)
            .unwrap_or_else(|| unreachable!("column {col} was validated as open"));
        self.cells[row * self.cols + col] = Cell::Occupied(id);
        row
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerId = PlayerId(1);
    const YELLOW: PlayerId = PlayerId(2);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.rows(), ROWS);
        assert_eq!(board.cols(), COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_stacks_from_bottom() {
        let mut board = Board::default();

        let row = board.place(3, RED);
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(RED));

        let row = board.place(3, YELLOW);
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Occupied(YELLOW));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..ROWS {
            board.place(0, RED);
        }

        assert!(!board.is_column_open(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(board.open_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_column_is_closed() {
        let board = Board::default();
        assert!(!board.is_column_open(COLS));
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 3);
        for col in 0..3 {
            board.place(col, RED);
            board.place(col, YELLOW);
        }
        assert!(board.is_full());
        assert!(board.open_columns().is_empty());
        assert_eq!(board.occupied_count(), 6);
    }

    #[test]
    fn test_row_iterates_left_to_right() {
        let mut board = Board::new(2, 3);
        board.place(2, YELLOW);
        let bottom: Vec<Cell> = board.row(1).collect();
        assert_eq!(
            bottom,
            vec![Cell::Empty, Cell::Empty, Cell::Occupied(YELLOW)]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::default();
        let snapshot = board.clone();
        board.place(0, RED);
        assert_eq!(snapshot.occupied_count(), 0);
        assert_ne!(snapshot, board);
    }
}
