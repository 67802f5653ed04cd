use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    A,
    B,
}

impl Cell {
    /// Signed value of the cell: `+1` for A, `-1` for B, `0` when empty.
    pub fn sign(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::A => 1,
            Cell::B => -1,
        }
    }

    pub fn from_sign(value: i8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::A),
            -1 => Some(Cell::B),
            _ => None,
        }
    }

    /// Swap the player label, leaving empty cells alone.
    pub fn negated(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::A => Cell::B,
            Cell::B => Cell::A,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// An N×N×N cube of cells addressed as `(height, wide, depth)`.
///
/// Height is the gravity axis: index 0 is the bottom of every column and
/// fills first. Cells are stored in a flat row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(side: usize) -> Self {
        Grid {
            side,
            cells: vec![Cell::Empty; side * side * side],
        }
    }

    /// Build a grid from a flat `[height][wide][depth]` buffer of signed values.
    pub fn from_signs(side: usize, values: &[i8]) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::Empty);
        }
        let expected = side * side * side;
        if values.len() != expected {
            return Err(GridError::Ragged {
                expected,
                found: values.len(),
                location: "flat buffer".to_string(),
            });
        }

        let mut grid = Grid::new(side);
        for (i, &value) in values.iter().enumerate() {
            let (height, wide, depth) = grid.coords(i);
            grid.cells[i] = Cell::from_sign(value).ok_or(GridError::InvalidCell {
                value,
                height,
                wide,
                depth,
            })?;
        }
        Ok(grid)
    }

    /// Build a grid from the nested `[height][wide][depth]` structure a host
    /// environment keeps. Every level must have the same length.
    pub fn from_nested(nested: &[Vec<Vec<i8>>]) -> Result<Self, GridError> {
        let side = nested.len();
        if side == 0 {
            return Err(GridError::Empty);
        }

        let mut flat = Vec::with_capacity(side * side * side);
        for (height, plane) in nested.iter().enumerate() {
            if plane.len() != side {
                return Err(GridError::Ragged {
                    expected: side,
                    found: plane.len(),
                    location: format!("height {height}"),
                });
            }
            for (wide, row) in plane.iter().enumerate() {
                if row.len() != side {
                    return Err(GridError::Ragged {
                        expected: side,
                        found: row.len(),
                        location: format!("height {height}, wide {wide}"),
                    });
                }
                flat.extend_from_slice(row);
            }
        }

        Self::from_signs(side, &flat)
    }

    /// Nested `[height][wide][depth]` view of the signed values.
    pub fn to_nested(&self) -> Vec<Vec<Vec<i8>>> {
        (0..self.side)
            .map(|h| {
                (0..self.side)
                    .map(|w| (0..self.side).map(|d| self.get(h, w, d).sign()).collect())
                    .collect()
            })
            .collect()
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether `(height, wide, depth)` addresses a cell of this grid.
    pub fn contains(&self, (height, wide, depth): (usize, usize, usize)) -> bool {
        height < self.side && wide < self.side && depth < self.side
    }

    /// Get the cell at a specific position, or `None` outside the grid.
    pub fn try_get(&self, height: usize, wide: usize, depth: usize) -> Option<Cell> {
        self.contains((height, wide, depth))
            .then(|| self.cells[self.index(height, wide, depth)])
    }

    /// Get the cell at a specific position
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, height: usize, wide: usize, depth: usize) -> Cell {
        self.cells[self.index(height, wide, depth)]
    }

    pub fn set(&mut self, height: usize, wide: usize, depth: usize, cell: Cell) {
        let idx = self.index(height, wide, depth);
        self.cells[idx] = cell;
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of stones in the column, which is also the height of its lowest
    /// empty cell.
    pub fn column_height(&self, wide: usize, depth: usize) -> usize {
        (0..self.side)
            .find(|&h| self.get(h, wide, depth).is_empty())
            .unwrap_or(self.side)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, wide: usize, depth: usize) -> bool {
        self.column_height(wide, depth) == self.side
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True when no column has an empty cell below an occupied one.
    pub fn is_settled(&self) -> bool {
        (0..self.side).all(|w| {
            (0..self.side).all(|d| {
                let top = self.column_height(w, d);
                (top..self.side).all(|h| self.get(h, w, d).is_empty())
            })
        })
    }

    /// Copy of the grid with every A and B swapped.
    pub fn negated(&self) -> Grid {
        Grid {
            side: self.side,
            cells: self.cells.iter().map(|c| c.negated()).collect(),
        }
    }

    fn index(&self, height: usize, wide: usize, depth: usize) -> usize {
        assert!(
            self.contains((height, wide, depth)),
            "cell (height={height}, wide={wide}, depth={depth}) is outside a grid of side {}",
            self.side
        );
        (height * self.side + wide) * self.side + depth
    }

    fn coords(&self, index: usize) -> (usize, usize, usize) {
        let plane = self.side * self.side;
        (index / plane, (index % plane) / self.side, index % self.side)
    }
}
