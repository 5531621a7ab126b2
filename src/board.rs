use crate::grid::Grid;

/// Which side a claimed cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// The human player ("red" in the original UI).
    Player,
    /// The simulated opponent.
    Rival,
}

/// One square of the territory board.
///
/// A claimed cell is either tentative (placed this round, still revertible)
/// or finalized (locked in for the rest of the game). Cells are replaced
/// wholesale on mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Claimed { owner: Owner, finalized: bool },
}

/// Territory board state: `width * height` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    pub fn new(width: usize, height: usize) -> Self {
        let grid = Grid::new(width, height);
        let cells = vec![Cell::Empty; grid.len()];
        Self { grid, cells }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Marks one empty cell as a tentative claim.
    /// Returns the board unchanged when the cell is already occupied.
    pub fn place_tentative(&self, index: usize, owner: Owner) -> Board {
        if self.cells[index] != Cell::Empty {
            return self.clone();
        }
        let mut next = self.clone();
        next.cells[index] = Cell::Claimed {
            owner,
            finalized: false,
        };
        next
    }

    /// Reverts every tentative claim back to empty. Finalized cells are
    /// untouched. Also produces the censored view handed to the opponent.
    pub fn strip_tentative(&self) -> Board {
        self.map_cells(|cell| match cell {
            Cell::Claimed {
                finalized: false, ..
            } => Cell::Empty,
            other => other,
        })
    }

    /// Locks in every tentative claim, preserving its owner.
    pub fn finalize_all(&self) -> Board {
        self.map_cells(|cell| match cell {
            Cell::Claimed {
                owner,
                finalized: false,
            } => Cell::Claimed {
                owner,
                finalized: true,
            },
            other => other,
        })
    }

    /// Stamps `indices` as finalized cells of `owner`, regardless of prior
    /// content. Used to apply the opponent's awarded claim.
    pub fn overlay(&self, indices: &[usize], owner: Owner) -> Board {
        let mut next = self.clone();
        for &index in indices {
            next.cells[index] = Cell::Claimed {
                owner,
                finalized: true,
            };
        }
        next
    }

    /// Converts the board to flat `u8` codes for the renderer:
    /// 0=empty, 1=player tentative, 2=player finalized, 3=rival finalized.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => 0,
                Cell::Claimed {
                    owner: Owner::Player,
                    finalized: false,
                } => 1,
                Cell::Claimed {
                    owner: Owner::Player,
                    finalized: true,
                } => 2,
                Cell::Claimed {
                    owner: Owner::Rival,
                    ..
                } => 3,
            })
            .collect()
    }

    /// Indices currently holding tentative claims.
    pub fn tentative_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, Cell::Claimed { finalized: false, .. }))
            .map(|(index, _)| index)
            .collect()
    }

    fn map_cells(&self, f: impl Fn(Cell) -> Cell) -> Board {
        Board {
            grid: self.grid,
            cells: self.cells.iter().map(|&cell| f(cell)).collect(),
        }
    }
}
