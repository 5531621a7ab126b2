/// Row-major grid addressing for a fixed `width` x `height` board.
///
/// Index `i` maps to `(x = i % width, y = i / width)`. Dimensions are set
/// at construction and never change for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be nonzero");
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn in_range(&self, index: usize) -> bool {
        index < self.len()
    }

    pub fn index_to_xy(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn xy_to_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// True iff `a` and `b` are edge-connected: they differ by exactly one
    /// unit along exactly one axis. No diagonals, no wraparound.
    /// Caller contract: both indices in range.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let (ax, ay) = self.index_to_xy(a);
        let (bx, by) = self.index_to_xy(b);
        ax.abs_diff(bx) + ay.abs_diff(by) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t01_index_round_trips_through_coordinates() {
        let grid = Grid::new(6, 6);
        for i in 0..grid.len() {
            let (x, y) = grid.index_to_xy(i);
            assert_eq!(grid.xy_to_index(x, y), i);
        }
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let grid = Grid::new(6, 6);
        for i in 0..grid.len() {
            assert!(!grid.is_adjacent(i, i));
            for j in 0..grid.len() {
                assert_eq!(grid.is_adjacent(i, j), grid.is_adjacent(j, i));
            }
        }
    }

    #[test]
    fn adjacency_does_not_wrap_across_rows() {
        let grid = Grid::new(6, 6);

        // Index 5 is the end of row 0, index 6 starts row 1.
        assert!(!grid.is_adjacent(5, 6));
        assert!(grid.is_adjacent(0, 1));
        assert!(grid.is_adjacent(0, 6));
        assert!(!grid.is_adjacent(0, 2));
        assert!(!grid.is_adjacent(0, 7));
    }

    #[test]
    fn adjacency_on_non_square_grid_uses_width() {
        let grid = Grid::new(4, 3);

        assert!(grid.is_adjacent(3, 7));
        assert!(!grid.is_adjacent(3, 4));
        assert_eq!(grid.index_to_xy(5), (1, 1));
    }
}
