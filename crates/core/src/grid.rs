//! Wall storage for the rectangular cell grid.

use crate::types::{Cell, WallState};

/// Right and bottom wall flags per cell, indexed `x + y * width`.
/// The right wall of the last column and the bottom wall of the last row are
/// stored but never cleared; the outer boundary is always closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    right_walls: Vec<bool>,
    down_walls: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            right_walls: vec![true; width * height],
            down_walls: vec![true; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Clears the wall separating two adjacent cells. The wall lives in the
    /// slot of the lower-indexed cell no matter which way the traversal
    /// crossed it, so each wall has exactly one storage location.
    pub fn remove_wall_between(&mut self, from: Cell, to: Cell) {
        debug_assert!(self.in_bounds(from) && self.in_bounds(to));
        debug_assert!((from.x - to.x).abs() + (from.y - to.y).abs() == 1);

        if to.x == from.x + 1 {
            let index = self.index(from);
            self.right_walls[index] = false;
        } else if to.x == from.x - 1 {
            let index = self.index(to);
            self.right_walls[index] = false;
        } else if to.y == from.y + 1 {
            let index = self.index(from);
            self.down_walls[index] = false;
        } else if to.y == from.y - 1 {
            let index = self.index(to);
            self.down_walls[index] = false;
        }
    }

    /// Restores every wall to present.
    pub fn reset(&mut self) {
        self.right_walls.fill(true);
        self.down_walls.fill(true);
    }

    pub fn right_wall(&self, cell: Cell) -> bool {
        self.right_walls[self.index(cell)]
    }

    pub fn down_wall(&self, cell: Cell) -> bool {
        self.down_walls[self.index(cell)]
    }

    pub fn wall_state(&self, cell: Cell) -> WallState {
        WallState { right: self.right_wall(cell), bottom: self.down_wall(cell) }
    }

    /// Number of walls removed so far. Boundary slots are never cleared, so
    /// counting cleared flags counts interior walls only.
    pub fn removed_wall_count(&self) -> usize {
        let removed_right = self.right_walls.iter().filter(|&&present| !present).count();
        let removed_down = self.down_walls.iter().filter(|&&present| !present).count();
        removed_right + removed_down
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for &wall in &self.right_walls {
            bytes.push(u8::from(wall));
        }
        for &wall in &self.down_walls {
            bytes.push(u8::from(wall));
        }
        bytes
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y as usize) * self.width + (cell.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_has_every_wall_present() {
        let grid = Grid::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                let state = grid.wall_state(Cell { x, y });
                assert!(state.right && state.bottom, "({x},{y}) should start fully walled");
            }
        }
        assert_eq!(grid.removed_wall_count(), 0);
    }

    #[test]
    fn removal_normalizes_to_the_lower_indexed_slot() {
        let a = Cell { x: 1, y: 1 };

        let mut grid = Grid::new(3, 3);
        grid.remove_wall_between(a, Cell { x: 2, y: 1 });
        assert!(!grid.right_wall(a), "crossing right clears a's right wall");

        let mut grid = Grid::new(3, 3);
        grid.remove_wall_between(a, Cell { x: 0, y: 1 });
        assert!(!grid.right_wall(Cell { x: 0, y: 1 }), "crossing left clears the neighbor's slot");

        let mut grid = Grid::new(3, 3);
        grid.remove_wall_between(a, Cell { x: 1, y: 2 });
        assert!(!grid.down_wall(a), "crossing down clears a's bottom wall");

        let mut grid = Grid::new(3, 3);
        grid.remove_wall_between(a, Cell { x: 1, y: 0 });
        assert!(!grid.down_wall(Cell { x: 1, y: 0 }), "crossing up clears the neighbor's slot");
    }

    #[test]
    fn removal_is_idempotent_in_both_directions() {
        let a = Cell { x: 0, y: 0 };
        let b = Cell { x: 1, y: 0 };

        let mut grid = Grid::new(2, 1);
        grid.remove_wall_between(a, b);
        let after_first = grid.canonical_bytes();

        grid.remove_wall_between(a, b);
        assert_eq!(grid.canonical_bytes(), after_first);

        grid.remove_wall_between(b, a);
        assert_eq!(grid.canonical_bytes(), after_first, "reverse crossing hits the same slot");
        assert_eq!(grid.removed_wall_count(), 1);
    }

    #[test]
    fn reset_restores_a_fully_walled_grid() {
        let mut grid = Grid::new(4, 4);
        grid.remove_wall_between(Cell { x: 0, y: 0 }, Cell { x: 1, y: 0 });
        grid.remove_wall_between(Cell { x: 1, y: 0 }, Cell { x: 1, y: 1 });

        grid.reset();
        assert_eq!(grid, Grid::new(4, 4));
    }

    #[test]
    fn canonical_bytes_distinguishes_dimensions_from_wall_layout() {
        assert_ne!(Grid::new(2, 3).canonical_bytes(), Grid::new(3, 2).canonical_bytes());
    }
}
