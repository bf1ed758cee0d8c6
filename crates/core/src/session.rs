use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::grid::Grid;
use crate::traverse::attempt_move;
use crate::types::{Cell, SessionError, WallState};
use crate::visited::VisitedSet;

mod hash;

#[cfg(test)]
use rand_chacha::rand_core::Rng;

/// Read-only view of the generation state for the render layer.
pub struct Snapshot<'a> {
    pub current: Cell,
    pub visited: &'a [Cell],
    pub path: &'a [Cell],
    pub backtracked: &'a [Cell],
    pub grid: &'a Grid,
}

/// Steppable maze-generation run: a randomized depth-first carve over the
/// grid, advanced one traversal step at a time.
///
/// The session is `Running` until every cell has been entered, then
/// `Complete`; stepping a complete session is a harmless no-op. The visited,
/// path, and backtrack lists exist so a caller can draw progress at any
/// point; only the visited set feeds back into the algorithm.
pub struct Session {
    seed: u64,
    grid: Grid,
    visited: VisitedSet,
    path: Vec<Cell>,
    backtracked: Vec<Cell>,
    current: Cell,
    rng: ChaCha8Rng,
}

impl Session {
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, SessionError> {
        if width == 0 || height == 0 {
            return Err(SessionError::InvalidDimensions { width, height });
        }

        Ok(Self {
            seed,
            grid: Grid::new(width, height),
            visited: VisitedSet::new(width, height),
            path: Vec::with_capacity(width * height),
            backtracked: Vec::with_capacity(width * height),
            current: Cell { x: 0, y: 0 },
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Advances the carve by one traversal step: forward into a random
    /// unvisited neighbor (removing the wall crossed), or one backtrack pop
    /// when no neighbor qualifies.
    ///
    /// The current cell joins the visited set here, on first entry, not at
    /// construction; a fresh session has an empty visited list.
    pub fn step(&mut self) {
        if self.is_complete() {
            return;
        }

        self.visited.insert(self.current);
        let moved = attempt_move(&self.grid, &self.visited, self.current, &mut self.rng);
        self.apply_move(moved);
    }

    fn apply_move(&mut self, moved: Option<Cell>) {
        match moved {
            Some(next) => {
                self.path.push(self.current);
                self.grid.remove_wall_between(self.current, next);
                self.current = next;
            }
            None => {
                self.backtracked.push(self.current);
                match self.path.pop() {
                    Some(previous) => self.current = previous,
                    // Nothing to unwind to. Only reachable once every cell
                    // has been entered (a 1x1 grid dead-ends on the start
                    // cell immediately); the current cell stays put.
                    None => debug_assert!(self.visited.count() == self.cell_count()),
                }
            }
        }
    }

    /// Steps until the carve is complete. Produces the identical maze to
    /// stepping one-by-one externally under the same seed.
    pub fn run_to_completion(&mut self) {
        while !self.is_complete() {
            self.step();
        }
    }

    /// Returns the session to its freshly constructed state: all walls
    /// restored, lists cleared, and the RNG re-seeded so the next run
    /// replays the identical maze.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.visited.clear();
        self.path.clear();
        self.backtracked.clear();
        self.current = Cell { x: 0, y: 0 };
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    pub fn is_complete(&self) -> bool {
        self.visited.count() == self.cell_count()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn current_cell(&self) -> Cell {
        self.current
    }

    /// Cells in first-entry order.
    pub fn visited_cells(&self) -> &[Cell] {
        self.visited.cells()
    }

    /// The live chain of cells from the start down to (but not including)
    /// the current cell.
    pub fn path_cells(&self) -> &[Cell] {
        &self.path
    }

    /// Every cell the traversal was forced to back out of, in backtrack
    /// order. Observational only.
    pub fn backtracked_cells(&self) -> &[Cell] {
        &self.backtracked
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn wall_state(&self, cell: Cell) -> WallState {
        self.grid.wall_state(cell)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            current: self.current,
            visited: self.visited.cells(),
            path: &self.path,
            backtracked: &self.backtracked,
            grid: &self.grid,
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn cell_count(&self) -> usize {
        self.grid.width() * self.grid.height()
    }

    /// Single step driven by an external RNG, so tests can pin the direction
    /// evaluation order.
    #[cfg(test)]
    fn step_with_rng<R: Rng>(&mut self, rng: &mut R) {
        if self.is_complete() {
            return;
        }

        self.visited.insert(self.current);
        let moved = attempt_move(&self.grid, &self.visited, self.current, rng);
        self.apply_move(moved);
    }
}

/// Generates a finished maze in one call.
pub fn generate(width: usize, height: usize, seed: u64) -> Result<Grid, SessionError> {
    let mut session = Session::new(width, height, seed)?;
    session.run_to_completion();
    Ok(session.into_grid())
}
