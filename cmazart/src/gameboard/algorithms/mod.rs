mod frontier;

pub use frontier::FrontierGenerator;

use crate::{core::Point, grid::Grid};

use super::Cell;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Counters collected while a maze is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Passages carved.
    pub connections: usize,
    /// Candidates popped after their target was already part of the maze.
    pub discarded: usize,
}

pub trait MazeGenerator {
    /// Carves passages into `cells`, which must have no links yet, starting at `start`.
    fn generate(&self, cells: &mut Grid<Cell>, start: Point, rng: &mut Random) -> GenerationStats;
}
