pub mod maze;
pub use maze::Maze;
pub mod cell;
pub use cell::{Cell, CellId, Way, MAX_FLAGS, MAX_PROPERTIES};

pub mod algorithms;
