pub mod core;
pub mod deque;
pub mod gameboard;
pub mod grid;
pub mod priority;

pub use crate::core::{MazeError, Point};
pub use deque::Deque;
pub use gameboard::{algorithms::Random, Cell, CellId, Maze, Way};
pub use grid::Grid;
pub use priority::PriorityQueue;
