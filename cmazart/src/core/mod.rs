pub mod point;

pub use point::Point;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Maze dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },
    #[error("Maze of {height}x{width} cells does not fit in memory")]
    TooLarge { height: usize, width: usize },
    #[error("Point {point} is outside of the {height}x{width} maze")]
    OutOfBounds {
        point: Point,
        height: usize,
        width: usize,
    },
}
