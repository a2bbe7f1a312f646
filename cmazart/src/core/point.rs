use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gameboard::Way;

/// Position of a cell, `row` grows downwards, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const ZERO: Point = Point { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// Returns the adjacent point in the given direction.
    ///
    /// Only the lower bound is checked, whether the point exists is up to the container.
    pub fn offset(self, way: Way) -> Option<Point> {
        let Point { row, col } = self;
        Some(match way {
            Way::Up => Point::new(row.checked_sub(1)?, col),
            Way::Down => Point::new(row.checked_add(1)?, col),
            Way::Left => Point::new(row, col.checked_sub(1)?),
            Way::Right => Point::new(row, col.checked_add(1)?),
        })
    }

    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }

    pub fn swap_with(&mut self, other: &mut Point) {
        std::mem::swap(self, other);
    }

    pub fn is_within(self, height: usize, width: usize) -> bool {
        self.row < height && self.col < width
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Point { row, col }
    }
}

impl From<Point> for (usize, usize) {
    fn from(point: Point) -> Self {
        (point.row, point.col)
    }
}
