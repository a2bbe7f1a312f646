use smallvec::SmallVec;

use crate::core::Point;

/// Number of caller-indexed boolean flags on every cell.
pub const MAX_FLAGS: usize = 8;
/// Number of caller-indexed integer properties on every cell.
pub const MAX_PROPERTIES: usize = 8;

/// Index of a cell inside the maze arena (row-major position).
pub type CellId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Way {
    Up,
    Down,
    Left,
    Right,
}

impl Way {
    /// All ways in the order neighbors are reported.
    pub const ALL: [Way; 4] = [Way::Up, Way::Down, Way::Left, Way::Right];

    pub fn reverse(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the way leading from `from` to `to`, if the points are adjacent.
    pub fn between(from: Point, to: Point) -> Option<Way> {
        Way::ALL
            .into_iter()
            .find(|way| from.offset(*way) == Some(to))
    }
}

/// One slot of the maze.
///
/// Besides its position and links, a cell carries a fixed-capacity attribute table: 8 boolean
/// flags and 8 signed integer properties, addressed by index. The meaning of each index is up
/// to the caller. Reads past the table return `false`/`0` and writes are ignored.
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Point,
    up: Option<CellId>,
    down: Option<CellId>,
    left: Option<CellId>,
    right: Option<CellId>,
    flags: [bool; MAX_FLAGS],
    properties: [i64; MAX_PROPERTIES],
    pub(crate) visited: bool,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Cell {
        Cell {
            pos,
            up: None,
            down: None,
            left: None,
            right: None,
            flags: [false; MAX_FLAGS],
            properties: [0; MAX_PROPERTIES],
            visited: false,
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn neighbor(&self, way: Way) -> Option<CellId> {
        match way {
            Way::Up => self.up,
            Way::Down => self.down,
            Way::Left => self.left,
            Way::Right => self.right,
        }
    }

    pub(crate) fn link(&mut self, way: Way, other: Option<CellId>) {
        match way {
            Way::Up => self.up = other,
            Way::Down => self.down = other,
            Way::Left => self.left = other,
            Way::Right => self.right = other,
        }
    }

    pub(crate) fn unlink_all(&mut self) {
        self.up = None;
        self.down = None;
        self.left = None;
        self.right = None;
    }

    pub fn is_open(&self, way: Way) -> bool {
        self.neighbor(way).is_some()
    }

    pub fn is_closed(&self, way: Way) -> bool {
        !self.is_open(way)
    }

    pub fn open_ways(&self) -> impl Iterator<Item = Way> + '_ {
        Way::ALL.into_iter().filter(|way| self.is_open(*way))
    }

    pub fn connection_count(&self) -> usize {
        self.open_ways().count()
    }

    /// Positions of the connected cells, ordered up, down, left, right.
    pub fn neighbor_points(&self) -> SmallVec<[Point; 4]> {
        self.open_ways()
            .filter_map(|way| self.pos.offset(way))
            .collect()
    }

    /// Ids of the connected cells, ordered up, down, left, right.
    pub fn neighbor_ids(&self) -> SmallVec<[CellId; 4]> {
        Way::ALL
            .into_iter()
            .filter_map(|way| self.neighbor(way))
            .collect()
    }

    pub fn flag(&self, flag: usize) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, flag: usize, value: bool) {
        if let Some(f) = self.flags.get_mut(flag) {
            *f = value;
        }
    }

    pub fn property(&self, property: usize) -> i64 {
        self.properties.get(property).copied().unwrap_or(0)
    }

    pub fn set_property(&mut self, property: usize, value: i64) {
        if let Some(p) = self.properties.get_mut(property) {
            *p = value;
        }
    }

    pub fn inc_property(&mut self, property: usize) {
        if let Some(p) = self.properties.get_mut(property) {
            *p += 1;
        }
    }

    pub fn dec_property(&mut self, property: usize) {
        if let Some(p) = self.properties.get_mut(property) {
            *p -= 1;
        }
    }

    pub fn clear_property(&mut self, property: usize) {
        self.set_property(property, 0);
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_table_ignores_out_of_range() {
        let mut cell = Cell::new(Point::new(1, 1));
        cell.set_flag(3, true);
        cell.set_flag(MAX_FLAGS, true);
        assert!(cell.flag(3));
        assert!(!cell.flag(MAX_FLAGS));

        cell.set_property(7, -4);
        cell.inc_property(7);
        cell.dec_property(0);
        cell.set_property(8, 99);
        cell.inc_property(100);
        assert_eq!(cell.property(7), -3);
        assert_eq!(cell.property(0), -1);
        assert_eq!(cell.property(8), 0);

        cell.clear_property(7);
        cell.clear_property(8);
        assert_eq!(cell.property(7), 0);
        assert_eq!(cell.property(0), -1);
    }

    #[test]
    fn neighbor_points_follow_way_order() {
        let mut cell = Cell::new(Point::new(1, 1));
        cell.link(Way::Right, Some(5));
        cell.link(Way::Up, Some(1));
        assert_eq!(
            cell.neighbor_points().as_slice(),
            &[Point::new(0, 1), Point::new(1, 2)]
        );
        assert_eq!(cell.neighbor_ids().as_slice(), &[1, 5]);
        assert_eq!(cell.connection_count(), 2);

        cell.unlink_all();
        assert!(cell.neighbor_points().is_empty());
    }

    #[test]
    fn way_between_adjacent_points() {
        let a = Point::new(2, 2);
        assert_eq!(Way::between(a, Point::new(1, 2)), Some(Way::Up));
        assert_eq!(Way::between(a, Point::new(3, 2)), Some(Way::Down));
        assert_eq!(Way::between(a, Point::new(2, 1)), Some(Way::Left));
        assert_eq!(Way::between(a, Point::new(2, 3)), Some(Way::Right));
        assert_eq!(Way::between(a, Point::new(3, 3)), None);
        assert_eq!(Way::between(a, a), None);
        for way in Way::ALL {
            assert_eq!(way.reverse().reverse(), way);
        }
    }
}
