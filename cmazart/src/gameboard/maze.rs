use rand::SeedableRng as _;
use smallvec::SmallVec;

use crate::core::*;
use crate::gameboard::algorithms::{FrontierGenerator, MazeGenerator as _, Random};
use crate::gameboard::cell::{Cell, CellId, Way};
use crate::grid::Grid;

/// Perfect maze: a spanning tree over a `height` x `width` grid of cells.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Grid<Cell>,
    start: Point,
    end: Point,
    rng: Random,
}

impl Maze {
    /// Builds the cells and generates the maze from `start`.
    pub fn new(
        height: usize,
        width: usize,
        start: Point,
        end: Point,
        rng: Random,
    ) -> Result<Self, MazeError> {
        if height == 0 || width == 0 {
            return Err(MazeError::ZeroDimension { height, width });
        }
        let cells = Grid::from_fn(height, width, Cell::new)
            .ok_or(MazeError::TooLarge { height, width })?;

        let mut maze = Maze {
            cells,
            start,
            end,
            rng,
        };
        maze.check_point(start)?;
        maze.check_point(end)?;

        maze.draw();
        Ok(maze)
    }

    pub fn with_seed(
        height: usize,
        width: usize,
        start: Point,
        end: Point,
        seed: u64,
    ) -> Result<Self, MazeError> {
        Self::new(height, width, start, end, Random::seed_from_u64(seed))
    }

    /// Throws away every connection and generates the maze again, optionally from new start and
    /// end points. Cells keep their identity, only links are rebuilt.
    ///
    /// On error the maze is left untouched.
    pub fn redraw(&mut self, start: Option<Point>, end: Option<Point>) -> Result<(), MazeError> {
        let start = start.unwrap_or(self.start);
        let end = end.unwrap_or(self.end);
        self.check_point(start)?;
        self.check_point(end)?;

        self.start = start;
        self.end = end;
        self.cells.iter_mut().for_each(Cell::unlink_all);
        self.draw();
        Ok(())
    }

    fn draw(&mut self) {
        let stats = FrontierGenerator.generate(&mut self.cells, self.start, &mut self.rng);
        log::debug!(
            "Generated {}x{} maze from {}: {} connections, {} stale candidates",
            self.height(),
            self.width(),
            self.start,
            stats.connections,
            stats.discarded,
        );
    }

    fn check_point(&self, point: Point) -> Result<(), MazeError> {
        if self.is_in_bounds(point) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                point,
                height: self.height(),
                width: self.width(),
            })
        }
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_in_bounds(&self, pos: Point) -> bool {
        pos.is_within(self.height(), self.width())
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub fn id_of(&self, pos: Point) -> Option<CellId> {
        self.cells.pos_to_idx(pos)
    }

    pub fn cell(&self, pos: Point) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cell_mut(&mut self, pos: Point) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell> {
        self.cells.get_idx(id)
    }

    pub fn cell_by_id_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_idx_mut(id)
    }

    pub fn start_cell(&self) -> Option<&Cell> {
        self.cell(self.start)
    }

    pub fn end_cell(&self) -> Option<&Cell> {
        self.cell(self.end)
    }

    /// Positions connected to `pos`, ordered up, down, left, right.
    pub fn neighbor_points(&self, pos: Point) -> SmallVec<[Point; 4]> {
        self.cell(pos)
            .map(Cell::neighbor_points)
            .unwrap_or_default()
    }

    pub fn is_connected(&self, a: Point, b: Point) -> bool {
        match (Way::between(a, b), self.cell(a)) {
            (Some(way), Some(cell)) => cell.is_open(way),
            _ => false,
        }
    }

    /// Number of passages in the maze, each counted once.
    pub fn connection_count(&self) -> usize {
        self.cells.iter().map(Cell::connection_count).sum::<usize>() / 2
    }

    pub fn clear_property(&mut self, property: usize) {
        self.set_property_all(property, 0);
    }

    pub fn set_property_all(&mut self, property: usize, value: i64) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_property(property, value));
    }

    pub fn clear_flag(&mut self, flag: usize) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_flag(flag, false));
    }

    fn clear_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Links two adjacent cells in both directions. Returns `false` if they are not adjacent.
    pub(crate) fn connect_cells(cells: &mut Grid<Cell>, a: CellId, b: CellId) -> bool {
        let (Some(a_pos), Some(b_pos)) = (cells.idx_to_pos(a), cells.idx_to_pos(b)) else {
            return false;
        };
        let Some(way) = Way::between(a_pos, b_pos) else {
            return false;
        };

        if let Some(cell) = cells.get_idx_mut(a) {
            cell.link(way, Some(b));
        }
        if let Some(cell) = cells.get_idx_mut(b) {
            cell.link(way.reverse(), Some(a));
        }
        true
    }

    /// Finds the path from `src` to `dest` with a depth-first walk along the passages.
    ///
    /// Neighbors are tried in the order up, down, left, right. Branches whose path would grow
    /// longer than `max_length` points are not entered. Returns an empty path if either point is
    /// outside of the maze or `dest` can't be reached within `max_length` points.
    pub fn compute_path(&mut self, src: Point, dest: Point, max_length: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let (Some(src_id), Some(dest_id)) = (self.id_of(src), self.id_of(dest)) else {
            return path;
        };
        if max_length == 0 {
            return path;
        }

        self.clear_visited();

        // (cell, index into `Way::ALL` to try next)
        let mut stack: Vec<(CellId, usize)> = vec![(src_id, 0)];
        path.push(src);
        if let Some(cell) = self.cells.get_idx_mut(src_id) {
            cell.visited = true;
        }

        while let Some(&(id, from)) = stack.last() {
            if id == dest_id {
                return path;
            }

            let next = if path.len() < max_length {
                self.cells.get_idx(id).and_then(|cell| {
                    (from..Way::ALL.len()).find_map(|w| {
                        let next = cell.neighbor(Way::ALL[w])?;
                        let next_cell = self.cells.get_idx(next)?;
                        (!next_cell.visited).then_some((w, next, next_cell.position()))
                    })
                })
            } else {
                None
            };

            match next {
                Some((w, next, pos)) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 = w + 1;
                    }
                    if let Some(cell) = self.cells.get_idx_mut(next) {
                        cell.visited = true;
                    }
                    stack.push((next, 0));
                    path.push(pos);
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    /// Returns tree distances from `from` to every cell, `None` for unreachable cells.
    fn distances(maze: &Maze, from: Point) -> Grid<usize> {
        let mut dist = Grid::new(maze.height(), maze.width()).unwrap();
        let mut queue = VecDeque::from([from]);
        dist.set(from, 0);
        while let Some(pos) = queue.pop_front() {
            let d = dist[pos];
            for next in maze.neighbor_points(pos) {
                if dist.get(next).is_none() {
                    dist.set(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    fn assert_spanning_tree(maze: &Maze) {
        let cell_count = maze.height() * maze.width();
        assert_eq!(maze.connection_count(), cell_count - 1);
        assert_eq!(distances(maze, maze.start()).iter().count(), cell_count);

        for cell in maze.cells().iter() {
            let mut seen = HashSet::new();
            for way in Way::ALL {
                if let Some(id) = cell.neighbor(way) {
                    let other = maze.cell_by_id(id).unwrap();
                    assert!(cell.position().is_adjacent(other.position()));
                    assert_eq!(other.neighbor(way.reverse()), maze.id_of(cell.position()));
                    assert!(seen.insert(id));
                }
            }
            assert_eq!(seen.len(), cell.connection_count());
        }
    }

    #[test]
    fn three_by_three_scenario() {
        let start = Point::new(0, 2);
        let end = Point::new(2, 0);
        let mut maze = Maze::with_seed(3, 3, start, end, 5).unwrap();
        assert_spanning_tree(&maze);

        let path = maze.compute_path(start, end, 9);
        assert!((5..=9).contains(&path.len()), "path length {}", path.len());
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
    }

    #[test]
    fn invalid_construction() {
        let p = Point::ZERO;
        assert_eq!(
            Maze::with_seed(0, 5, p, p, 1).unwrap_err(),
            MazeError::ZeroDimension {
                height: 0,
                width: 5
            }
        );
        assert!(Maze::with_seed(5, 0, p, p, 1).is_err());
        assert!(matches!(
            Maze::with_seed(5, 5, Point::new(5, 0), p, 1),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(Maze::with_seed(5, 5, p, Point::new(0, 5), 1).is_err());
        assert_eq!(
            Maze::with_seed(usize::MAX, 2, p, p, 1).unwrap_err(),
            MazeError::TooLarge {
                height: usize::MAX,
                width: 2
            }
        );
    }

    #[test]
    fn generated_mazes_are_spanning_trees() {
        for (seed, (h, w)) in [(1, 1), (1, 7), (7, 1), (2, 2), (10, 13), (32, 32)]
            .into_iter()
            .enumerate()
        {
            let end = Point::new(h - 1, w - 1);
            let maze = Maze::with_seed(h, w, Point::ZERO, end, seed as u64).unwrap();
            assert_spanning_tree(&maze);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let end = Point::new(19, 0);
        let a = Maze::with_seed(20, 20, Point::new(0, 19), end, 77).unwrap();
        let b = Maze::with_seed(20, 20, Point::new(0, 19), end, 77).unwrap();
        for (ca, cb) in a.cells().iter().zip(b.cells().iter()) {
            assert_eq!(ca.neighbor_ids(), cb.neighbor_ids());
        }
    }

    #[test]
    fn path_to_itself() {
        let mut maze = Maze::with_seed(6, 6, Point::ZERO, Point::new(5, 5), 3).unwrap();
        for pos in maze.cells().iter_pos().collect::<Vec<_>>() {
            assert_eq!(maze.compute_path(pos, pos, 1), vec![pos]);
        }
        assert!(maze.compute_path(Point::ZERO, Point::ZERO, 0).is_empty());
    }

    #[test]
    fn path_exists_iff_long_enough() {
        let mut maze = Maze::with_seed(8, 9, Point::new(0, 8), Point::new(7, 0), 11).unwrap();
        let src = Point::new(3, 4);
        let dist = distances(&maze, src);

        for dest in maze.cells().iter_pos().collect::<Vec<_>>() {
            let needed = dist[dest] + 1;
            assert!(maze.compute_path(src, dest, needed - 1).is_empty());

            let path = maze.compute_path(src, dest, needed);
            assert_eq!(path.len(), needed);
            assert_eq!(path.first(), Some(&src));
            assert_eq!(path.last(), Some(&dest));
            assert_eq!(path.iter().collect::<HashSet<_>>().len(), path.len());
            for pair in path.windows(2) {
                assert!(maze.is_connected(pair[0], pair[1]));
            }

            assert_eq!(maze.compute_path(src, dest, 8 * 9 + 1), path);
        }
    }

    #[test]
    fn path_outside_of_maze_is_empty() {
        let mut maze = Maze::with_seed(4, 4, Point::ZERO, Point::new(3, 3), 9).unwrap();
        assert!(maze.compute_path(Point::new(4, 0), Point::ZERO, 100).is_empty());
        assert!(maze.compute_path(Point::ZERO, Point::new(0, 4), 100).is_empty());
    }

    #[test]
    fn redraw_keeps_cells_and_validates() {
        let mut maze = Maze::with_seed(12, 12, Point::ZERO, Point::new(11, 11), 21).unwrap();
        maze.cell_mut(Point::new(4, 4)).unwrap().set_property(2, 42);

        assert!(maze.redraw(Some(Point::new(12, 0)), None).is_err());
        assert_eq!(maze.start(), Point::ZERO);
        assert_spanning_tree(&maze);

        maze.redraw(Some(Point::new(6, 6)), Some(Point::new(0, 11)))
            .unwrap();
        assert_eq!(maze.start(), Point::new(6, 6));
        assert_eq!(maze.end(), Point::new(0, 11));
        assert_spanning_tree(&maze);

        let cell = maze.cell(Point::new(4, 4)).unwrap();
        assert_eq!(cell.position(), Point::new(4, 4));
        assert_eq!(cell.property(2), 42);
        for pos in maze.cells().iter_pos() {
            assert_eq!(maze.cell(pos).unwrap().position(), pos);
        }
    }

    #[test]
    fn bulk_attribute_reset() {
        let mut maze = Maze::with_seed(3, 4, Point::ZERO, Point::new(2, 3), 2).unwrap();
        maze.set_property_all(1, 9);
        maze.cell_mut(Point::new(1, 1)).unwrap().set_flag(0, true);
        assert!(maze.cells().iter().all(|c| c.property(1) == 9));

        maze.clear_property(1);
        maze.clear_flag(0);
        assert!(maze.cells().iter().all(|c| c.property(1) == 0 && !c.flag(0)));
    }
}
