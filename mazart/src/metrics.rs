//! Breadth distances over the maze, composed from the core's cell accessors and [`Deque`].

use clap::ValueEnum;
use cmazart::{Deque, Maze, Point};
use serde::{Deserialize, Serialize};

/// Flag marking cells on the solution path.
pub const PATH_FLAG: usize = 0;
/// Property holding the distance computed by [`distance_from`].
pub const DISTANCE_PROPERTY: usize = 1;

/// Which cells distances are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    None,
    /// Every cell of the solution path.
    Path,
    Start,
    End,
}

impl Metric {
    /// Writes distances into `property` of every cell, returns the largest one.
    ///
    /// Returns `None` for [`Metric::None`], the maze is left untouched then.
    pub fn apply(self, maze: &mut Maze, path: &[Point], property: usize) -> Option<i64> {
        let sources = match self {
            Metric::None => return None,
            Metric::Path => path.to_vec(),
            Metric::Start => vec![maze.start()],
            Metric::End => vec![maze.end()],
        };

        Some(distance_from(maze, &sources, property))
    }
}

/// Stores into `property` the tree distance of every cell to the nearest of `sources`.
///
/// Sources get 1, their neighbors 2 and so on, cells not reachable keep 0. Returns the largest
/// distance written, 0 when no source lies in the maze.
pub fn distance_from(maze: &mut Maze, sources: &[Point], property: usize) -> i64 {
    maze.clear_property(property);

    let mut max_dist = 0;
    for &source in sources {
        if let Some(cell) = maze.cell_mut(source) {
            cell.set_property(property, 1);
            max_dist = 1;
        }
    }

    let mut frontier = Deque::new();
    let unvisited = |maze: &Maze, pos: Point| {
        maze.cell(pos).is_some_and(|c| c.property(property) == 0)
    };

    for &source in sources {
        for next in maze.neighbor_points(source) {
            if unvisited(maze, next) {
                frontier.push_back((source, next));
            }
        }
    }

    while let Some((from, to)) = frontier.pop_front() {
        if !unvisited(maze, to) {
            continue;
        }

        let dist = maze.cell(from).map_or(0, |c| c.property(property)) + 1;
        if let Some(cell) = maze.cell_mut(to) {
            cell.set_property(property, dist);
        }
        max_dist = max_dist.max(dist);

        for next in maze.neighbor_points(to) {
            if unvisited(maze, next) {
                frontier.push_back((to, next));
            }
        }
    }

    log::debug!(
        "Distances from {} source(s) computed, max {}",
        sources.len(),
        max_dist
    );
    max_dist
}

/// Marks the cells of `path` with `flag`, clearing it everywhere else.
pub fn mark_path(maze: &mut Maze, path: &[Point], flag: usize) {
    maze.clear_flag(flag);
    for &pos in path {
        if let Some(cell) = maze.cell_mut(pos) {
            cell.set_flag(flag, true);
        }
    }
}
