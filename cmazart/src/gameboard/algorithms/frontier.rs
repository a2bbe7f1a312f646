use rand::Rng as _;

use crate::{
    core::Point,
    gameboard::{Cell, CellId, Maze, Way},
    grid::Grid,
    priority::PriorityQueue,
};

use super::{GenerationStats, MazeGenerator, Random};

/// Randomized frontier walk.
///
/// Every step pushes the passages from the current cell to its unvisited neighbors into a
/// max-heap under freshly drawn random priorities, then carves the top passage whose target
/// is still unvisited and continues from that target. Ties between equal priorities are
/// resolved by [`PriorityQueue`]'s right-child rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierGenerator;

impl MazeGenerator for FrontierGenerator {
    fn generate(&self, cells: &mut Grid<Cell>, start: Point, rng: &mut Random) -> GenerationStats {
        let mut stats = GenerationStats::default();
        cells.iter_mut().for_each(|cell| cell.visited = false);

        let Some(mut current) = cells.pos_to_idx(start) else {
            return stats;
        };

        let mut candidates: PriorityQueue<(CellId, CellId)> =
            PriorityQueue::with_capacity(cells.len().min(crate::priority::DEFAULT_CAPACITY));

        loop {
            let Some(cell) = cells.get_idx_mut(current) else {
                break;
            };
            cell.visited = true;
            let pos = cell.position();

            for way in Way::ALL {
                let Some(next) = pos.offset(way).and_then(|p| cells.pos_to_idx(p)) else {
                    continue;
                };
                if cells.get_idx(next).is_some_and(|c| !c.visited) {
                    candidates.push(rng.gen(), (current, next));
                }
            }

            let mut carved = None;
            while let Some((from, to)) = candidates.pop() {
                if cells.get_idx(to).is_some_and(|c| !c.visited) {
                    carved = Some((from, to));
                    break;
                }
                stats.discarded += 1;
            }

            let Some((from, to)) = carved else {
                break;
            };
            if Maze::connect_cells(cells, from, to) {
                stats.connections += 1;
            }
            current = to;
        }

        stats
    }
}
