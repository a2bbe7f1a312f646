use cmazart::{Maze, Point};

const WALL: char = '#';
const OPEN: char = ' ';
const PATH: char = '*';
const START: char = 'S';
const END: char = 'E';

/// Draws the maze as text, one character per cell and one per wall.
///
/// With `path_flag`, cells carrying that flag and passages between two such cells are drawn as
/// the path.
pub fn render(maze: &Maze, path_flag: Option<usize>) -> String {
    let (height, width) = (maze.height(), maze.width());
    let (rows, cols) = (height * 2 + 1, width * 2 + 1);
    let mut canvas = vec![vec![WALL; cols]; rows];

    let on_path = |pos: Point| {
        path_flag.is_some_and(|flag| maze.cell(pos).is_some_and(|cell| cell.flag(flag)))
    };
    let tile = |pos: Point| if on_path(pos) { PATH } else { OPEN };

    for cell in maze.cells().iter() {
        let pos = cell.position();
        let (r, c) = (pos.row * 2 + 1, pos.col * 2 + 1);
        canvas[r][c] = tile(pos);

        // Every passage is drawn from its upper or left end.
        for next in cell.neighbor_points() {
            if next.row < pos.row || next.col < pos.col {
                continue;
            }
            let ch = if on_path(pos) && on_path(next) { PATH } else { OPEN };
            if next.row > pos.row {
                canvas[r + 1][c] = ch;
            } else {
                canvas[r][c + 1] = ch;
            }
        }
    }

    for (pos, ch) in [(maze.start(), START), (maze.end(), END)] {
        canvas[pos.row * 2 + 1][pos.col * 2 + 1] = ch;
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}
