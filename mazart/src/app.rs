use cmazart::{Maze, Point};
use rand::{thread_rng, Rng as _};

use crate::{
    metrics::{self, DISTANCE_PROPERTY, PATH_FLAG},
    render,
    settings::Settings,
    AppError,
};

/// Everything produced by one run.
#[derive(Debug)]
pub struct Outcome {
    pub seed: u64,
    pub maze: Maze,
    pub path: Vec<Point>,
    /// Largest distance of the chosen metric.
    pub max_distance: Option<i64>,
    pub text: String,
}

/// Generates, solves and measures the maze described by `settings`.
pub fn run(settings: &Settings) -> Result<Outcome, AppError> {
    settings.validate()?;

    let seed = settings.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!("Seed: {}", seed);

    let (height, width) = (settings.maze_height, settings.maze_width);
    let (start, end) = (settings.start_point(), settings.end_point());
    let mut maze = Maze::with_seed(height, width, start, end, seed)?;
    log::info!("Created {}x{} maze, {} -> {}", height, width, start, end);

    let path = maze.compute_path(start, end, height * width + 1);
    if path.is_empty() {
        log::warn!("No path found from {} to {}", start, end);
    } else {
        log::info!("Path found, length = {}", path.len());
    }
    metrics::mark_path(&mut maze, &path, PATH_FLAG);

    let max_distance = settings.metric.apply(&mut maze, &path, DISTANCE_PROPERTY);
    if let Some(max) = max_distance {
        log::info!("Max {:?} distance is {}", settings.metric, max);
    }

    let text = render::render(&maze, settings.draw_path.then_some(PATH_FLAG));

    Ok(Outcome {
        seed,
        maze,
        path,
        max_distance,
        text,
    })
}
