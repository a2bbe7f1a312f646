use std::path::PathBuf;

use clap::Parser;
use cmazart::Point;
use mazart::{app, logging, metrics::Metric, settings::Settings, AppError};

fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| e.to_string());
    Ok(Point::new(parse(row)?, parse(col)?))
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazart")]
struct Args {
    #[clap(short, long, help = "TOML settings file, flags override its values")]
    config: Option<PathBuf>,
    #[clap(long, help = "Maze height in cells (8..=2048)")]
    maze_height: Option<usize>,
    #[clap(long, help = "Maze width in cells (8..=2048)")]
    maze_width: Option<usize>,
    #[clap(long, help = "Random seed, drawn randomly when omitted")]
    seed: Option<u64>,
    #[clap(long, value_parser = parse_point, help = "Start point as ROW,COL")]
    start: Option<Point>,
    #[clap(long, value_parser = parse_point, help = "End point as ROW,COL")]
    end: Option<Point>,
    #[clap(long, value_enum, help = "Cells to measure distances from")]
    cell_metric: Option<Metric>,
    #[clap(long, action, help = "Draw the solution path")]
    draw_path: bool,
    #[clap(long, action, conflicts_with = "draw_path", help = "Don't draw the solution path")]
    no_draw_path: bool,
    #[clap(short, long, action, help = "Log progress")]
    verbose: bool,
    #[clap(long, action, help = "Log everything")]
    debug: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(height) = self.maze_height {
            settings.maze_height = height;
        }
        if let Some(width) = self.maze_width {
            settings.maze_width = width;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.start.is_some() {
            settings.start = self.start;
        }
        if self.end.is_some() {
            settings.end = self.end;
        }
        if let Some(metric) = self.cell_metric {
            settings.metric = metric;
        }
        if self.draw_path {
            settings.draw_path = true;
        } else if self.no_draw_path {
            settings.draw_path = false;
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let level = match (args.debug, args.verbose) {
        (true, _) => log::Level::Trace,
        (_, true) => log::Level::Info,
        _ => log::Level::Warn,
    };
    logging::init(level)?;
    better_panic::install();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    args.apply(&mut settings);
    log::debug!("{:?}", settings);

    let outcome = app::run(&settings)?;

    print!("{}", outcome.text);
    println!("Seed: {}", outcome.seed);
    println!("Path length: {}", outcome.path.len());
    if let Some(max) = outcome.max_distance {
        println!("Max distance: {}", max);
    }

    Ok(())
}
