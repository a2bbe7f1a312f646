pub mod app;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod settings;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Settings(#[from] settings::LoadError),
    #[error("Maze error: {0}")]
    Maze(#[from] cmazart::MazeError),
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
