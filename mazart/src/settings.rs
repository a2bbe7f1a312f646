use std::{fmt::Display, path::Path};

use cmazart::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::Metric;

pub const MAZE_SIZE_MIN: usize = 8;
pub const MAZE_SIZE_MAX: usize = 2048;
pub const MAZE_SIZE_DEFAULT: usize = 64;

#[derive(Debug, Error)]
pub enum LoadError {
    Io(#[from] std::io::Error),
    Toml(#[from] toml::de::Error),
    Range {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    OutOfMaze {
        name: &'static str,
        point: Point,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Toml(e) => write!(f, "TOML parse error: {}", e),
            LoadError::Range {
                name,
                value,
                min,
                max,
            } => write!(f, "{} must be in range {}..={}, got {}", name, min, max, value),
            LoadError::OutOfMaze { name, point } => {
                write!(f, "{} point {} is outside of the maze", name, point)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub maze_height: usize,
    pub maze_width: usize,
    /// Drawn from the thread rng when missing.
    pub seed: Option<u64>,
    /// Defaults to the top right corner.
    pub start: Option<Point>,
    /// Defaults to the bottom left corner.
    pub end: Option<Point>,
    pub metric: Metric,
    pub draw_path: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze_height: MAZE_SIZE_DEFAULT,
            maze_width: MAZE_SIZE_DEFAULT,
            seed: None,
            start: None,
            end: None,
            metric: Metric::None,
            draw_path: false,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::debug!("Loading settings from {:?}", path);

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn start_point(&self) -> Point {
        self.start
            .unwrap_or(Point::new(0, self.maze_width.saturating_sub(1)))
    }

    pub fn end_point(&self) -> Point {
        self.end
            .unwrap_or(Point::new(self.maze_height.saturating_sub(1), 0))
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        fn check_range(name: &'static str, value: usize) -> Result<(), LoadError> {
            if (MAZE_SIZE_MIN..=MAZE_SIZE_MAX).contains(&value) {
                Ok(())
            } else {
                Err(LoadError::Range {
                    name,
                    value,
                    min: MAZE_SIZE_MIN,
                    max: MAZE_SIZE_MAX,
                })
            }
        }

        check_range("maze_height", self.maze_height)?;
        check_range("maze_width", self.maze_width)?;

        for (name, point) in [("start", self.start_point()), ("end", self.end_point())] {
            if !point.is_within(self.maze_height, self.maze_width) {
                return Err(LoadError::OutOfMaze { name, point });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_opposite_corners() {
        let settings = Settings::default();
        assert_eq!(settings.start_point(), Point::new(0, 63));
        assert_eq!(settings.end_point(), Point::new(63, 0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let settings = Settings::from_toml(
            r#"
            maze_height = 16
            seed = 5
            end = { row = 3, col = 4 }
            metric = "start"
            "#,
        )
        .unwrap();

        assert_eq!(settings.maze_height, 16);
        assert_eq!(settings.maze_width, MAZE_SIZE_DEFAULT);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.end_point(), Point::new(3, 4));
        assert_eq!(settings.metric, Metric::Start);
        assert!(!settings.draw_path);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Settings::from_toml("maze_width = \"wide\""),
            Err(LoadError::Toml(_))
        ));

        let small = Settings {
            maze_width: 4,
            ..Default::default()
        };
        assert!(matches!(
            small.validate(),
            Err(LoadError::Range { name: "maze_width", value: 4, .. })
        ));

        let outside = Settings {
            start: Some(Point::new(64, 0)),
            ..Default::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(LoadError::OutOfMaze { name: "start", .. })
        ));
    }
}
