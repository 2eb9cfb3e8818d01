use std::str::FromStr;

/// Distance an arrow key moves the selected element, in pixels.
pub const NUDGE_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a keyboard key name such as `ArrowUp` to a direction.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Offset for one step in this direction; y grows downwards.
    pub fn delta(self, step: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(direction) = Direction::from_key(s) {
            return Ok(direction);
        }

        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("unknown direction '{}'", s)),
        }
    }
}
