//! Directional input
//!
//! Keyboard arrows and the four on-screen buttons both resolve to a
//! `Direction`, and every direction goes through the same move.

use glam::Vec2;

use crate::consts::STEP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One step in screen space (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -STEP),
            Direction::Down => Vec2::new(0.0, STEP),
            Direction::Left => Vec2::new(-STEP, 0.0),
            Direction::Right => Vec2::new(STEP, 0.0),
        }
    }

    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Element id of the matching on-screen button
    pub fn control_id(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_control_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.control_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_buttons_agree() {
        for dir in Direction::ALL {
            let key = format!("Arrow{dir:?}");
            assert_eq!(Direction::from_key(&key), Some(dir));
            assert_eq!(Direction::from_control_id(dir.control_id()), Some(dir));
        }
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(Direction::from_key("w"), None);
        assert_eq!(Direction::from_key(" "), None);
        assert_eq!(Direction::from_control_id("restart"), None);
    }

    #[test]
    fn test_deltas_are_single_axis_steps() {
        for dir in Direction::ALL {
            let d = dir.delta();
            assert_eq!(d.x.abs() + d.y.abs(), STEP);
            assert!(d.x == 0.0 || d.y == 0.0);
        }
        assert_eq!(Direction::Up.delta().y, -STEP);
    }
}
