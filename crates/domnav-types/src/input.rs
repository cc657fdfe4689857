//! Host-agnostic key input types.
//!
//! Hosts translate their native keyboard events into [`KeyEvent`]s carrying a
//! numeric key code. A [`KeyBindings`] table maps codes to [`Direction`]s.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Numeric key code as reported by the host (`KeyboardEvent.which`).
pub type KeyCode = u32;

/// Default key code for moving left (arrow left).
pub const KEY_LEFT: KeyCode = 37;
/// Default key code for moving up (arrow up).
pub const KEY_UP: KeyCode = 38;
/// Default key code for moving right (arrow right).
pub const KEY_RIGHT: KeyCode = 39;
/// Default key code for moving down (arrow down).
pub const KEY_DOWN: KeyCode = 40;

/// One of the four navigation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions, in binding order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    /// True for left/right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// True for left/up: the move heads towards the start of the layout.
    pub fn is_backward(self) -> bool {
        matches!(self, Self::Left | Self::Up)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "up" => Ok(Self::Up),
            "right" => Ok(Self::Right),
            "down" => Ok(Self::Down),
            other => Err(NavError::InvalidConfiguration(format!(
                "unknown direction: {other}"
            ))),
        }
    }
}

/// A key press delivered by the host's document-level input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub which: KeyCode,
}

impl KeyEvent {
    pub const fn new(which: KeyCode) -> Self {
        Self { which }
    }
}

/// Key code to direction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Direction>,
}

impl KeyBindings {
    /// Build a table from one code per direction.
    ///
    /// Codes are bound in left, up, right, down order; when two directions
    /// share a code the later one wins.
    pub fn new(left: KeyCode, up: KeyCode, right: KeyCode, down: KeyCode) -> Self {
        let mut map = HashMap::with_capacity(4);
        for (code, dir) in [left, up, right, down].into_iter().zip(Direction::ALL) {
            map.insert(code, dir);
        }
        Self { map }
    }

    /// Direction bound to `code`, if any.
    pub fn direction(&self, code: KeyCode) -> Option<Direction> {
        self.map.get(&code).copied()
    }

    /// Number of distinct bound codes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(KEY_LEFT, KEY_UP, KEY_RIGHT, KEY_DOWN)
    }
}
