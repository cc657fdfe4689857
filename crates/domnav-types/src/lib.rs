//! Foundation types for domnav.
//!
//! This crate contains the host-agnostic types shared by the domnav crates:
//! box geometry, navigation directions and key events, the navigator
//! configuration, and the error type.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;

pub use config::{Mode, NavigatorConfig, Options};
pub use error::{NavError, Result};
pub use geometry::{Bounds, ClientRect, Point, ScrollOffset, Size};
pub use input::{Direction, KeyBindings, KeyCode, KeyEvent};
