//! domnav-core: spatial keyboard navigation over the children of a
//! scrollable container.
//!
//! The [`Navigator`] turns directional key presses into a new selection,
//! scrolling the container (or the page) just enough to keep it visible.
//! All host access goes through the traits in [`host`]; [`memory`] provides
//! an in-memory implementation.

pub mod grid;
pub mod host;
pub mod memory;
pub mod navigator;
pub mod registry;
pub mod scroll;
pub mod spatial;

#[cfg(test)]
pub(crate) mod test_utils;

pub use domnav_types::{
    Bounds, ClientRect, Direction, KeyEvent, Mode, NavError, NavigatorConfig, Point, Result,
    ScrollOffset, Size,
};
pub use host::{Container, Document, ElementOf, ElementView, ListenerId};
pub use memory::{MemoryDom, MemoryElement};
pub use navigator::Navigator;
pub use registry::{Method, NavigatorRegistry, Reply};
