//! Box geometry in host pixel units.
//!
//! All values are integers, matching the offset properties a layout engine
//! reports. Offsets are relative to the element's offset parent unless a
//! type says otherwise.

use serde::{Deserialize, Serialize};

/// A point in offset coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub left: i32,
    pub top: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Manhattan distance (`|Δleft| + |Δtop|`) to another point.
    pub fn manhattan(self, other: Point) -> u64 {
        u64::from(self.left.abs_diff(other.left)) + u64::from(self.top.abs_diff(other.top))
    }
}

/// Width and height of a viewport or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Offset box of an element: position relative to its offset parent plus
/// its outer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (`left + width`), saturating at the `i32` range.
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (`top + height`), saturating at the `i32` range.
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Element rectangle relative to the visible page viewport (what a browser
/// reports from `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClientRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `size` placed at `origin`.
    pub const fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(
            origin.left,
            origin.top,
            origin.left.saturating_add(size.width),
            origin.top.saturating_add(size.height),
        )
    }
}

/// Scroll position of a scrollable box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub left: i32,
    pub top: i32,
}

impl ScrollOffset {
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}
