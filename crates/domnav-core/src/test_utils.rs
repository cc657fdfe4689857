//! Shared fixtures for domnav-core tests.

use domnav_types::{Bounds, Size};

use crate::memory::{MemoryDom, MemoryElement};

/// Window size used by the fixtures.
pub const VIEWPORT: Size = Size::new(1024, 768);

/// A `cols` x `rows` grid of `w` x `h` cells inside a static container at
/// the page origin that exactly fits the grid.
pub fn grid_fixture(
    cols: i32,
    rows: i32,
    w: i32,
    h: i32,
) -> (MemoryDom, MemoryElement, Vec<MemoryElement>) {
    let dom = MemoryDom::new(VIEWPORT);
    let list = dom.create_element(None, Bounds::new(0, 0, cols * w, rows * h));
    let cells = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (c, r)))
        .map(|(c, r)| dom.create_element(Some(&list), Bounds::new(c * w, r * h, w, h)))
        .collect();
    (dom, list, cells)
}

/// `n` boxes of `w` x `h` in a single row.
pub fn row_fixture(n: i32, w: i32, h: i32) -> (MemoryDom, MemoryElement, Vec<MemoryElement>) {
    grid_fixture(n, 1, w, h)
}
