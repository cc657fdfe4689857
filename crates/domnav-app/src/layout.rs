//! Demo layout: a scrollable container holding a grid of cells.

use domnav_core::{Bounds, MemoryDom, MemoryElement, Size};

/// Shape of the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoLayout {
    pub cols: i32,
    pub rows: i32,
    pub cell: Size,
    /// Visible size of the scrolling container.
    pub container: Size,
    pub window: Size,
}

impl Default for DemoLayout {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 6,
            cell: Size::new(120, 80),
            container: Size::new(480, 240),
            window: Size::new(800, 600),
        }
    }
}

impl DemoLayout {
    /// Build the page. The container is registered as `#grid`.
    pub fn build(&self) -> (MemoryDom, MemoryElement, Vec<MemoryElement>) {
        let dom = MemoryDom::new(self.window);
        let list = dom.create_element(
            None,
            Bounds::new(0, 0, self.container.width, self.container.height),
        );
        dom.set_id(&list, "grid");
        let mut cells = Vec::with_capacity((self.cols * self.rows).max(0) as usize);
        for r in 0..self.rows {
            for c in 0..self.cols {
                let b = Bounds::new(
                    c * self.cell.width,
                    r * self.cell.height,
                    self.cell.width,
                    self.cell.height,
                );
                cells.push(dom.create_element(Some(&list), b));
            }
        }
        (dom, list, cells)
    }
}
