//! Viewport membership and minimal scroll adjustments.
//!
//! Everything here is a pure function of box geometry. The navigator reads
//! the host state, asks these helpers what to do, and applies the result.

use domnav_types::{Bounds, ClientRect, Direction, Point, ScrollOffset, Size};

use crate::host::ElementView;

/// Offset-parent chains longer than this are assumed to be cyclic.
const MAX_OFFSET_DEPTH: usize = 256;

/// A scroll assignment on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAdjust {
    /// Set the horizontal scroll offset.
    Left(i32),
    /// Set the vertical scroll offset.
    Top(i32),
}

/// Whether `el`, shifted by the container's scroll, lies fully inside the
/// container box on all four sides.
pub fn in_container_viewport(el: Bounds, container: Bounds, scroll: ScrollOffset) -> bool {
    el.left.saturating_sub(scroll.left) >= container.left
        && el.top.saturating_sub(scroll.top) >= container.top
        && el.right().saturating_sub(scroll.left) <= container.right()
        && el.bottom().saturating_sub(scroll.top) <= container.bottom()
}

/// Whether a client rectangle lies fully inside a viewport anchored at the
/// origin.
pub fn in_page_viewport(rect: ClientRect, viewport: Size) -> bool {
    rect.top >= 0 && rect.left >= 0 && rect.bottom <= viewport.height && rect.right <= viewport.width
}

/// Container scroll that aligns `el` with the container edge the move heads
/// towards: leading edge for left/up, trailing edge for right/down.
pub fn container_scroll(direction: Direction, el: Bounds, container: Bounds) -> ScrollAdjust {
    let leading = Point::new(
        el.left.saturating_sub(container.left),
        el.top.saturating_sub(container.top),
    );
    match direction {
        Direction::Left => ScrollAdjust::Left(leading.left),
        Direction::Up => ScrollAdjust::Top(leading.top),
        Direction::Right => {
            ScrollAdjust::Left(leading.left.saturating_sub(container.width.saturating_sub(el.width)))
        },
        Direction::Down => ScrollAdjust::Top(
            leading.top.saturating_sub(container.height.saturating_sub(el.height)),
        ),
    }
}

/// Page scroll that aligns an element at `absolute` (size `el`) with the
/// window edge the move heads towards.
pub fn page_scroll(
    direction: Direction,
    absolute: Point,
    el: Size,
    body: Point,
    client: Size,
) -> ScrollAdjust {
    let leading = Point::new(
        absolute.left.saturating_sub(body.left),
        absolute.top.saturating_sub(body.top),
    );
    match direction {
        Direction::Left => ScrollAdjust::Left(leading.left),
        Direction::Up => ScrollAdjust::Top(leading.top),
        Direction::Right => {
            ScrollAdjust::Left(leading.left.saturating_sub(client.width.saturating_sub(el.width)))
        },
        Direction::Down => {
            ScrollAdjust::Top(leading.top.saturating_sub(client.height.saturating_sub(el.height)))
        },
    }
}

/// Sum of offsets from `el` up through its offset-parent chain.
pub fn absolute_offset<E: ElementView>(el: &E) -> Point {
    let mut total = el.bounds().origin();
    let mut current = el.offset_parent();
    let mut depth = 0;
    while let Some(parent) = current {
        depth += 1;
        if depth > MAX_OFFSET_DEPTH {
            log::warn!("Offset parent chain exceeds {MAX_OFFSET_DEPTH} levels; truncating");
            break;
        }
        let b = parent.bounds();
        total.left = total.left.saturating_add(b.left);
        total.top = total.top.saturating_add(b.top);
        current = parent.offset_parent();
    }
    total
}

/// Vertical component of [`absolute_offset`].
pub fn absolute_offset_top<E: ElementView>(el: &E) -> i32 {
    absolute_offset(el).top
}

/// Horizontal component of [`absolute_offset`].
pub fn absolute_offset_left<E: ElementView>(el: &E) -> i32 {
    absolute_offset(el).left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    const CONTAINER: Bounds = Bounds::new(10, 10, 100, 100);

    #[test]
    fn fully_inside_container() {
        let el = Bounds::new(20, 20, 50, 50);
        assert!(in_container_viewport(el, CONTAINER, ScrollOffset::default()));
    }

    #[test]
    fn touching_edges_counts_as_inside() {
        let el = Bounds::new(10, 10, 100, 100);
        assert!(in_container_viewport(el, CONTAINER, ScrollOffset::default()));
    }

    #[test]
    fn each_side_can_fail() {
        let none = ScrollOffset::default();
        assert!(!in_container_viewport(Bounds::new(9, 20, 10, 10), CONTAINER, none));
        assert!(!in_container_viewport(Bounds::new(20, 9, 10, 10), CONTAINER, none));
        assert!(!in_container_viewport(Bounds::new(101, 20, 10, 10), CONTAINER, none));
        assert!(!in_container_viewport(Bounds::new(20, 101, 10, 10), CONTAINER, none));
    }

    #[test]
    fn scroll_shifts_membership() {
        // Below the fold until the container scrolls down by 60.
        let el = Bounds::new(20, 150, 10, 10);
        assert!(!in_container_viewport(el, CONTAINER, ScrollOffset::default()));
        assert!(in_container_viewport(el, CONTAINER, ScrollOffset::new(0, 60)));
        // Scrolled too far: now above the top edge.
        assert!(!in_container_viewport(el, CONTAINER, ScrollOffset::new(0, 150)));
    }

    #[test]
    fn page_viewport_bounds() {
        let vp = Size::new(800, 600);
        assert!(in_page_viewport(ClientRect::new(0, 0, 800, 600), vp));
        assert!(!in_page_viewport(ClientRect::new(-1, 0, 10, 10), vp));
        assert!(!in_page_viewport(ClientRect::new(0, -1, 10, 10), vp));
        assert!(!in_page_viewport(ClientRect::new(0, 0, 801, 10), vp));
        assert!(!in_page_viewport(ClientRect::new(0, 0, 10, 601), vp));
    }

    #[test]
    fn container_scroll_leading_edges() {
        let el = Bounds::new(250, 340, 40, 30);
        assert_eq!(
            container_scroll(Direction::Left, el, CONTAINER),
            ScrollAdjust::Left(240)
        );
        assert_eq!(
            container_scroll(Direction::Up, el, CONTAINER),
            ScrollAdjust::Top(330)
        );
    }

    #[test]
    fn container_scroll_trailing_edges() {
        let el = Bounds::new(250, 340, 40, 30);
        // 250 - 10 - (100 - 40) = 180: element's right edge meets container's.
        assert_eq!(
            container_scroll(Direction::Right, el, CONTAINER),
            ScrollAdjust::Left(180)
        );
        // 340 - 10 - (100 - 30) = 260.
        assert_eq!(
            container_scroll(Direction::Down, el, CONTAINER),
            ScrollAdjust::Top(260)
        );
        // After scrolling, the element sits inside.
        assert!(in_container_viewport(
            el,
            CONTAINER,
            ScrollOffset::new(180, 260)
        ));
    }

    #[test]
    fn page_scroll_formulas() {
        let abs = Point::new(1000, 2000);
        let el = Size::new(50, 40);
        let body = Point::new(8, 8);
        let client = Size::new(800, 600);
        assert_eq!(
            page_scroll(Direction::Left, abs, el, body, client),
            ScrollAdjust::Left(992)
        );
        assert_eq!(
            page_scroll(Direction::Up, abs, el, body, client),
            ScrollAdjust::Top(1992)
        );
        assert_eq!(
            page_scroll(Direction::Right, abs, el, body, client),
            ScrollAdjust::Left(1000 - 8 - 750)
        );
        assert_eq!(
            page_scroll(Direction::Down, abs, el, body, client),
            ScrollAdjust::Top(2000 - 8 - 560)
        );
    }

    #[test]
    fn scroll_math_saturates_for_far_boxes() {
        let far = Bounds::new(i32::MAX - 5, i32::MIN + 5, 10, 10);
        assert!(!in_container_viewport(far, CONTAINER, ScrollOffset::new(i32::MIN, i32::MAX)));
        assert_eq!(
            container_scroll(Direction::Right, far, Bounds::new(-10, 0, 100, 100)),
            ScrollAdjust::Left(i32::MAX - 90)
        );
        assert_eq!(
            container_scroll(Direction::Up, far, CONTAINER),
            ScrollAdjust::Top(i32::MIN)
        );
        assert_eq!(
            page_scroll(Direction::Down, far.origin(), far.size(), Point::new(0, 10), Size::new(0, 100)),
            ScrollAdjust::Top(i32::MIN)
        );
    }

    #[test]
    fn absolute_offset_sums_offset_parents() {
        let dom = MemoryDom::new(Size::new(800, 600));
        let outer = dom.create_element(None, Bounds::new(100, 50, 500, 500));
        let inner = dom.create_element(Some(&outer), Bounds::new(20, 30, 200, 200));
        let leaf = dom.create_element(Some(&inner), Bounds::new(5, 7, 10, 10));
        outer.set_positioned(true);
        inner.set_positioned(true);
        assert_eq!(absolute_offset(&leaf), Point::new(125, 87));
        assert_eq!(absolute_offset_top(&leaf), 87);
        assert_eq!(absolute_offset_left(&leaf), 125);
        assert_eq!(absolute_offset(&outer), Point::new(100, 50));
    }
}
