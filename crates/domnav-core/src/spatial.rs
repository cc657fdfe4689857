//! Nearest-neighbour search for auto mode.
//!
//! A move builds a reference point from the selected box, filters the
//! children to a candidate pool on one axis, and keeps the candidate with the
//! smallest Manhattan distance to the reference. Ties keep the earliest
//! candidate in document order.

use domnav_types::{Bounds, Direction, Point};

use crate::host::ElementView;

/// Open bound used where a filter leaves an axis unconstrained.
pub const UNBOUNDED: i32 = i32::MAX;

/// Elements whose offset is at or before `(left, top)` on both axes.
pub fn elements_before<E: ElementView>(elements: Vec<E>, left: i32, top: i32) -> Vec<E> {
    elements
        .into_iter()
        .filter(|el| {
            let b = el.bounds();
            b.left <= left && b.top <= top
        })
        .collect()
}

/// Elements whose offset is at or after `(left, top)` on both axes.
pub fn elements_after<E: ElementView>(elements: Vec<E>, left: i32, top: i32) -> Vec<E> {
    elements
        .into_iter()
        .filter(|el| {
            let b = el.bounds();
            b.left >= left && b.top >= top
        })
        .collect()
}

/// Point the distance is measured from when leaving `selected` towards
/// `direction`.
pub fn reference_point(direction: Direction, selected: Bounds) -> Point {
    match direction {
        Direction::Left => Point::new(selected.left.saturating_sub(1), selected.top),
        Direction::Up => Point::new(selected.left, selected.top.saturating_sub(1)),
        Direction::Right => Point::new(selected.right(), selected.top),
        Direction::Down => Point::new(selected.left, selected.bottom()),
    }
}

/// Candidate pool for a move from `reference` towards `direction`.
///
/// Only one axis is filtered. Backward moves leave the other axis open;
/// forward moves bound it at zero, so boxes at negative offsets never
/// qualify.
pub fn candidate_pool<E: ElementView>(
    direction: Direction,
    elements: Vec<E>,
    reference: Point,
) -> Vec<E> {
    match direction {
        Direction::Left => elements_before(elements, reference.left, UNBOUNDED),
        Direction::Up => elements_before(elements, UNBOUNDED, reference.top),
        Direction::Right => elements_after(elements, reference.left, 0),
        Direction::Down => elements_after(elements, 0, reference.top),
    }
}

/// Candidate closest to `reference`; the first one wins a tie.
pub fn nearest<E: ElementView>(candidates: Vec<E>, reference: Point) -> Option<E> {
    candidates
        .into_iter()
        .min_by_key(|el| el.bounds().origin().manhattan(reference))
}

/// Next element when moving from `selected` towards `direction`.
pub fn neighbor<E: ElementView>(direction: Direction, elements: Vec<E>, selected: &E) -> Option<E> {
    let reference = reference_point(direction, selected.bounds());
    let pool = candidate_pool(direction, elements, reference);
    log::trace!(
        "{direction} from ({}, {}): {} candidates",
        reference.left,
        reference.top,
        pool.len()
    );
    nearest(pool, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDom, MemoryElement};
    use crate::test_utils::grid_fixture;
    use domnav_types::Size;

    fn boxes(bounds: &[Bounds]) -> Vec<MemoryElement> {
        let dom = MemoryDom::new(Size::new(800, 600));
        let list = dom.create_element(None, Bounds::new(0, 0, 800, 600));
        bounds
            .iter()
            .map(|b| dom.create_element(Some(&list), *b))
            .collect()
    }

    #[test]
    fn reference_points() {
        let b = Bounds::new(100, 200, 30, 40);
        assert_eq!(reference_point(Direction::Left, b), Point::new(99, 200));
        assert_eq!(reference_point(Direction::Up, b), Point::new(100, 199));
        assert_eq!(reference_point(Direction::Right, b), Point::new(130, 200));
        assert_eq!(reference_point(Direction::Down, b), Point::new(100, 240));
    }

    #[test]
    fn reference_points_saturate() {
        let far = Bounds::new(i32::MAX - 5, i32::MAX - 5, 10, 10);
        assert_eq!(reference_point(Direction::Right, far).left, i32::MAX);
        assert_eq!(reference_point(Direction::Down, far).top, i32::MAX);
        let near = Bounds::new(i32::MIN, i32::MIN, 10, 10);
        assert_eq!(reference_point(Direction::Left, near).left, i32::MIN);
        assert_eq!(reference_point(Direction::Up, near).top, i32::MIN);
    }

    #[test]
    fn before_and_after_are_inclusive() {
        let els = boxes(&[
            Bounds::new(0, 0, 10, 10),
            Bounds::new(10, 10, 10, 10),
            Bounds::new(20, 20, 10, 10),
        ]);
        assert_eq!(elements_before(els.clone(), 10, 10), els[..2].to_vec());
        assert_eq!(elements_after(els.clone(), 10, 10), els[1..].to_vec());
    }

    #[test]
    fn forward_pools_exclude_negative_offsets() {
        let els = boxes(&[Bounds::new(50, -20, 10, 10), Bounds::new(50, 20, 10, 10)]);
        let pool = candidate_pool(Direction::Right, els.clone(), Point::new(40, 0));
        assert_eq!(pool, vec![els[1].clone()]);
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let els = boxes(&[Bounds::new(0, 10, 10, 10), Bounds::new(10, 0, 10, 10)]);
        // Both are at distance 10 from the origin.
        assert_eq!(nearest(els.clone(), Point::ORIGIN), Some(els[0].clone()));
    }

    #[test]
    fn nearest_of_empty_pool_is_none() {
        assert_eq!(nearest(Vec::<MemoryElement>::new(), Point::ORIGIN), None);
    }

    #[test]
    fn grid_neighbors_from_center() {
        let (_dom, _list, cells) = grid_fixture(3, 3, 100, 100);
        let center = &cells[4];
        assert_eq!(neighbor(Direction::Up, cells.clone(), center), Some(cells[1].clone()));
        assert_eq!(neighbor(Direction::Down, cells.clone(), center), Some(cells[7].clone()));
        assert_eq!(neighbor(Direction::Left, cells.clone(), center), Some(cells[3].clone()));
        assert_eq!(neighbor(Direction::Right, cells.clone(), center), Some(cells[5].clone()));
    }

    #[test]
    fn no_neighbor_past_the_edge() {
        let (_dom, _list, cells) = grid_fixture(3, 3, 100, 100);
        assert_eq!(neighbor(Direction::Left, cells.clone(), &cells[3]), None);
        assert_eq!(neighbor(Direction::Up, cells.clone(), &cells[1]), None);
        assert_eq!(neighbor(Direction::Right, cells.clone(), &cells[5]), None);
        assert_eq!(neighbor(Direction::Down, cells.clone(), &cells[7]), None);
    }

    #[test]
    fn single_axis_filter_can_pick_other_rows() {
        // Left of (200, 0) only constrains `left`, so a box far below but
        // barely to the left beats nothing at all.
        let els = boxes(&[Bounds::new(150, 500, 10, 10), Bounds::new(200, 0, 10, 10)]);
        assert_eq!(
            neighbor(Direction::Left, els.clone(), &els[1]),
            Some(els[0].clone())
        );
    }
}
