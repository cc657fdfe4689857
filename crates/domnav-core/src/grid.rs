//! Row-major grid rules.

use crate::host::ElementView;

/// Column count of a row-major layout: the length of the leading run of
/// boxes sharing the first box's top offset.
///
/// Assumes every row but the last is full and rows share a top offset;
/// ragged or staggered layouts are not detected.
pub fn detect_columns(tops: impl IntoIterator<Item = i32>) -> u32 {
    let mut tops = tops.into_iter();
    let Some(first) = tops.next() else {
        return 0;
    };
    1 + tops.take_while(|&top| top == first).count() as u32
}

/// Left is blocked in the first column. With no columns known there is no
/// boundary to block on.
pub fn can_move_left(index: usize, cols: u32) -> bool {
    cols == 0 || index % cols as usize != 0
}

/// Right is blocked in the last column, except from the very first cell.
pub fn can_move_right(index: usize, cols: u32) -> bool {
    cols == 0 || index == 0 || (index + 1) % cols as usize != 0
}

/// Walk `steps` siblings from `from`; `None` if the chain runs out first.
pub fn walk<E: ElementView>(from: &E, steps: u32, backward: bool) -> Option<E> {
    let mut current = from.clone();
    for _ in 0..steps {
        current = if backward {
            current.previous_sibling()?
        } else {
            current.next_sibling()?
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::grid_fixture;

    #[test]
    fn detect_columns_first_row() {
        assert_eq!(detect_columns([0, 0, 0, 100, 100, 100]), 3);
        assert_eq!(detect_columns([0, 100, 200]), 1);
        assert_eq!(detect_columns([5, 5, 5, 5]), 4);
        assert_eq!(detect_columns(std::iter::empty()), 0);
    }

    #[test]
    fn detect_columns_stops_at_first_change() {
        // A later row sharing the first top is not counted.
        assert_eq!(detect_columns([0, 0, 100, 0]), 2);
    }

    #[test]
    fn left_blocked_in_first_column() {
        let blocked: Vec<usize> = (0..9).filter(|&i| !can_move_left(i, 3)).collect();
        assert_eq!(blocked, vec![0, 3, 6]);
    }

    #[test]
    fn right_blocked_in_last_column() {
        let blocked: Vec<usize> = (0..9).filter(|&i| !can_move_right(i, 3)).collect();
        assert_eq!(blocked, vec![2, 5, 8]);
    }

    #[test]
    fn single_column_still_moves_right_from_first() {
        assert!(can_move_right(0, 1));
        assert!(!can_move_right(1, 1));
        assert!(!can_move_left(0, 1));
    }

    #[test]
    fn zero_columns_never_blocks_sideways() {
        assert!((0..9).all(|i| can_move_left(i, 0)));
        assert!((0..9).all(|i| can_move_right(i, 0)));
    }

    #[test]
    fn walk_steps_through_siblings() {
        let (_dom, _list, cells) = grid_fixture(3, 3, 10, 10);
        assert_eq!(walk(&cells[1], 3, false), Some(cells[4].clone()));
        assert_eq!(walk(&cells[7], 3, true), Some(cells[4].clone()));
        assert_eq!(walk(&cells[7], 3, false), None);
        assert_eq!(walk(&cells[2], 3, true), None);
        assert_eq!(walk(&cells[2], 0, true), Some(cells[2].clone()));
    }
}
