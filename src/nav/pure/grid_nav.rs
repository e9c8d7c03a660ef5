// Pure cursor math for panel grids and content lists

use crate::nav::types::Direction;

/// Panels per grid row.
pub const ROW_LEN: usize = 3;

/// One step from `index` in `direction`.
///
/// Horizontal moves wrap inside the current row; vertical moves wrap across
/// rows in the same column. A single-row grid has no vertical neighbor.
pub fn step_panel_index(index: usize, panel_count: usize, direction: Direction) -> usize {
    let rows = panel_count / ROW_LEN;
    if rows == 0 {
        return index;
    }
    let row = index / ROW_LEN;
    let col = index % ROW_LEN;
    match direction {
        Direction::Right => row * ROW_LEN + (col + 1) % ROW_LEN,
        Direction::Left => row * ROW_LEN + (col + ROW_LEN - 1) % ROW_LEN,
        Direction::Down => ((row + 1) % rows) * ROW_LEN + col,
        Direction::Up => ((row + rows - 1) % rows) * ROW_LEN + col,
    }
}

/// Walk from `index` in `direction`, skipping panels `navigable` rejects.
///
/// Returns `None` when the walk comes back to `index` without finding one.
pub fn find_panel_index(
    index: usize,
    panel_count: usize,
    direction: Direction,
    navigable: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut candidate = index;
    loop {
        candidate = step_panel_index(candidate, panel_count, direction);
        if candidate == index {
            return None;
        }
        if navigable(candidate) {
            return Some(candidate);
        }
    }
}

/// Cyclic content cursor: Down/Right advance, Up/Left go back, both wrap.
pub fn cycle_index(current: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_forward() {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_wraps_within_row() {
        assert_eq!(step_panel_index(2, 9, Direction::Right), 0);
        assert_eq!(step_panel_index(3, 9, Direction::Left), 5);
        assert_eq!(step_panel_index(4, 9, Direction::Right), 5);
    }

    #[test]
    fn test_vertical_wraps_across_rows() {
        assert_eq!(step_panel_index(7, 9, Direction::Down), 1);
        assert_eq!(step_panel_index(1, 9, Direction::Up), 7);
        assert_eq!(step_panel_index(4, 12, Direction::Down), 7);
    }

    #[test]
    fn test_single_row_has_no_vertical_neighbor() {
        assert_eq!(step_panel_index(1, 3, Direction::Down), 1);
        assert_eq!(find_panel_index(1, 3, Direction::Up, |_| true), None);
    }

    #[test]
    fn test_find_skips_rejected_panels() {
        // 0 1 2 with 1 hidden
        assert_eq!(find_panel_index(0, 3, Direction::Right, |i| i != 1), Some(2));
        assert_eq!(find_panel_index(0, 3, Direction::Right, |i| i == 0), None);
    }

    #[test]
    fn test_cycle_index_wraps() {
        assert_eq!(cycle_index(2, 3, Direction::Down), 0);
        assert_eq!(cycle_index(0, 3, Direction::Up), 2);
        assert_eq!(cycle_index(1, 3, Direction::Right), 2);
        assert_eq!(cycle_index(0, 0, Direction::Down), 0);
    }
}
