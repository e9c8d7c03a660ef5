// Vertical scroll offsets for grids with more rows than fit

/// Maximum scroll offset: the combined height of every row after the first.
pub fn scroll_max(row_heights: &[f32]) -> f32 {
    row_heights.iter().skip(1).sum()
}

/// Offset that brings `row` to the top, capped at `max`.
pub fn row_top(row_heights: &[f32], row: usize, max: f32) -> f32 {
    let top: f32 = row_heights.iter().take(row).sum();
    top.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_is_top() {
        assert_eq!(row_top(&[10.0, 20.0, 30.0], 0, 50.0), 0.0);
    }

    #[test]
    fn test_max_excludes_first_row() {
        assert_eq!(scroll_max(&[10.0, 20.0, 30.0]), 50.0);
        assert_eq!(scroll_max(&[]), 0.0);
    }

    #[test]
    fn test_row_top_clamped() {
        assert_eq!(row_top(&[10.0, 20.0, 30.0], 2, 25.0), 25.0);
        assert_eq!(row_top(&[10.0, 20.0, 30.0], 1, 50.0), 10.0);
    }
}
