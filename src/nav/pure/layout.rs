// 3x3 layout presets for root grids

use crate::nav::types::{Anchor, GridLayout};

/// Size of one slot as fractions of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub anchor: Anchor,
    pub size: [f32; 2],
}

/// All nine slot sizes for one preset, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPreset {
    pub layout: GridLayout,
    pub slots: [SlotLayout; 9],
}

impl LayoutPreset {
    pub fn slot(&self, anchor: Anchor) -> Option<&SlotLayout> {
        anchor.slot_index().map(|i| &self.slots[i])
    }

    pub fn row_heights(&self) -> [f32; 3] {
        [self.slots[0].size[1], self.slots[3].size[1], self.slots[6].size[1]]
    }
}

/// Widths of the outer and middle columns for the edge rows and the center
/// row, plus the edge and middle row heights.
struct Proportions {
    corner: f32,
    bar: f32,
    side: f32,
    center: f32,
    edge_h: f32,
    middle_h: f32,
}

fn build(layout: GridLayout, p: Proportions) -> LayoutPreset {
    let s = |anchor: Anchor, w: f32, h: f32| SlotLayout {
        anchor,
        size: [w, h],
    };
    LayoutPreset {
        layout,
        slots: [
            s(Anchor::TopLeft, p.corner, p.edge_h),
            s(Anchor::TopCenter, p.bar, p.edge_h),
            s(Anchor::TopRight, p.corner, p.edge_h),
            s(Anchor::CenterLeft, p.side, p.middle_h),
            s(Anchor::Center, p.center, p.middle_h),
            s(Anchor::CenterRight, p.side, p.middle_h),
            s(Anchor::BottomLeft, p.corner, p.edge_h),
            s(Anchor::BottomCenter, p.bar, p.edge_h),
            s(Anchor::BottomRight, p.corner, p.edge_h),
        ],
    }
}

pub fn preset(layout: GridLayout) -> LayoutPreset {
    let p = match layout {
        GridLayout::Default => Proportions {
            corner: 0.1,
            bar: 0.8,
            side: 0.1,
            center: 0.8,
            edge_h: 0.1,
            middle_h: 0.8,
        },
        GridLayout::SmallCorners => Proportions {
            corner: 0.05,
            bar: 0.9,
            side: 0.1,
            center: 0.8,
            edge_h: 0.1,
            middle_h: 0.8,
        },
        GridLayout::SmallCornersVerticals => Proportions {
            corner: 0.05,
            bar: 0.9,
            side: 0.05,
            center: 0.9,
            edge_h: 0.1,
            middle_h: 0.8,
        },
        GridLayout::SmallCornersWideVerticals => Proportions {
            corner: 0.05,
            bar: 0.9,
            side: 0.15,
            center: 0.7,
            edge_h: 0.1,
            middle_h: 0.8,
        },
        GridLayout::SmallCornersUltraWideVerticals => Proportions {
            corner: 0.05,
            bar: 0.9,
            side: 0.25,
            center: 0.5,
            edge_h: 0.1,
            middle_h: 0.8,
        },
        GridLayout::SmallCornersUltraWideVerticalsHorizontals => Proportions {
            corner: 0.05,
            bar: 0.9,
            side: 0.25,
            center: 0.5,
            edge_h: 0.25,
            middle_h: 0.5,
        },
    };
    build(layout, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_every_preset_fills_the_grid() {
        for layout in GridLayout::ALL {
            let p = preset(layout);
            for row in 0..3 {
                let width: f32 = p.slots[row * 3..row * 3 + 3].iter().map(|s| s.size[0]).sum();
                assert!((width - 1.0).abs() < EPS, "{layout:?} row {row} width {width}");
                let h = p.slots[row * 3].size[1];
                assert!(p.slots[row * 3..row * 3 + 3].iter().all(|s| (s.size[1] - h).abs() < EPS));
            }
            let height: f32 = p.row_heights().iter().sum();
            assert!((height - 1.0).abs() < EPS, "{layout:?} height {height}");
        }
    }

    #[test]
    fn test_small_corners_values() {
        let p = preset(GridLayout::SmallCorners);
        assert_eq!(p.slot(Anchor::TopLeft).unwrap().size, [0.05, 0.1]);
        assert_eq!(p.slot(Anchor::TopCenter).unwrap().size, [0.9, 0.1]);
        assert_eq!(p.slot(Anchor::CenterLeft).unwrap().size, [0.1, 0.8]);
        assert_eq!(p.slot(Anchor::Center).unwrap().size, [0.8, 0.8]);
        assert!(p.slot(Anchor::Auto).is_none());
    }

    #[test]
    fn test_horizontals_preset_rows() {
        let p = preset(GridLayout::SmallCornersUltraWideVerticalsHorizontals);
        assert_eq!(p.row_heights(), [0.25, 0.5, 0.25]);
        assert_eq!(p.slot(Anchor::Center).unwrap().size, [0.5, 0.5]);
    }
}
