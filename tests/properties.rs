use padnav::nav::pure::{ROW_LEN, cycle_index, step_panel_index};
use padnav::nav::{Anchor, Direction, GridLayout, NavTree, SelectionDimension, SelectionMode, TabLocation};
use padnav::{Button, NavConfig, Navigator, VirtualPad};
use proptest::prelude::*;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Cursor math
// ---------------------------------------------------------------------------

fn grid_and_index() -> impl Strategy<Value = (usize, usize)> {
    (1usize..6).prop_flat_map(|rows| {
        let count = rows * ROW_LEN;
        (Just(count), 0..count)
    })
}

proptest! {
    #[test]
    fn horizontal_steps_stay_in_row((count, index) in grid_and_index()) {
        let mut cursor = index;
        for _ in 0..ROW_LEN {
            cursor = step_panel_index(cursor, count, Direction::Right);
            prop_assert_eq!(cursor / ROW_LEN, index / ROW_LEN);
        }
        prop_assert_eq!(cursor, index);
    }

    #[test]
    fn vertical_steps_stay_in_column((count, index) in grid_and_index()) {
        let rows = count / ROW_LEN;
        let mut cursor = index;
        for _ in 0..rows {
            cursor = step_panel_index(cursor, count, Direction::Down);
            prop_assert_eq!(cursor % ROW_LEN, index % ROW_LEN);
        }
        prop_assert_eq!(cursor, index);
    }

    #[test]
    fn opposite_steps_cancel((count, index) in grid_and_index()) {
        let left = step_panel_index(index, count, Direction::Left);
        prop_assert_eq!(step_panel_index(left, count, Direction::Right), index);
        let up = step_panel_index(index, count, Direction::Up);
        prop_assert_eq!(step_panel_index(up, count, Direction::Down), index);
    }

    #[test]
    fn content_cursor_cycles(len in 1usize..20, start in 0usize..20) {
        let start = start % len;
        let mut cursor = start;
        for _ in 0..len {
            cursor = cycle_index(cursor, len, Direction::Down);
            prop_assert!(cursor < len);
        }
        prop_assert_eq!(cursor, start);

        let back = cycle_index(start, len, Direction::Up);
        prop_assert_eq!(cycle_index(back, len, Direction::Down), start);
    }
}

// ---------------------------------------------------------------------------
// Random input against a full screen
// ---------------------------------------------------------------------------

fn screen() -> NavTree {
    let cfg = NavConfig::default();
    let mut tree = NavTree::new(&cfg, GridLayout::SmallCorners, SelectionDimension::Deep);
    let root = tree.root();

    let center = tree.grid_panel(root, Anchor::Center).unwrap();
    let inner = tree.add_panel_grid(center, "inner", 9).unwrap();
    let first = tree.panels(inner)[0];
    tree.add_label(first, "Greetings").unwrap();
    for label in ["Say Hello", "Say Cya"] {
        tree.add_content(first, label, padnav::widgets::Button::new(label))
            .unwrap();
    }

    let left = tree.grid_panel(root, Anchor::CenterLeft).unwrap();
    let tabs = tree.add_tabs(left, "tabs", TabLocation::Top).unwrap();
    let video = tree.add_tab_page(tabs, "Video", 6).unwrap();
    tree.add_tab_page(tabs, "Audio", 3).unwrap();
    let panel = tree.panels(video)[1];
    tree.add_content(panel, "Volume", padnav::widgets::Slider::new("Volume", 0, 10, 3))
        .unwrap();

    let bottom = tree.grid_panel(root, Anchor::BottomCenter).unwrap();
    tree.add_button_bar(
        bottom,
        "bar",
        padnav::composite::BarOrientation::Horizontal,
        vec![
            padnav::widgets::Button::new("Back"),
            padnav::widgets::Button::new("Apply"),
        ],
    )
    .unwrap();
    tree
}

fn any_button() -> impl Strategy<Value = Button> {
    prop_oneof![
        Just(Button::Up),
        Just(Button::Down),
        Just(Button::Left),
        Just(Button::Right),
        Just(Button::Confirm),
        Just(Button::Cancel),
        Just(Button::TabNext),
        Just(Button::TabPrev),
        Just(Button::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exactly_one_grid_holds_the_lock(
        taps in proptest::collection::vec((any_button(), 0u64..150), 1..60)
    ) {
        let mut nav = Navigator::new(NavConfig::default());
        let id = nav.add_screen(screen());
        nav.start_panel_selection(id).unwrap();
        let mut pad = VirtualPad::new();

        for (button, wait) in taps {
            pad.press(button);
            nav.update(&mut pad, Duration::from_millis(16));
            pad.release(button);
            nav.update(&mut pad, Duration::from_millis(16 + wait));

            let tree = nav.screen(id).unwrap();
            prop_assert_eq!(tree.unlocked_grids().len(), 1);
            for node in tree.nodes() {
                let Some(grid) = tree.grid(node.id()) else {
                    continue;
                };
                if grid.mode() == SelectionMode::PanelContent {
                    prop_assert!(grid.content_index() < grid.selectable().len());
                }
            }
        }
    }
}
