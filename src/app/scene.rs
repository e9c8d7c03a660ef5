// The two demo screens: a greeter and a tabbed settings page

use padnav::composite::BarOrientation;
use padnav::nav::{Anchor, GridLayout, NavTree, SelectionDimension, TabLocation};
use padnav::widgets::{Button, CheckBox, DropDown, RadioButton, SelectList, Slider};
use padnav::{NavConfig, Result};
use tracing::info;

pub const SETTINGS: &str = "Settings";
pub const QUIT: &str = "Quit";
pub const BACK: &str = "Back";

/// Nested 3x3 grid in the center slot with a greeter in its first panel,
/// a title on top and a button bar at the bottom.
pub fn main_screen(
    config: &NavConfig,
    layout: GridLayout,
    dimension: SelectionDimension,
) -> Result<NavTree> {
    let mut tree = NavTree::new(config, layout, dimension);
    let root = tree.root();

    let top = tree.grid_panel(root, Anchor::TopCenter)?;
    tree.add_label(top, "padnav")?;

    let center = tree.grid_panel(root, Anchor::Center)?;
    let inner = tree.add_panel_grid(center, "greeter", 9)?;
    let panels = tree.panels(inner);
    tree.add_label(panels[0], "Greetings")?;
    tree.add_content(
        panels[0],
        "Say Hello",
        Button::new("Say Hello").on_click(|| info!("hello")),
    )?;
    tree.add_content(
        panels[0],
        "Say Cya",
        Button::new("Say Cya").on_click(|| info!("see you")),
    )?;
    for (i, panel) in panels.iter().enumerate().skip(1) {
        tree.add_label(*panel, format!("Slot {i}"))?;
    }

    let bottom = tree.grid_panel(root, Anchor::BottomCenter)?;
    tree.add_button_bar(
        bottom,
        "main actions",
        BarOrientation::Horizontal,
        vec![Button::new(SETTINGS), Button::new(QUIT)],
    )?;

    tree.hide_empty_slots(root)?;
    Ok(tree)
}

/// Tab switcher with a video page and a library page.
pub fn settings_screen(config: &NavConfig) -> Result<NavTree> {
    let mut tree = NavTree::new(config, GridLayout::Default, SelectionDimension::Deep);
    let root = tree.root();

    let top = tree.grid_panel(root, Anchor::TopCenter)?;
    tree.add_label(top, SETTINGS)?;

    let center = tree.grid_panel(root, Anchor::Center)?;
    let tabs = tree.add_tabs(center, "settings tabs", TabLocation::Top)?;

    let video = tree.add_tab_page(tabs, "Video", 3)?;
    let panels = tree.panels(video);
    tree.add_dropdown_panel(
        panels[0],
        "display",
        vec![
            (
                "Resolution".to_owned(),
                DropDown::new(
                    SelectList::new(["1280x720", "1920x1080", "2560x1440"])
                        .on_change(|index| info!(?index, "resolution")),
                ),
            ),
            (
                "Window".to_owned(),
                DropDown::new(SelectList::new(["Windowed", "Borderless", "Fullscreen"])),
            ),
        ],
    )?;
    tree.add_content(
        panels[1],
        "Vsync",
        CheckBox::new("Vsync", true).on_change(|on| info!(on, "vsync")),
    )?;
    tree.add_content(
        panels[1],
        "Brightness",
        Slider::new("Brightness", 0, 10, 5).on_change(|value| info!(value, "brightness")),
    )?;
    for (label, checked) in [("Low", false), ("Medium", true), ("High", false)] {
        tree.add_content(panels[2], label, RadioButton::new(label, "quality", checked))?;
    }

    let library = tree.add_tab_page(tabs, "Library", 3)?;
    let panels = tree.panels(library);
    tree.add_select_list_panel(
        panels[1],
        "games",
        "Games",
        SelectList::new([
            "Arcade Racer",
            "Block Builder",
            "Cave Story",
            "Dungeon Crawl",
            "Extra Life",
            "Final Lap",
            "Garden Party",
            "Haunted Manor",
            "Island Hop",
            "Jetpack Joyride",
        ])
        .with_locked([3])
        .with_visible_rows(6)
        .on_change(|index| info!(?index, "game picked")),
    )?;

    let bottom = tree.grid_panel(root, Anchor::BottomCenter)?;
    tree.add_button_bar(
        bottom,
        "settings actions",
        BarOrientation::Horizontal,
        vec![Button::new(BACK)],
    )?;

    tree.hide_empty_slots(root)?;
    Ok(tree)
}
