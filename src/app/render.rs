//! Immediate-mode drawing of a navigation tree.
//!
//! The tree only carries sizes, skins, fills and highlight states; this
//! module turns them into rectangles with a simple flow layout (children
//! left to right, wrapping when a row is full) and paints them with egui.

use super::theme;
use eframe::egui::{
    self, Align2, Color32, FontId, Id, LayerId, Order, Pos2, Rect, Sense, Stroke, StrokeKind, Ui,
    pos2, vec2,
};
use egui_phosphor::regular as icons;
use padnav::nav::{HierarchyTag, Highlight, NavTree, NodeId, TabLocation, WidgetView};
use padnav::ModalOverlay;

const GAP: f32 = 3.0;
const TAB_STRIP: f32 = 26.0;
const FONT_SIZE: f32 = 15.0;
/// Rows of a scrolling grid shown at once
const VISIBLE_ROWS: f32 = 2.0;

/// Where a node landed this frame.
pub struct Placed {
    pub id: NodeId,
    pub rect: Rect,
    pub clip: Rect,
}

/// What the pointer did over the tree this frame.
#[derive(Default)]
pub struct PointerInput {
    pub hovered: Option<NodeId>,
    pub clicked: Option<NodeId>,
}

pub fn layout(tree: &NavTree, area: Rect) -> Vec<Placed> {
    let mut out = Vec::new();
    place(tree, tree.root(), area, area, &mut out);
    out
}

/// Fractions <= 1 scale with the parent; larger values are points.
fn extent(size: f32, total: f32, auto: f32) -> f32 {
    if size <= 0.0 {
        auto * total
    } else if size <= 1.0 {
        size * total
    } else {
        size
    }
}

fn place(tree: &NavTree, id: NodeId, rect: Rect, clip: Rect, out: &mut Vec<Placed>) {
    let Some(node) = tree.get(id) else {
        return;
    };
    if !node.visible() {
        return;
    }
    out.push(Placed { id, rect, clip });
    let clip = clip.intersect(rect);

    let mut inner = rect;
    if let Some(set) = tree.tab_set(id) {
        match set.location() {
            TabLocation::Top => inner.min.y += TAB_STRIP,
            TabLocation::Bottom => inner.max.y -= TAB_STRIP,
            TabLocation::Invisible => {}
        }
        // pages share the whole area, only the active one is visible
        for page in node.children() {
            place(tree, *page, inner, clip, out);
        }
        return;
    }

    let (content_height, offset) = match tree.grid(id).and_then(|g| g.scrollbar().map(|b| (g, b))) {
        Some((grid, bar)) => {
            let height = inner.height() * (grid.row_count() as f32 / VISIBLE_ROWS).max(1.0);
            (height, bar.value * height)
        }
        None => (inner.height(), 0.0),
    };

    let children = node.children();
    let auto = 1.0 / children.len().max(1) as f32;
    let (mut x, mut y, mut line) = (0.0_f32, 0.0_f32, 0.0_f32);
    for child in children {
        let Some(child_node) = tree.get(*child) else {
            continue;
        };
        let w = extent(child_node.size[0], inner.width(), 1.0);
        let h = extent(child_node.size[1], content_height, auto);
        if x > 0.0 && x + w > inner.width() + 0.5 {
            x = 0.0;
            y += line;
            line = 0.0;
        }
        let child_rect = Rect::from_min_size(
            pos2(inner.min.x + x, inner.min.y + y - offset),
            vec2(w, h),
        );
        place(tree, *child, child_rect.shrink(GAP), clip, out);
        x += w;
        line = line.max(h);
    }
}

pub fn paint(ui: &Ui, tree: &NavTree, placed: &[Placed]) {
    let mut overlays = Vec::new();
    for item in placed {
        let Some(node) = tree.get(item.id) else {
            continue;
        };
        let painter = ui.painter().with_clip_rect(item.clip);
        let rect = item.rect;
        let is_content = node.tag() == HierarchyTag::PanelContent;

        let fill = theme::color32(node.fill);
        if fill.a() > 0 {
            let strength = if is_content { 0.22 } else { 0.08 };
            painter.rect_filled(rect, 4.0, fill.gamma_multiply(strength));
        }
        if let Some(stroke) = theme::skin_stroke(node.skin) {
            painter.rect_stroke(rect, 4.0, stroke, StrokeKind::Inside);
        }
        match node.highlight {
            Highlight::Hovered => {
                painter.rect_stroke(rect.expand(2.0), 6, theme::focus_stroke(), StrokeKind::Outside);
            }
            Highlight::Pressed => {
                painter.rect_filled(rect, 4.0, theme::ACCENT.gamma_multiply(0.45));
            }
            Highlight::None => {}
        }

        if let Some(set) = tree.tab_set(item.id) {
            paint_tab_strip(&painter, rect, set.titles(), set.active(), set.location());
        }
        if let Some(bar) = tree.grid(item.id).and_then(|g| g.scrollbar()) {
            paint_scrollbar(&painter, rect, bar.value, bar.max.unwrap_or(0.0));
        }

        let text_color = if node.suspended() || !node.enabled() {
            theme::TEXT_MUTED
        } else {
            theme::TEXT_PRIMARY
        };
        if let Some(view) = node.view() {
            if let WidgetView::DropDown { items, selected, open: true } = &view {
                overlays.push((rect, items.clone(), *selected));
            }
            paint_view(&painter, rect, &view, text_color);
        }
    }

    let painter = ui
        .ctx()
        .layer_painter(LayerId::new(Order::Foreground, Id::new("padnav dropdowns")));
    for (rect, items, selected) in overlays {
        paint_dropdown_list(&painter, rect, &items, selected);
    }
}

fn text(painter: &egui::Painter, pos: Pos2, align: Align2, text: impl ToString, color: Color32) {
    painter.text(pos, align, text, FontId::proportional(FONT_SIZE), color);
}

fn paint_view(painter: &egui::Painter, rect: Rect, view: &WidgetView, color: Color32) {
    let left = pos2(rect.min.x + 8.0, rect.center().y);
    match view {
        WidgetView::Label(label) => text(painter, rect.center(), Align2::CENTER_CENTER, label, color),
        WidgetView::Button { label } => {
            text(painter, rect.center(), Align2::CENTER_CENTER, label, color)
        }
        WidgetView::CheckBox { label, checked } => {
            let icon = if *checked { icons::CHECK_SQUARE } else { icons::SQUARE };
            text(painter, left, Align2::LEFT_CENTER, format!("{icon}  {label}"), color);
        }
        WidgetView::RadioButton { label, checked } => {
            let icon = if *checked { icons::RADIO_BUTTON } else { icons::CIRCLE };
            text(painter, left, Align2::LEFT_CENTER, format!("{icon}  {label}"), color);
        }
        WidgetView::Slider { label, value, min, max } => {
            text(painter, left, Align2::LEFT_CENTER, format!("{label}: {value}"), color);
            let track = Rect::from_min_max(
                pos2(rect.center().x, rect.center().y - 2.0),
                pos2(rect.max.x - 10.0, rect.center().y + 2.0),
            );
            painter.rect_filled(track, 2.0, theme::BG_LIGHT);
            let span = (max - min).max(1) as f32;
            let t = (value - min) as f32 / span;
            let knob = pos2(track.min.x + t * track.width(), track.center().y);
            painter.circle_filled(knob, 6.0, theme::ACCENT);
        }
        WidgetView::List {
            items,
            locked,
            selected,
            first_visible,
            visible_rows,
        } => {
            let row_height = rect.height() / (*visible_rows).max(1) as f32;
            let rows = items.iter().enumerate().skip(*first_visible).take(*visible_rows);
            for (row, (index, item)) in rows.enumerate() {
                let row_rect = Rect::from_min_size(
                    pos2(rect.min.x, rect.min.y + row as f32 * row_height),
                    vec2(rect.width(), row_height),
                );
                if *selected == Some(index) {
                    painter.rect_filled(row_rect.shrink(1.0), 3.0, theme::ACCENT.gamma_multiply(0.35));
                }
                let label = if locked.contains(&index) {
                    format!("{}  {item}", icons::LOCK)
                } else {
                    item.clone()
                };
                let row_color = if locked.contains(&index) { theme::TEXT_MUTED } else { color };
                text(
                    painter,
                    pos2(row_rect.min.x + 8.0, row_rect.center().y),
                    Align2::LEFT_CENTER,
                    label,
                    row_color,
                );
            }
        }
        WidgetView::DropDown { items, selected, open } => {
            let current = selected
                .and_then(|i| items.get(i))
                .map(String::as_str)
                .unwrap_or("-");
            text(painter, left, Align2::LEFT_CENTER, current, color);
            let caret = if *open { icons::CARET_UP } else { icons::CARET_DOWN };
            text(
                painter,
                pos2(rect.max.x - 8.0, rect.center().y),
                Align2::RIGHT_CENTER,
                caret,
                color,
            );
        }
    }
}

fn paint_dropdown_list(painter: &egui::Painter, anchor: Rect, items: &[String], selected: Option<usize>) {
    let row_height = FONT_SIZE + 10.0;
    let list = Rect::from_min_size(
        pos2(anchor.min.x, anchor.max.y + 2.0),
        vec2(anchor.width(), row_height * items.len() as f32),
    );
    painter.rect_filled(list, 4.0, theme::BG_MID);
    painter.rect_stroke(list, 4.0, Stroke::new(1.0, theme::BG_LIGHT), StrokeKind::Inside);
    for (i, item) in items.iter().enumerate() {
        let row = Rect::from_min_size(
            pos2(list.min.x, list.min.y + i as f32 * row_height),
            vec2(list.width(), row_height),
        );
        if selected == Some(i) {
            painter.rect_filled(row.shrink(1.0), 3.0, theme::ACCENT.gamma_multiply(0.35));
        }
        text(
            painter,
            pos2(row.min.x + 8.0, row.center().y),
            Align2::LEFT_CENTER,
            item,
            theme::TEXT_PRIMARY,
        );
    }
}

fn paint_tab_strip(
    painter: &egui::Painter,
    rect: Rect,
    titles: &[String],
    active: usize,
    location: TabLocation,
) {
    let strip = match location {
        TabLocation::Top => Rect::from_min_size(rect.min, vec2(rect.width(), TAB_STRIP)),
        TabLocation::Bottom => Rect::from_min_max(pos2(rect.min.x, rect.max.y - TAB_STRIP), rect.max),
        TabLocation::Invisible => return,
    };
    let width = strip.width() / titles.len().max(1) as f32;
    for (i, title) in titles.iter().enumerate() {
        let tab = Rect::from_min_size(pos2(strip.min.x + i as f32 * width, strip.min.y), vec2(width, TAB_STRIP))
            .shrink(2.0);
        let (fill, color) = if i == active {
            (theme::ACCENT.gamma_multiply(0.35), theme::TEXT_PRIMARY)
        } else {
            (theme::BG_MID, theme::TEXT_MUTED)
        };
        painter.rect_filled(tab, 4.0, fill);
        text(painter, tab.center(), Align2::CENTER_CENTER, title, color);
    }
}

fn paint_scrollbar(painter: &egui::Painter, rect: Rect, value: f32, max: f32) {
    if max <= 0.0 {
        return;
    }
    let track = Rect::from_min_max(pos2(rect.max.x - 4.0, rect.min.y), rect.max);
    painter.rect_filled(track, 2.0, theme::BG_LIGHT);
    let visible = 1.0 / (1.0 + max);
    let thumb_height = track.height() * visible;
    let top = track.min.y + (value / max) * (track.height() - thumb_height);
    let thumb = Rect::from_min_size(pos2(track.min.x, top), vec2(track.width(), thumb_height));
    painter.rect_filled(thumb, 2.0, theme::ACCENT);
}

/// Hover and click over content nodes the machine has not suspended.
pub fn pointer(ui: &Ui, tree: &NavTree, placed: &[Placed]) -> PointerInput {
    let mut input = PointerInput::default();
    for item in placed {
        let interactive = tree
            .get(item.id)
            .is_some_and(|n| n.tag() == HierarchyTag::PanelContent && n.pointer_interactive());
        if !interactive {
            continue;
        }
        let rect = item.rect.intersect(item.clip);
        if !rect.is_positive() {
            continue;
        }
        let response = ui.interact(rect, Id::new(("padnav node", item.id.index())), Sense::click());
        if response.hovered() {
            input.hovered = Some(item.id);
        }
        if response.clicked() {
            input.clicked = Some(item.id);
        }
    }
    input
}

/// Centered overlay for the confirmation modal.
pub fn paint_modal(ctx: &egui::Context, modal: &ModalOverlay) {
    if !modal.is_active() {
        return;
    }
    let screen = ctx.screen_rect();
    ctx.layer_painter(LayerId::new(Order::Middle, Id::new("padnav modal dim")))
        .rect_filled(screen, 0.0, Color32::from_black_alpha(160));

    egui::Area::new(Id::new("padnav modal"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::BG_MID)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.heading(modal.header());
                    if !modal.message().is_empty() {
                        ui.label(modal.message());
                    }
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        for (i, label) in modal.labels().enumerate() {
                            let highlighted = modal.highlighted() == Some(i);
                            let text = egui::RichText::new(label).size(FONT_SIZE);
                            let button = egui::Button::new(text).stroke(if highlighted {
                                theme::focus_stroke()
                            } else {
                                Stroke::new(1.0, theme::BG_LIGHT)
                            });
                            ui.add(button);
                        }
                    });
                });
        });
}
