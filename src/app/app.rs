// Demo app: polls pads and keyboard, ticks the navigator, paints the active screen

use super::keyboard::read_keyboard;
use super::render::{self, PointerInput};
use super::scene::{self, BACK, QUIT, SETTINGS};
use eframe::egui;
use padnav::input::{EvdevPad, scan_pads};
use padnav::nav::{GridLayout, NavEvent, NodeId, ScreenId, SelectionDimension};
use padnav::{Button, ModalOption, NavConfig, Navigator, PadSource, RawPadState, VirtualPad};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct DemoApp {
    nav: Navigator,
    main_screen: ScreenId,
    settings_screen: ScreenId,
    pads: Vec<EvdevPad>,
    keyboard: VirtualPad,
    last_frame: Instant,
    hovered: Option<NodeId>,
    quit: Rc<Cell<bool>>,
}

impl DemoApp {
    pub fn new(
        config: NavConfig,
        layout: GridLayout,
        dimension: SelectionDimension,
    ) -> padnav::Result<Self> {
        let mut nav = Navigator::new(config.clone());
        let main_screen = nav.add_screen(scene::main_screen(&config, layout, dimension)?);
        let settings_screen = nav.add_screen(scene::settings_screen(&config)?);
        nav.start_panel_selection(main_screen)?;

        let pads = scan_pads();
        for pad in &pads {
            info!(name = pad.name(), path = %pad.path(), "gamepad");
        }
        if pads.is_empty() {
            info!("no gamepads found, keyboard only");
        }

        Ok(Self {
            nav,
            main_screen,
            settings_screen,
            pads,
            keyboard: VirtualPad::new(),
            last_frame: Instant::now(),
            hovered: None,
            quit: Rc::new(Cell::new(false)),
        })
    }

    fn poll(&mut self) -> RawPadState {
        let keyboard = self.keyboard.state();
        self.pads
            .iter_mut()
            .filter(|pad| pad.enabled())
            .fold(keyboard, |raw, pad| raw.merge(pad.poll()))
    }

    fn switch_to(&mut self, screen: ScreenId) {
        self.hovered = None;
        if let Err(err) = self.nav.start_panel_selection(screen) {
            warn!(%err, "failed to switch screens");
        }
    }

    fn confirm_quit(&mut self) {
        let quit = self.quit.clone();
        self.nav.show_modal(
            "Quit?",
            "Close the padnav demo",
            vec![
                ModalOption::new("Yes", move || quit.set(true)),
                ModalOption::close("No"),
            ],
        );
    }

    /// Menu cycles the root layout of the active screen.
    fn cycle_layout(&mut self) {
        if !self.nav.input().pressed(Button::Menu) || self.nav.modal().is_active() {
            return;
        }
        let Some(screen) = self.nav.active_screen() else {
            return;
        };
        let Ok(tree) = self.nav.screen_mut(screen) else {
            return;
        };
        let root = tree.root();
        let current = tree
            .root_grid()
            .and_then(|grid| grid.layout())
            .unwrap_or_default();
        let position = GridLayout::ALL
            .iter()
            .position(|layout| *layout == current)
            .unwrap_or(0);
        let next = GridLayout::ALL[(position + 1) % GridLayout::ALL.len()];
        if let Err(err) = tree.set_grid_layout(root, next) {
            warn!(%err, "layout switch failed");
        }
    }

    fn handle_events(&mut self, ctx: &egui::Context, events: Vec<NavEvent>) {
        for event in events {
            match event {
                NavEvent::ContentClicked { identifier, .. } => match identifier.as_str() {
                    SETTINGS => self.switch_to(self.settings_screen),
                    BACK => self.switch_to(self.main_screen),
                    QUIT => self.confirm_quit(),
                    _ => {}
                },
                NavEvent::LayoutChanged { layout, .. } => info!(layout = layout.name(), "layout"),
                NavEvent::ModalConfirmed { label, .. } => info!(%label, "modal answered"),
                other => debug!(?other, "event"),
            }
        }
        if self.quit.get() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn apply_pointer(&mut self, pointer: PointerInput) {
        if self.nav.modal().is_active() {
            return;
        }
        let Some(screen) = self.nav.active_screen() else {
            return;
        };
        let Ok(tree) = self.nav.screen_mut(screen) else {
            return;
        };
        if pointer.hovered != self.hovered {
            if let Some(old) = self.hovered {
                tree.pointer_hover(old, false);
            }
            if let Some(new) = pointer.hovered {
                tree.pointer_hover(new, true);
            }
            self.hovered = pointer.hovered;
        } else if let Some(id) = pointer.hovered {
            tree.pointer_hover(id, true);
        }
        if let Some(id) = pointer.clicked {
            tree.pointer_click(id);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        read_keyboard(ctx, &mut self.keyboard);
        let raw = self.poll();
        let events = self.nav.update_with(raw, delta);
        self.cycle_layout();
        self.handle_events(ctx, events);

        let nav = &self.nav;
        let pointer = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| {
                let Some(tree) = nav.active_tree() else {
                    return PointerInput::default();
                };
                let area = ui.available_rect_before_wrap();
                let placed = render::layout(tree, area);
                render::paint(ui, tree, &placed);
                render::pointer(ui, tree, &placed)
            })
            .inner;
        self.apply_pointer(pointer);

        render::paint_modal(ctx, self.nav.modal());

        // pads are polled, not event driven
        ctx.request_repaint();
    }
}
