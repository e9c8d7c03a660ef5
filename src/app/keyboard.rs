// Keyboard stand-in for a gamepad, written into a VirtualPad each frame

use eframe::egui::{self, Key};
use padnav::{Button, VirtualPad};

const KEY_MAP: [(Key, Button); 12] = [
    (Key::ArrowUp, Button::Up),
    (Key::ArrowDown, Button::Down),
    (Key::ArrowLeft, Button::Left),
    (Key::ArrowRight, Button::Right),
    (Key::Enter, Button::Confirm),
    (Key::Space, Button::Confirm),
    (Key::Escape, Button::Cancel),
    (Key::Backspace, Button::Cancel),
    (Key::Q, Button::TabPrev),
    (Key::E, Button::TabNext),
    (Key::R, Button::Reset),
    (Key::Tab, Button::Menu),
];

pub fn read_keyboard(ctx: &egui::Context, pad: &mut VirtualPad) {
    ctx.input(|input| {
        for button in Button::ALL {
            let down = KEY_MAP
                .iter()
                .any(|(key, mapped)| *mapped == button && input.key_down(*key));
            pad.set(button, down);
        }
    });
}
