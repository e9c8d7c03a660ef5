// Physical gamepads read through evdev (I/O: enumeration, fetch_events)

use crate::input::pure::{AxisRange, map_hat, map_key_to_button};
use crate::input::types::{ButtonSet, PadSource, RawPadState, Stick};
use evdev::{AbsoluteAxisCode, Device, EventSummary, KeyCode};
use tracing::{info, warn};

const MAX_EVENTS_PER_POLL: usize = 256;

/// A gamepad event device. Button and axis state persists between polls
/// since evdev only reports changes.
pub struct EvdevPad {
    path: String,
    dev: Device,
    enabled: bool,
    range: AxisRange,
    buttons: ButtonSet,
    hat: [i32; 2],
    left: [i32; 2],
    right: [i32; 2],
}

impl EvdevPad {
    pub fn new(path: String, dev: Device, range: AxisRange) -> Self {
        Self {
            path,
            dev,
            enabled: true,
            range,
            buttons: ButtonSet::EMPTY,
            hat: [0, 0],
            left: [0, 0],
            right: [0, 0],
        }
    }

    pub fn name(&self) -> &str {
        self.dev.name().unwrap_or("")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn snapshot(&self) -> RawPadState {
        let mut buttons = self.buttons;
        if let Some(b) = map_hat(false, self.hat[0]) {
            buttons.insert(b);
        }
        if let Some(b) = map_hat(true, self.hat[1]) {
            buttons.insert(b);
        }
        // evdev Y axes grow downward
        RawPadState {
            buttons,
            left_stick: Stick::new(
                self.range.normalize(self.left[0]),
                -self.range.normalize(self.left[1]),
            ),
            right_stick: Stick::new(
                self.range.normalize(self.right[0]),
                -self.range.normalize(self.right[1]),
            ),
        }
    }
}

impl PadSource for EvdevPad {
    fn poll(&mut self) -> RawPadState {
        if !self.enabled {
            return RawPadState::default();
        }

        let mut flooded = false;
        match self.dev.fetch_events() {
            Ok(events) => {
                for (count, event) in events.enumerate() {
                    if count >= MAX_EVENTS_PER_POLL {
                        flooded = true;
                        break;
                    }
                    match event.destructure() {
                        EventSummary::Key(_, code, value) => {
                            if let Some(button) = map_key_to_button(code) {
                                self.buttons.set(button, value != 0);
                            }
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, v) => self.hat[0] = v,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, v) => self.hat[1] = v,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, v) => self.left[0] = v,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, v) => self.left[1] = v,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_RX, v) => self.right[0] = v,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_RY, v) => self.right[1] = v,
                        _ => {}
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
            Err(e) => {
                warn!(path = %self.path, error = %e, "pad read failed, disabling");
                self.enabled = false;
            }
        }

        if flooded {
            warn!(path = %self.path, "exceeded max events per poll, disabling");
            self.enabled = false;
        }

        self.snapshot()
    }
}

/// Open every evdev device that looks like a gamepad, in non-blocking mode.
pub fn scan_pads() -> Vec<EvdevPad> {
    let mut pads = Vec::new();
    for (path, dev) in evdev::enumerate() {
        let is_pad = dev
            .supported_keys()
            .is_some_and(|keys| keys.contains(KeyCode::BTN_SOUTH));
        if !is_pad {
            continue;
        }
        if dev.set_nonblocking(true).is_err() {
            warn!(path = %path.display(), "failed to set non-blocking mode");
            continue;
        }

        let range = match dev.get_abs_state() {
            Ok(abs_info) => abs_info
                .get(AbsoluteAxisCode::ABS_X.0 as usize)
                .filter(|x| x.maximum > x.minimum)
                .map(|x| AxisRange {
                    minimum: x.minimum,
                    maximum: x.maximum,
                })
                .unwrap_or_default(),
            Err(_) => AxisRange::default(),
        };

        info!(
            path = %path.display(),
            name = dev.name().unwrap_or(""),
            min = range.minimum,
            max = range.maximum,
            "found gamepad"
        );
        pads.push(EvdevPad::new(path.display().to_string(), dev, range));
    }
    pads
}
