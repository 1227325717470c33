//! Keyboard input
//!
//! Physical keys map onto four logical buttons. Key-down latches the button,
//! key-up releases it; the frame loop only ever reads the flags.

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Left,
    Down,
    Right,
}

impl Button {
    /// Map a legacy `KeyboardEvent.keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            38 | 87 => Some(Button::Up),    // up, w
            37 | 65 => Some(Button::Left),  // left, a
            40 | 83 => Some(Button::Down),  // down, s
            39 | 68 => Some(Button::Right), // right, d
            _ => None,
        }
    }

    /// Map a `KeyboardEvent.key` name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Button::Up),
            "ArrowLeft" | "a" | "A" => Some(Button::Left),
            "ArrowDown" | "s" | "S" => Some(Button::Down),
            "ArrowRight" | "d" | "D" => Some(Button::Right),
            _ => None,
        }
    }
}

/// Held state of every logical button
///
/// `up` and `down` are tracked but no game rule reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, button: Button, held: bool) {
        match button {
            Button::Up => self.up = held,
            Button::Left => self.left = held,
            Button::Down => self.down = held,
            Button::Right => self.right = held,
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Left => self.left,
            Button::Down => self.down,
            Button::Right => self.right,
        }
    }

    /// Apply a key event. Returns false if the key isn't bound.
    pub fn apply_key(&mut self, key: &str, key_code: u32, held: bool) -> bool {
        match Button::from_key(key).or_else(|| Button::from_key_code(key_code)) {
            Some(button) => {
                self.set(button, held);
                true
            }
            None => false,
        }
    }
}
