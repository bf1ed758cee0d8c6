//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 8] = [
    KeyCode::S,
    KeyCode::A,
    KeyCode::P,
    KeyCode::R,
    KeyCode::D,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::F1,
];

pub fn capture_frame_input() -> Vec<KeyCode> {
    let mut keys_pressed = Vec::with_capacity(ACTION_KEYS.len());
    for key in ACTION_KEYS {
        if is_key_pressed(key) {
            keys_pressed.push(key);
        }
    }
    keys_pressed
}
