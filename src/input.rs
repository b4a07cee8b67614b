//! Per-tick input snapshot
//!
//! All input the simulation consumes is sampled exactly once at the start
//! of the tick it affects. Scenes receive the immutable snapshot instead of
//! polling the window themselves, which keeps updates deterministic and
//! testable. The `*_pressed` fields are edges: true only on the tick the
//! key or button transitions from up to down, never while held.

use macroquad::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Held directional keys.
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Primary-action (left mouse button) press edge.
    pub attack_pressed: bool,
    /// Menu confirm edge (Enter, Space, or click).
    pub confirm_pressed: bool,
    /// Menu back / pause edge (Escape).
    pub back_pressed: bool,
    /// Cursor position in virtual-screen coordinates.
    pub cursor: Vec2,
}

impl InputFrame {
    /// Sample the current window input. `scale` maps window pixels back to
    /// the virtual resolution the simulation works in.
    pub fn poll(scale: f32) -> Self {
        let (mouse_x, mouse_y) = mouse_position();
        let clicked = is_mouse_button_pressed(MouseButton::Left);

        Self {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            attack_pressed: clicked,
            confirm_pressed: is_key_pressed(KeyCode::Enter)
                || is_key_pressed(KeyCode::Space)
                || clicked,
            back_pressed: is_key_pressed(KeyCode::Escape),
            cursor: vec2(mouse_x / scale, mouse_y / scale),
        }
    }
}
