//! Keyboard input to paddle intent
//!
//! The input layer only ever writes the paddle's horizontal velocity; the
//! simulation step owns everything else.

use winit::keyboard::KeyCode;

use crate::sim::Entity;

/// Key bound to "move paddle left"
pub const KEY_LEFT: KeyCode = KeyCode::KeyA;
/// Key bound to "move paddle right"
pub const KEY_RIGHT: KeyCode = KeyCode::KeyD;

/// Held state of the two paddle keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Record a key press/release. Returns false for keys we don't bind.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match code {
            KEY_LEFT => self.left = pressed,
            KEY_RIGHT => self.right = pressed,
            _ => return false,
        }
        true
    }

    /// Paddle velocity for the current keys. Right wins when both are held.
    pub fn paddle_velocity(&self, paddle_speed: f32) -> f32 {
        let mut vx = 0.0;
        if self.left {
            vx = -paddle_speed;
        }
        if self.right {
            vx = paddle_speed;
        }
        vx
    }

    /// Set the paddle's horizontal velocity from the held keys
    pub fn apply(&self, paddle: &mut Entity, paddle_speed: f32) {
        paddle.vel.x = self.paddle_velocity(paddle_speed);
    }
}
