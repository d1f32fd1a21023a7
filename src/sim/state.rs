//! Game state and core simulation types
//!
//! The whole world is three kinds of entity sharing one representation:
//! a single ball, a single paddle and a shrinking collection of blocks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Opaque RGBA color, only interpreted by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const RED: Color = Color([0xFF, 0x00, 0x00, 0xFF]);
    pub const GREEN: Color = Color([0x00, 0xFF, 0x00, 0xFF]);
    pub const BLUE: Color = Color([0x00, 0x00, 0xFF, 0xFF]);
    pub const YELLOW: Color = Color([0xFF, 0xFF, 0x00, 0xFF]);
    pub const ORANGE: Color = Color([0xFF, 0xA5, 0x00, 0xFF]);
    pub const WHITE: Color = Color([0xFF, 0xFF, 0xFF, 0xFF]);
    pub const BLACK: Color = Color([0x00, 0x00, 0x00, 0xFF]);

    /// Linear-light channels for an sRGB render target.
    ///
    /// The bytes are sRGB-encoded; the surface re-encodes on write, so
    /// they are decoded here to land on screen unchanged. Alpha is linear.
    pub fn to_linear(self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Block colors, assigned in order across the whole grid
pub const BLOCK_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::YELLOW, Color::ORANGE];

/// Outcome of a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    /// Every block destroyed
    Won,
    /// Ball fell past the arena floor
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Running
    }

    /// Line printed when the session ends
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::Running => None,
            GameStatus::Won => Some("You Win!"),
            GameStatus::Lost => Some("Game Over"),
        }
    }
}

/// A simulated rectangle: ball, paddle or block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub rect: Rect,
    /// Units per second; sign is direction
    pub vel: Vec2,
    pub color: Color,
}

impl Entity {
    pub fn new(rect: Rect, vel: Vec2, color: Color) -> Self {
        Self { rect, vel, color }
    }

    /// A stationary entity
    pub fn fixed(rect: Rect, color: Color) -> Self {
        Self::new(rect, Vec2::ZERO, color)
    }

    /// Advance position by velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.rect.translate(self.vel * dt);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub ball: Entity,
    pub paddle: Entity,
    /// Remaining blocks, in grid order (row by row, left to right)
    pub blocks: Vec<Entity>,
    pub status: GameStatus,
    /// Number of steps taken while running
    pub steps: u64,
}

impl GameState {
    /// Create the starting layout for the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self::with_blocks(tuning, generate_blocks(&tuning))
    }

    /// Starting ball and paddle with a custom block collection
    pub fn with_blocks(tuning: Tuning, blocks: Vec<Entity>) -> Self {
        Self {
            tuning,
            ball: spawn_ball(&tuning),
            paddle: spawn_paddle(&tuning),
            blocks,
            status: GameStatus::Running,
            steps: 0,
        }
    }
}

/// Ball centred in the arena, heading down-right
fn spawn_ball(tuning: &Tuning) -> Entity {
    let size = tuning.ball_size;
    let rect = Rect::new(
        tuning.arena_width / 2.0 - size / 2.0,
        tuning.arena_height / 2.0 - size / 2.0,
        size,
        size,
    );
    Entity::new(rect, Vec2::splat(tuning.ball_speed), Color::RED)
}

/// Paddle centred horizontally, resting just above the floor
fn spawn_paddle(tuning: &Tuning) -> Entity {
    let rect = Rect::new(
        tuning.arena_width / 2.0 - tuning.paddle_width / 2.0,
        tuning.arena_height - tuning.paddle_height - tuning.paddle_bottom_margin,
        tuning.paddle_width,
        tuning.paddle_height,
    );
    Entity::fixed(rect, Color::BLUE)
}

/// Lay out the block grid.
///
/// Rows start at `block_grid_top` and continue while the row origin is
/// above `block_grid_bottom`; columns start at x = 0 and continue while the
/// column origin is inside the arena, so the last column may overhang the
/// right wall. Colors cycle through [`BLOCK_COLORS`] across the whole grid.
pub fn generate_blocks(tuning: &Tuning) -> Vec<Entity> {
    let step_x = tuning.block_width + tuning.block_gap;
    let step_y = tuning.block_height + tuning.block_gap;

    let mut blocks = Vec::new();
    let mut color_index = 0;
    let mut y = tuning.block_grid_top;
    while y < tuning.block_grid_bottom {
        let mut x = 0.0;
        while x < tuning.arena_width {
            let rect = Rect::new(x, y, tuning.block_width, tuning.block_height);
            blocks.push(Entity::fixed(rect, BLOCK_COLORS[color_index]));
            color_index = (color_index + 1) % BLOCK_COLORS.len();
            x += step_x;
        }
        y += step_y;
    }

    log::debug!("Generated {} blocks", blocks.len());
    blocks
}
