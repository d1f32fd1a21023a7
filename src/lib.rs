//! Breakout - a ball, a paddle and a wall of blocks
//!
//! Core modules:
//! - `sim`: Simulation (entities, AABB collisions, step, win/loss status)
//! - `input`: Keyboard state to paddle velocity
//! - `frame`: Frame pacing, FPS measurement and the per-frame session
//! - `renderer`: wgpu rendering of the entity rectangles
//! - `tuning`: Gameplay constants as a validated, serializable struct

pub mod error;
pub mod frame;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{RenderError, StartupError, TuningError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (window size in pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Target frame rate of the driver
    pub const MAX_FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 200.0;
    pub const BALL_SIZE: f32 = 10.0;
    /// Speed multiplier applied on every paddle hit (compounds, no ceiling)
    pub const BALL_SPEED_GAIN: f32 = 1.05;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Gap between the paddle's bottom edge and the arena floor
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 10.0;
    /// Rows are laid out for y in [BLOCK_GRID_TOP, BLOCK_GRID_BOTTOM)
    pub const BLOCK_GRID_TOP: f32 = 50.0;
    pub const BLOCK_GRID_BOTTOM: f32 = 100.0;

    pub const WINDOW_TITLE: &str = "BreakOut";
}
