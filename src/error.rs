//! Error types
//!
//! Winning and losing are not errors; they come back from the simulation as
//! a [`GameStatus`](crate::sim::GameStatus). Everything here is either a bad
//! tuning value or a failure at the window/GPU boundary.

use thiserror::Error;

/// Invalid gameplay tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle width {paddle} does not fit in arena width {arena}")]
    PaddleTooWide { paddle: f32, arena: f32 },

    #[error("target fps must be at least 1")]
    ZeroFps,

    #[error("malformed tuning json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to bring up the window or the GPU surface
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("display failed during the game: {0}")]
    Render(#[from] RenderError),
}

/// Unrecoverable failure while drawing a frame
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("GPU out of memory")]
    OutOfMemory,
}
