//! Data-driven game balance
//!
//! Every number the simulation and the frame driver depend on. The defaults
//! are the compiled-in constants from [`crate::consts`]; the binary never
//! reads tuning from outside the process.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Initial speed on each axis (units/s)
    pub ball_speed: f32,
    /// Multiplier applied to both velocity components on a paddle hit
    pub speed_gain: f32,
    /// Upper bound on ball speed after a paddle hit. `None` lets the
    /// speed compound forever.
    pub max_ball_speed: Option<f32>,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_margin: f32,

    // === Blocks ===
    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    pub block_grid_top: f32,
    pub block_grid_bottom: f32,

    // === Frame driver ===
    pub target_fps: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: SCREEN_WIDTH,
            arena_height: SCREEN_HEIGHT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            speed_gain: BALL_SPEED_GAIN,
            max_ball_speed: None,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_gap: BLOCK_GAP,
            block_grid_top: BLOCK_GRID_TOP,
            block_grid_bottom: BLOCK_GRID_BOTTOM,

            target_fps: MAX_FPS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values that would break the arena invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_size", self.ball_size),
            ("speed_gain", self.speed_gain),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
        ];
        for (field, value) in positive {
            // Written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if !(self.block_gap >= 0.0) {
            return Err(TuningError::NonPositive {
                field: "block_gap",
                value: self.block_gap,
            });
        }
        // The grid loops only terminate if each stride still moves the
        // cursor at the far end of its axis
        let strides = [
            (
                "block_width + block_gap",
                self.block_width + self.block_gap,
                self.arena_width,
            ),
            (
                "block_height + block_gap",
                self.block_height + self.block_gap,
                self.block_grid_top.abs().max(self.block_grid_bottom.abs()),
            ),
        ];
        for (field, value, far_end) in strides {
            if !(far_end + value > far_end) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if let Some(cap) = self.max_ball_speed {
            if !(cap > 0.0) {
                return Err(TuningError::NonPositive {
                    field: "max_ball_speed",
                    value: cap,
                });
            }
        }
        if self.paddle_width > self.arena_width {
            return Err(TuningError::PaddleTooWide {
                paddle: self.paddle_width,
                arena: self.arena_width,
            });
        }
        if self.target_fps == 0 {
            return Err(TuningError::ZeroFps);
        }
        Ok(())
    }

    /// Arena extent as a vector (width, height)
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Target frame period in milliseconds
    #[inline]
    pub fn frame_duration_ms(&self) -> f32 {
        (1.0 / self.target_fps as f32) * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.arena(), Vec2::new(640.0, 480.0));
        assert_eq!(tuning.max_ball_speed, None);
    }

    #[test]
    fn test_frame_duration() {
        let tuning = Tuning::default();
        assert!((tuning.frame_duration_ms() - 16.666_666).abs() < 0.001);
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "speed_gain": 1.1, "max_ball_speed": 600.0 }"#)
            .expect("valid json");
        assert_eq!(tuning.speed_gain, 1.1);
        assert_eq!(tuning.max_ball_speed, Some(600.0));
        // Everything else falls back to the defaults
        assert_eq!(tuning.paddle_speed, PADDLE_SPEED);
        assert_eq!(tuning.arena_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_to_json_is_readable_back() {
        let tuning = Tuning {
            paddle_speed: 500.0,
            ..Default::default()
        };
        let json = tuning.to_json().expect("serializable");
        assert_eq!(Tuning::from_json(&json).expect("valid"), tuning);
    }

    #[test]
    fn test_rejects_stalled_block_grid() {
        // Positive block sizes with a gap that cancels them out
        let tuning = Tuning {
            block_width: 0.5,
            block_gap: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "block_gap", .. })
        ));

        // A stride too small to register at x = 640 never finishes a row
        let tuning = Tuning {
            block_width: 1e-6,
            block_gap: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "block_width + block_gap", .. })
        ));

        // Zero gap is a valid, gapless grid
        let tuning = Tuning {
            block_gap: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
        let blocks = crate::sim::generate_blocks(&tuning);
        // Rows at y = 50, 70, 90; 13 columns of 50 starting at x = 0
        assert_eq!(blocks.len(), 3 * 13);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "ball_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive { field: "ball_size", .. }));

        let err = Tuning::from_json(r#"{ "paddle_width": 700.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::PaddleTooWide { .. }));

        let err = Tuning::from_json(r#"{ "max_ball_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive { field: "max_ball_speed", .. }));

        let err = Tuning::from_json(r#"{ "block_gap": -50.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive { field: "block_gap", .. }));

        let err = Tuning::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ZeroFps));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }
}
