//! Frame driver
//!
//! One frame is: read the clock, derive the time step from the previous
//! frame, apply the held keys to the paddle, step the simulation, hand the
//! scene to the display, then sleep off whatever is left of the target
//! frame period. Overrunning frames are not caught up; the next time step
//! simply comes out larger.

use std::time::{Duration, Instant};

use crate::error::RenderError;
use crate::input::KeyState;
use crate::renderer::scene::{DrawRect, draw_list};
use crate::sim::{GameState, GameStatus, step};
use crate::tuning::Tuning;

/// Monotonic millisecond clock with a blocking sleep
pub trait Clock {
    fn ticks_ms(&self) -> u64;
    fn sleep(&self, duration: Duration);
}

/// Wall clock measured from process start
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Where a finished frame goes: the window in the game, a recorder in tests
pub trait FrameSink {
    /// Clear, fill every rectangle and present
    fn present(&mut self, scene: &[DrawRect]) -> Result<(), RenderError>;
    /// Replace the title-bar text
    fn set_title(&mut self, title: &str);
}

/// Derives time steps and throttles to the target frame period
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration_ms: f32,
    last_frame_ms: u64,
}

impl FramePacer {
    pub fn new(frame_duration_ms: f32, now_ms: u64) -> Self {
        Self {
            frame_duration_ms,
            last_frame_ms: now_ms,
        }
    }

    /// Start a frame; returns seconds since the previous frame started
    pub fn begin(&mut self, now_ms: u64) -> f32 {
        let dt = now_ms.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now_ms;
        dt
    }

    /// Time left in the frame period, in whole milliseconds, if any
    pub fn remaining(&self, frame_start_ms: u64, now_ms: u64) -> Option<Duration> {
        let actual = now_ms.saturating_sub(frame_start_ms) as f32;
        if actual < self.frame_duration_ms {
            Some(Duration::from_millis((self.frame_duration_ms - actual) as u64))
        } else {
            None
        }
    }
}

/// Frames-per-second measured over windows of just over one second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_count: u32,
    last_update_ms: u64,
    fps: u32,
}

impl FpsCounter {
    /// Reports the target rate until the first full window has elapsed
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_count: 1,
            last_update_ms: 0,
            fps: target_fps,
        }
    }

    /// Count a finished frame and return the current reading
    pub fn record_frame(&mut self, now_ms: u64) -> u32 {
        self.frame_count += 1;
        let elapsed = now_ms.saturating_sub(self.last_update_ms);
        if elapsed > 1000 {
            self.fps = (self.frame_count as f32 / (elapsed as f32 / 1000.0)) as u32;
            self.last_update_ms = now_ms;
            self.frame_count = 0;
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Title-bar text for an FPS reading
pub fn fps_title(fps: u32) -> String {
    format!("FPS: {}", fps)
}

/// Everything the driver owns for one game
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    pub keys: KeyState,
    pacer: FramePacer,
    fps: FpsCounter,
}

impl Session {
    pub fn new(tuning: Tuning, now_ms: u64) -> Self {
        Self::with_state(GameState::new(tuning), now_ms)
    }

    pub fn with_state(state: GameState, now_ms: u64) -> Self {
        let tuning = state.tuning;
        Self {
            state,
            keys: KeyState::default(),
            pacer: FramePacer::new(tuning.frame_duration_ms(), now_ms),
            fps: FpsCounter::new(tuning.target_fps),
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Run one input, step, render and pace cycle.
    ///
    /// A frame that ends the game returns right after the step, before
    /// anything is drawn.
    pub fn frame<C: Clock, S: FrameSink>(
        &mut self,
        clock: &C,
        sink: &mut S,
    ) -> Result<GameStatus, RenderError> {
        let frame_start = clock.ticks_ms();
        let dt = self.pacer.begin(frame_start);

        self.keys
            .apply(&mut self.state.paddle, self.state.tuning.paddle_speed);

        let status = step(&mut self.state, dt);
        if status.is_terminal() {
            return Ok(status);
        }

        sink.present(&draw_list(&self.state))?;

        if let Some(rest) = self.pacer.remaining(frame_start, clock.ticks_ms()) {
            clock.sleep(rest);
        }

        let fps = self.fps.record_frame(clock.ticks_ms());
        sink.set_title(&fps_title(fps));

        Ok(status)
    }
}
