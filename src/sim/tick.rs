//! Simulation step
//!
//! Advances the world by a time delta. The order of the phases is part of
//! the game's behavior: the floor check runs before the paddle check, and
//! blocks are resolved after the paddle.

use super::collision::{below_floor, hits_ceiling, hits_side_wall, overlaps};
use super::state::{GameState, GameStatus};

/// Advance the game state by `dt` seconds and report the resulting status.
///
/// Bounces only flip velocity signs; positions are never corrected, so a
/// fast ball may sit past a wall for a frame. Once the game has ended the
/// state is left untouched and the terminal status is returned again.
pub fn step(state: &mut GameState, dt: f32) -> GameStatus {
    debug_assert!(dt >= 0.0, "negative time step");

    if state.status.is_terminal() {
        return state.status;
    }
    state.steps += 1;

    let arena_width = state.tuning.arena_width;
    let arena_height = state.tuning.arena_height;

    // Paddle: integrate, then clamp into the arena. Velocity is kept so the
    // paddle keeps pushing against the wall while the key is held.
    let paddle = &mut state.paddle;
    paddle.integrate(dt);
    if paddle.rect.pos.x < 0.0 {
        paddle.rect.pos.x = 0.0;
    }
    if paddle.rect.right() > arena_width {
        paddle.rect.pos.x = arena_width - paddle.rect.width();
    }

    let ball = &mut state.ball;
    ball.integrate(dt);

    if hits_side_wall(&ball.rect, arena_width) {
        ball.vel.x = -ball.vel.x;
    }
    if hits_ceiling(&ball.rect) {
        ball.vel.y = -ball.vel.y;
    }
    if below_floor(&ball.rect, arena_height) {
        log::info!("Ball lost after {} steps", state.steps);
        state.status = GameStatus::Lost;
        return state.status;
    }

    if overlaps(&ball.rect, &state.paddle.rect) {
        ball.vel.y = -ball.vel.y;
        ball.vel *= state.tuning.speed_gain;
        if let Some(cap) = state.tuning.max_ball_speed {
            ball.vel = ball.vel.clamp_length_max(cap);
        }
        log::debug!("Paddle hit, ball velocity now {:?}", ball.vel);
    }

    // Every overlapping block goes, and each one flips vy on its own
    let before = state.blocks.len();
    state.blocks.retain(|block| {
        if overlaps(&ball.rect, &block.rect) {
            ball.vel.y = -ball.vel.y;
            false
        } else {
            true
        }
    });
    let destroyed = before - state.blocks.len();
    if destroyed > 0 {
        log::debug!(
            "Destroyed {} block(s), {} remaining",
            destroyed,
            state.blocks.len()
        );
    }

    if state.blocks.is_empty() {
        log::info!("All blocks cleared after {} steps", state.steps);
        state.status = GameStatus::Won;
    }

    state.status
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::BALL_SPEED_GAIN;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Color, Entity};
    use crate::tuning::Tuning;

    fn block(x: f32, y: f32) -> Entity {
        Entity::fixed(Rect::new(x, y, 50.0, 20.0), Color::GREEN)
    }

    /// A state with one far-away block so the game keeps running
    fn open_state() -> GameState {
        GameState::with_blocks(Tuning::default(), vec![block(0.0, 0.0)])
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut state = open_state();
        state.ball.rect = Rect::new(100.0, 200.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(200.0, 0.0);

        assert_eq!(step(&mut state, 1.0), GameStatus::Running);
        assert_eq!(state.ball.rect.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_left_wall_flips_vx_only() {
        let mut state = open_state();
        state.ball.rect = Rect::new(2.0, 200.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(-100.0, 50.0);

        step(&mut state, 0.1);

        assert_eq!(state.ball.vel, Vec2::new(100.0, 50.0));
        // No position correction: the ball stays past the wall this step
        assert!((state.ball.rect.pos.x - -8.0).abs() < 1e-4);
        assert!((state.ball.rect.pos.y - 205.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_wall_flips_vx() {
        let mut state = open_state();
        state.ball.rect = Rect::new(628.0, 200.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(100.0, 0.0);

        step(&mut state, 0.1);
        assert_eq!(state.ball.vel.x, -100.0);
    }

    #[test]
    fn test_ceiling_flips_vy() {
        let mut state = open_state();
        state.blocks = vec![block(500.0, 300.0)];
        state.ball.rect = Rect::new(200.0, 1.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(0.0, -100.0);

        step(&mut state, 0.1);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_floor_loses() {
        let mut state = open_state();
        state.ball.rect = Rect::new(10.0, 469.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(0.0, 100.0);

        assert_eq!(step(&mut state, 0.1), GameStatus::Lost);
        assert_eq!(state.status, GameStatus::Lost);
    }

    #[test]
    fn test_floor_checked_before_paddle() {
        let mut state = open_state();
        // Paddle reaches below the floor so the fallen ball still overlaps it
        state.paddle.rect = Rect::new(0.0, 460.0, 100.0, 40.0);
        state.ball.rect = Rect::new(10.0, 469.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(0.0, 100.0);

        assert_eq!(step(&mut state, 0.1), GameStatus::Lost);
        // Paddle response never ran
        assert_eq!(state.ball.vel, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_paddle_hit_flips_and_speeds_up() {
        let mut state = open_state();
        state.ball.rect = Rect::new(300.0, 438.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(120.0, 100.0);

        step(&mut state, 0.05);

        assert_eq!(state.ball.vel.x, 120.0 * BALL_SPEED_GAIN);
        assert_eq!(state.ball.vel.y, -100.0 * BALL_SPEED_GAIN);
    }

    #[test]
    fn test_paddle_gain_compounds_without_cap() {
        let mut state = open_state();
        state.ball.vel = Vec2::new(100.0, 100.0);
        for _ in 0..20 {
            state.ball.rect = Rect::new(300.0, 445.0, 10.0, 10.0);
            state.ball.vel.y = state.ball.vel.y.abs();
            step(&mut state, 0.0);
        }
        let expected = 100.0 * BALL_SPEED_GAIN.powi(20);
        assert!((state.ball.vel.x - expected).abs() < 0.01);
    }

    #[test]
    fn test_paddle_gain_respects_cap() {
        let tuning = Tuning {
            max_ball_speed: Some(150.0),
            ..Default::default()
        };
        let mut state = GameState::with_blocks(tuning, vec![block(0.0, 0.0)]);
        state.ball.vel = Vec2::new(100.0, 100.0);
        for _ in 0..10 {
            state.ball.rect = Rect::new(300.0, 445.0, 10.0, 10.0);
            state.ball.vel.y = state.ball.vel.y.abs();
            step(&mut state, 0.0);
        }
        assert!(state.ball.vel.length() <= 150.0 + 1e-3);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_paddle_clamped_to_arena() {
        let mut state = open_state();
        state.ball.vel = Vec2::ZERO;
        state.paddle.vel.x = -400.0;
        step(&mut state, 2.0);
        assert_eq!(state.paddle.rect.pos.x, 0.0);
        // Velocity survives the clamp
        assert_eq!(state.paddle.vel.x, -400.0);

        state.paddle.vel.x = 400.0;
        step(&mut state, 0.0);
        step(&mut state, 5.0);
        assert_eq!(state.paddle.rect.pos.x, 540.0);
    }

    #[test]
    fn test_multiple_blocks_removed_in_one_step() {
        let mut state = GameState::with_blocks(
            Tuning::default(),
            vec![block(0.0, 300.0), block(100.0, 200.0), block(140.0, 200.0)],
        );
        // Ball straddles the two blocks at x = 100 and x = 140
        state.ball.rect = Rect::new(145.0, 205.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(0.0, -10.0);

        assert_eq!(step(&mut state, 0.0), GameStatus::Running);
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.blocks[0].rect.pos, Vec2::new(0.0, 300.0));
        // Two flips cancel out
        assert_eq!(state.ball.vel.y, -10.0);
    }

    #[test]
    fn test_removed_block_no_longer_collides() {
        let mut state =
            GameState::with_blocks(Tuning::default(), vec![block(100.0, 200.0), block(0.0, 0.0)]);
        state.ball.rect = Rect::new(120.0, 205.0, 10.0, 10.0);
        state.ball.vel = Vec2::ZERO;

        step(&mut state, 0.0);
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.ball.vel.y, 0.0);

        state.ball.vel = Vec2::new(0.0, 10.0);
        step(&mut state, 0.0);
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.ball.vel.y, 10.0);
    }

    #[test]
    fn test_last_block_wins() {
        let tuning = Tuning::default();
        let mut state = GameState::with_blocks(tuning, vec![block(0.0, 50.0)]);
        state.ball.rect = Rect::new(5.0, 55.0, 10.0, 10.0);
        state.ball.vel = Vec2::new(0.0, 100.0);

        assert_eq!(step(&mut state, 0.1), GameStatus::Won);
        assert_eq!(state.ball.rect.pos.y, 65.0);
        assert_eq!(state.ball.vel.y, -100.0);
        assert!(state.blocks.is_empty());
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let mut state = open_state();
        state.ball.rect = Rect::new(10.0, 475.0, 10.0, 10.0);
        assert_eq!(step(&mut state, 0.1), GameStatus::Lost);

        let snapshot = state.clone();
        assert_eq!(step(&mut state, 0.1), GameStatus::Lost);
        assert_eq!(state.ball, snapshot.ball);
        assert_eq!(state.steps, snapshot.steps);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(Tuning::default());
        let mut b = GameState::new(Tuning::default());
        for i in 0..600 {
            let vx = if (i / 40) % 2 == 0 { 400.0 } else { -400.0 };
            a.paddle.vel.x = vx;
            b.paddle.vel.x = vx;
            let sa = step(&mut a, 1.0 / 60.0);
            let sb = step(&mut b, 1.0 / 60.0);
            assert_eq!(sa, sb);
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.blocks.len(), b.blocks.len());
    }
}
