//! Scene extraction
//!
//! Turns the game state into the list of filled rectangles the renderer
//! draws. Pure, so it can be checked without a GPU.

use crate::sim::{Color, GameState, Rect};

/// Clear color behind every frame
pub const BACKGROUND: Color = Color::BLACK;

/// One filled rectangle in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
}

/// Draw order: ball, paddle, then the remaining blocks
pub fn draw_list(state: &GameState) -> Vec<DrawRect> {
    let mut scene = Vec::with_capacity(state.blocks.len() + 2);
    scene.extend(
        [&state.ball, &state.paddle]
            .into_iter()
            .chain(state.blocks.iter())
            .map(|e| DrawRect {
                rect: e.rect,
                color: e.color,
            }),
    );
    scene
}
