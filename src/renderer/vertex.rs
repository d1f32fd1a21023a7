//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::scene::DrawRect;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

pub const VERTICES_PER_QUAD: usize = 6;

/// Convert arena coordinates (top-left origin, y down) to normalized device
/// coordinates (-1..1, y up)
#[inline]
pub fn arena_to_ndc(p: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(p.x / arena.x * 2.0 - 1.0, 1.0 - p.y / arena.y * 2.0)
}

/// Two triangles covering a rectangle
pub fn quad(draw: &DrawRect, arena: Vec2) -> [Vertex; VERTICES_PER_QUAD] {
    let color = draw.color.to_linear();
    let tl = arena_to_ndc(draw.rect.pos, arena);
    let br = arena_to_ndc(draw.rect.max(), arena);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
    ]
}

/// Triangle list for a whole scene
pub fn scene_vertices(scene: &[DrawRect], arena: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.len() * VERTICES_PER_QUAD);
    for draw in scene {
        vertices.extend_from_slice(&quad(draw, arena));
    }
    vertices
}
