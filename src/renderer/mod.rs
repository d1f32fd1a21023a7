//! WebGPU rendering module
//!
//! Every entity is a flat-colored rectangle. Scene extraction and vertex
//! generation are pure; the pipeline and display own the GPU objects.

pub mod display;
pub mod pipeline;
pub mod scene;
pub mod vertex;

pub use display::Display;
pub use pipeline::RenderState;
pub use scene::{BACKGROUND, DrawRect, draw_list};
pub use vertex::Vertex;
