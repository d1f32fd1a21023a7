//! Window-backed display
//!
//! Binds a winit window to a wgpu surface and implements [`FrameSink`] for
//! the frame driver.

use std::sync::Arc;

use glam::Vec2;
use winit::window::Window;

use super::pipeline::RenderState;
use super::scene::DrawRect;
use super::vertex::scene_vertices;
use crate::error::{RenderError, StartupError};
use crate::frame::FrameSink;

pub struct Display {
    window: Arc<Window>,
    render_state: RenderState,
    /// Arena extent in simulation units, mapped onto the whole surface
    arena: Vec2,
}

impl Display {
    /// Create the surface, pick an adapter and build the pipeline
    pub async fn new(window: Arc<Window>, arena: Vec2) -> Result<Self, StartupError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        Ok(Self {
            window,
            render_state,
            arena,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.render_state.resize(width, height);
    }
}

impl FrameSink for Display {
    fn present(&mut self, scene: &[DrawRect]) -> Result<(), RenderError> {
        let vertices = scene_vertices(scene, self.arena);
        match self.render_state.render(&vertices) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.render_state.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
