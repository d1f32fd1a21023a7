//! Breakout entry point
//!
//! Opens the window, then runs one session frame per redraw until the game
//! is won or lost or the window is closed. Winning and losing both exit
//! with status 0; only startup and GPU failures are reported as errors.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use breakout::consts::WINDOW_TITLE;
use breakout::frame::{Clock, Session, SystemClock};
use breakout::renderer::Display;
use breakout::sim::GameStatus;
use breakout::{StartupError, Tuning};

/// Game instance holding all state
struct Game {
    tuning: Tuning,
    clock: SystemClock,
    /// Created once the window is up so the first time step is small
    session: Option<Session>,
    display: Option<Display>,
    outcome: Option<GameStatus>,
    error: Option<StartupError>,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            clock: SystemClock::new(),
            session: None,
            display: None,
            outcome: None,
            error: None,
        }
    }

    fn open_display(&self, event_loop: &ActiveEventLoop) -> Result<Display, StartupError> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(
                self.tuning.arena_width as u32,
                self.tuning.arena_height as u32,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);
        pollster::block_on(Display::new(window, self.tuning.arena()))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: StartupError) {
        log::error!("{}", error);
        self.error = Some(error);
        self.display = None;
        event_loop.exit();
    }

    /// Print the outcome, release the GPU resources and stop the loop
    fn finish(&mut self, event_loop: &ActiveEventLoop, status: GameStatus) {
        if let Some(message) = status.message() {
            println!("{}", message);
        }
        log::info!("Game ended: {:?}", status);
        self.outcome = Some(status);
        self.display = None;
        event_loop.exit();
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(session), Some(display)) = (self.session.as_mut(), self.display.as_mut()) else {
            return;
        };

        match session.frame(&self.clock, display) {
            Ok(GameStatus::Running) => display.window().request_redraw(),
            Ok(status) => self.finish(event_loop, status),
            Err(e) => self.fail(event_loop, e.into()),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() || self.outcome.is_some() {
            return;
        }

        match self.open_display(event_loop) {
            Ok(display) => {
                log::info!(
                    "Window created ({}x{})",
                    self.tuning.arena_width,
                    self.tuning.arena_height
                );
                display.window().request_redraw();
                self.display = Some(display);
                self.session = Some(Session::new(self.tuning, self.clock.ticks_ms()));
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                self.display = None;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(display) = self.display.as_mut() {
                    display.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let (Some(session), PhysicalKey::Code(code)) =
                    (self.session.as_mut(), event.physical_key)
                {
                    session.keys.handle_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::RedrawRequested => self.run_frame(event_loop),
            _ => (),
        }
    }
}

fn main() -> Result<(), StartupError> {
    env_logger::init();
    log::info!("Breakout starting...");

    let tuning = Tuning::default();
    match tuning.to_json() {
        Ok(json) => log::debug!("Tuning: {}", json),
        Err(e) => log::warn!("Could not serialize tuning: {}", e),
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(tuning);
    event_loop.run_app(&mut game)?;

    if let Some(error) = game.error.take() {
        return Err(error);
    }
    log::info!("Shut down cleanly");
    Ok(())
}
