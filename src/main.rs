//! Mindless Meditation entry point
//!
//! Opens the window, starts audio and runs the fixed-rate frame loop.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use mindless_meditation::Settings;
use mindless_meditation::audio::AudioManager;
use mindless_meditation::consts::*;
use mindless_meditation::platform::{FramePacer, PointerState};
use mindless_meditation::renderer::{Frame, RenderState};
use mindless_meditation::sim::{SessionState, TickInput, tick};

/// Application state driven by the winit event loop
struct App {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    audio: AudioManager,
    session: SessionState,
    input: TickInput,
    pointer: PointerState,
    pacer: FramePacer,
    /// Zero point of the session clock
    clock_start: Instant,
    /// Set when the loop had to stop for a reason other than quit
    failed: bool,
}

impl App {
    fn new(seed: u64, audio: AudioManager) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            render_state: None,
            audio,
            session: SessionState::new(seed, 0.0),
            input: TickInput::default(),
            pointer: PointerState::default(),
            pacer: FramePacer::new(TARGET_FPS, now),
            clock_start: now,
            failed: false,
        }
    }

    /// Seconds since the session started
    fn clock(&self) -> f64 {
        self.clock_start.elapsed().as_secs_f64()
    }

    /// Queue a quit and run the final tick right away
    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.input.quit = true;
        self.frame(event_loop);
    }

    /// Run one tick and draw it
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock();
        let running = tick(&mut self.session, &self.input, now);
        self.input.clear();

        for event in self.session.drain_events() {
            self.audio.play(event);
        }

        if !running {
            event_loop.exit();
            return;
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let frame = Frame::build(&self.session);
        match render_state.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory!");
                self.failed = true;
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                self.failed = true;
                event_loop.exit();
                return;
            }
        };
        self.pointer.set_scale_factor(window.scale_factor());

        match pollster::block_on(RenderState::new(Arc::clone(&window))) {
            Ok(render_state) => self.render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                self.failed = true;
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        log::info!("Mindless Meditation running!");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(render_state) = self.render_state.as_mut() {
            render_state.handle_window_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.quit(event_loop),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.pointer.left(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(pos) = self.pointer.position() {
                    self.input.click(pos);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.pointer.set_scale_factor(scale_factor);
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            self.pacer.begin_frame(now);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Mindless Meditation starting...");

    let settings = Settings::default();
    match serde_json::to_string(&settings) {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::debug!("Settings not serializable: {}", e),
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Session initialized with seed: {}", seed);

    let audio = AudioManager::new(&settings);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(seed, audio);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    let summary = app.session.summary(app.clock());
    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("Session summary: {}", json),
        Err(e) => log::warn!("Could not serialize session summary: {}", e),
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
