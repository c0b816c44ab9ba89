//! Ledge Dash entry point
//!
//! Owns the winit event loop, the fixed-timestep accumulator and the
//! window-title HUD. All gameplay lives in [`ledge_dash::sim`]; this shell
//! only translates window events in and draw calls out.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use ledge_dash::consts::{MAX_TICKS_PER_FRAME, TICK_DT, VIEW_HEIGHT, VIEW_WIDTH};
use ledge_dash::platform::KeyState;
use ledge_dash::renderer::{RenderState, scene_vertices};
use ledge_dash::sim::{GameEvent, GamePhase, GameState, tick};

fn print_banner() {
    println!("=== LEDGE DASH ===");
    println!("Controls:");
    println!("  A / Left arrow  - move left");
    println!("  D / Right arrow - move right");
    println!("  Space           - jump");
    println!("  R               - restart (when game over)");
    println!();
    println!("Collect yellow coins (10 points each)");
    println!("Avoid red enemies!");
}

struct App {
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    state: GameState,
    keys: KeyState,
    last_frame: Option<Instant>,
    accumulator: f32,
    /// Last (score, phase) written into the window title
    title_stamp: (u32, GamePhase),
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            render: None,
            state: GameState::new(),
            keys: KeyState::new(),
            last_frame: None,
            accumulator: 0.0,
            title_stamp: (0, GamePhase::Playing),
        }
    }

    /// Convert elapsed wall time into fixed simulation ticks
    fn step(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|t| (now - t).as_secs_f32())
            .unwrap_or(TICK_DT);
        self.last_frame = Some(now);

        self.accumulator += dt.min(0.1);
        let mut ticks = 0;
        while self.accumulator >= TICK_DT && ticks < MAX_TICKS_PER_FRAME {
            let input = self.keys.snapshot();
            tick(&mut self.state, &input);
            self.accumulator -= TICK_DT;
            ticks += 1;
        }

        for event in self.state.events.drain(..) {
            match event {
                GameEvent::CoinCollected => {
                    log::info!("coin collected, score {}", self.state.score);
                }
                GameEvent::PlayerKilled => {
                    log::info!("player down, final score {}", self.state.score);
                }
                GameEvent::Restarted => log::info!("run restarted"),
            }
        }
    }

    /// Score and game-over state live in the window title; the native
    /// build has no in-window text path
    fn refresh_title(&mut self) {
        let stamp = (self.state.score, self.state.phase);
        if stamp == self.title_stamp {
            return;
        }
        self.title_stamp = stamp;

        if let Some(window) = &self.window {
            let title = match self.state.phase {
                GamePhase::Playing => format!("Ledge Dash | Score: {}", self.state.score),
                GamePhase::GameOver => format!(
                    "Ledge Dash | Score: {} | GAME OVER - press R to restart",
                    self.state.score
                ),
            };
            window.set_title(&title);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Ledge Dash")
            .with_inner_size(LogicalSize::new(VIEW_WIDTH as f64, VIEW_HEIGHT as f64));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create render surface");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        }))
        .expect("No suitable GPU adapter");
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
        ));

        log::info!("window created: {}x{}", size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.keys.handle_key_event(&event);
            }

            WindowEvent::RedrawRequested => {
                self.step();
                self.refresh_title();

                if let Some(render) = &mut self.render {
                    let vertices = scene_vertices(&self.state);
                    match render.render(&vertices, self.state.camera.center) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = render.size;
                            render.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("render surface out of memory");
                        }
                        Err(e) => log::warn!("render error: {e:?}"),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::init();
    print_banner();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)
}
