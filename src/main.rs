//! Duo Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use duo_pong::platform::{InputBuffer, Key, Platform, PlatformEvent};
    use duo_pong::renderer::{RenderInitError, Scene, ShapeRenderer};
    use duo_pong::{FrameDriver, FrameLimiter, GameConfig};

    /// Browser side of the frame loop: buffered input, renderer, status line
    struct WebPlatform {
        input: InputBuffer,
        renderer: ShapeRenderer,
        status_el: Option<Element>,
        shown_status: Option<&'static str>,
    }

    impl Platform for WebPlatform {
        fn poll_event(&mut self) -> Option<PlatformEvent> {
            self.input.poll_event()
        }

        fn is_key_pressed(&self, key: Key) -> bool {
            self.input.is_key_pressed(key)
        }

        fn render(&mut self, scene: &Scene) {
            self.renderer.render_or_recover(scene);

            if scene.status != self.shown_status {
                self.shown_status = scene.status;
                if let Some(el) = &self.status_el {
                    el.set_text_content(Some(scene.status.unwrap_or("")));
                }
                if let Some(status) = scene.status {
                    log::info!("{}", status);
                }
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        limiter: FrameLimiter,
        platform: WebPlatform,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duo Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = GameConfig::default();
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let renderer = match instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(RenderInitError::Surface)
        {
            Ok(surface) => ShapeRenderer::new(&instance, surface, width, height).await,
            Err(err) => Err(err),
        };
        let renderer = match renderer {
            Ok(renderer) => renderer,
            Err(err) => {
                log::error!("Renderer init failed: {}", err);
                if let Some(el) = document.get_element_by_id("status") {
                    el.set_text_content(Some("WebGPU is not available in this browser"));
                }
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            limiter: FrameLimiter::new(config.frame_rate),
            driver: FrameDriver::new(config, seed),
            platform: WebPlatform {
                input: InputBuffer::new(),
                renderer,
                status_el: document.get_element_by_id("status"),
                shown_status: None,
            },
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Duo Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    // Keep arrows and Space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut()
                        .platform
                        .input
                        .key_down(key, event.repeat());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    event.prevent_default();
                    game.borrow_mut().platform.input.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus lost: key releases won't be delivered
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().platform.input.release_all();
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            if g.limiter.poll(time / 1000.0) {
                // The page can't close itself, so the outcome is always Continue
                g.driver.run_frame(&mut g.platform);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use winit::application::ApplicationHandler;
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, KeyEvent, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    use duo_pong::config::CONFIG_ENV_VAR;
    use duo_pong::platform::{InputBuffer, Key, Platform, PlatformEvent};
    use duo_pong::renderer::{RenderInitError, Scene, ShapeRenderer};
    use duo_pong::{FrameDriver, FrameLimiter, FrameOutcome, GameConfig};

    fn map_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::Space => Some(Key::Space),
            _ => None,
        }
    }

    /// Borrowed view of the app that the frame driver talks to
    struct NativePlatform<'a> {
        input: &'a mut InputBuffer,
        renderer: &'a mut ShapeRenderer,
        window: &'a Window,
        shown_status: &'a mut Option<&'static str>,
    }

    impl Platform for NativePlatform<'_> {
        fn poll_event(&mut self) -> Option<PlatformEvent> {
            self.input.poll_event()
        }

        fn is_key_pressed(&self, key: Key) -> bool {
            self.input.is_key_pressed(key)
        }

        fn render(&mut self, scene: &Scene) {
            self.renderer.render_or_recover(scene);

            // No text rendering; the status goes in the title bar
            if scene.status != *self.shown_status {
                *self.shown_status = scene.status;
                match scene.status {
                    Some(status) => {
                        log::info!("{}", status);
                        self.window.set_title(&format!("Pong - {status}"));
                    }
                    None => self.window.set_title("Pong"),
                }
            }
        }
    }

    struct App {
        config: GameConfig,
        driver: FrameDriver,
        limiter: FrameLimiter,
        input: InputBuffer,
        clock: Instant,
        window: Option<Arc<Window>>,
        renderer: Option<ShapeRenderer>,
        shown_status: Option<&'static str>,
        error: Option<anyhow::Error>,
    }

    impl App {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                limiter: FrameLimiter::new(config.frame_rate),
                driver: FrameDriver::new(config.clone(), seed),
                config,
                input: InputBuffer::new(),
                clock: Instant::now(),
                window: None,
                renderer: None,
                shown_status: None,
                error: None,
            }
        }

        fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
            let attrs = Window::default_attributes()
                .with_title("Pong")
                .with_inner_size(LogicalSize::new(
                    self.config.field_width as f64,
                    self.config.field_height as f64,
                ))
                .with_resizable(false);
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .context("failed to create window")?,
            );

            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let surface = instance
                .create_surface(window.clone())
                .map_err(RenderInitError::Surface)?;
            let size = window.inner_size();
            let renderer = pollster::block_on(ShapeRenderer::new(
                &instance,
                surface,
                size.width,
                size.height,
            ))
            .context("failed to initialize renderer")?;

            self.window = Some(window);
            self.renderer = Some(renderer);
            Ok(())
        }

        fn frame(&mut self, event_loop: &ActiveEventLoop) {
            let (Some(window), Some(renderer)) = (self.window.as_deref(), self.renderer.as_mut())
            else {
                event_loop.exit();
                return;
            };

            let mut platform = NativePlatform {
                input: &mut self.input,
                renderer,
                window,
                shown_status: &mut self.shown_status,
            };
            if self.driver.run_frame(&mut platform) == FrameOutcome::Quit {
                log::info!("Window closed");
                event_loop.exit();
            }
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            if let Err(err) = self.init_graphics(event_loop) {
                self.error = Some(err);
                event_loop.exit();
            }
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _window_id: WindowId,
            event: WindowEvent,
        ) {
            match event {
                WindowEvent::CloseRequested => {
                    self.input.push(PlatformEvent::Closed);
                    self.frame(event_loop);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state,
                            repeat,
                            ..
                        },
                    ..
                } => {
                    if let Some(key) = map_key(code) {
                        match state {
                            ElementState::Pressed => self.input.key_down(key, repeat),
                            ElementState::Released => self.input.key_up(key),
                        }
                    }
                }
                WindowEvent::Focused(false) => self.input.release_all(),
                WindowEvent::Resized(size) => {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size.width, size.height);
                    }
                }
                WindowEvent::RedrawRequested => {
                    if self.limiter.poll(self.clock.elapsed().as_secs_f64()) {
                        self.frame(event_loop);
                    }
                }
                _ => {}
            }
        }

        fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
            let Some(window) = &self.window else {
                return;
            };
            let now = self.clock.elapsed().as_secs_f64();
            match self.limiter.next_deadline() {
                Some(due) if due > now => {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(
                        self.clock + Duration::from_secs_f64(due),
                    ));
                }
                _ => window.request_redraw(),
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    fn load_config() -> Result<GameConfig> {
        match config_path() {
            Some(path) => GameConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => {
                log::debug!("No config file given, using defaults");
                Ok(GameConfig::default())
            }
        }
    }

    pub fn run() -> Result<()> {
        let config = load_config()?;
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::info!("Game initialized with seed: {}", seed);

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut app = App::new(config, seed);
        event_loop.run_app(&mut app).context("event loop failed")?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Duo Pong (native) starting...");

    match native::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
