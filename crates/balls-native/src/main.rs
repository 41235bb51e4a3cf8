use std::time::{Duration, Instant};

use balls_core::{
    AnimationMode, Animator, Color, FrameRate, Pacing, RenderSink, Settings, Viewport,
    WindowMetrics,
};
use clap::Parser;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

mod gpu;
mod sink;

use gpu::GpuState;
use sink::NativeSink;

const LIGHT_BACKGROUND: Color = Color::from_hex(0xffffff);
const DARK_BACKGROUND: Color = Color::from_hex(0x1a1a1a);

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive ball cluster (native)", long_about = None)]
struct Cli {
    /// Pace frames with a 30 fps timer instead of vsync
    #[arg(long)]
    fps30: bool,
    /// Start in the legacy particle mode
    #[arg(long)]
    legacy: bool,
    /// Dark background
    #[arg(long)]
    dark: bool,
    /// Seed for the legacy particle constants
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    ToggleFrameRate,
    ToggleMode,
    ToggleDark,
    Help,
}

fn key_command(key: &str) -> Option<Command> {
    match key {
        "f" | "F" => Some(Command::ToggleFrameRate),
        "o" | "O" => Some(Command::ToggleMode),
        "d" | "D" => Some(Command::ToggleDark),
        "h" | "H" => Some(Command::Help),
        _ => None,
    }
}

fn log_help() {
    log::info!("keys: F = toggle 30 fps cap, O = toggle legacy mode, D = toggle dark background, H = help, Esc = quit");
}

fn viewport_for(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical = size.to_logical::<f32>(scale_factor);
    Viewport::new(logical.width, logical.height, scale_factor as f32)
}

struct App {
    animator: Animator,
    sink: NativeSink,
    dark: bool,
    started: Instant,
    next_frame: Instant,
    scale_factor: f64,
}

impl App {
    fn new(window: &Window, cli: &Cli) -> Self {
        let scale_factor = window.scale_factor();
        let viewport = viewport_for(window.inner_size(), scale_factor);
        let settings = Settings {
            frame_rate: if cli.fps30 {
                FrameRate::Capped30
            } else {
                FrameRate::Uncapped
            },
            mode: if cli.legacy {
                AnimationMode::Legacy
            } else {
                AnimationMode::Field
            },
            seed: cli.seed.unwrap_or_else(rand::random),
            ..Settings::default()
        };
        log::info!(
            "{}x{} @{}x, {:?} at {:?}, seed {}",
            viewport.width,
            viewport.height,
            scale_factor,
            settings.mode,
            settings.frame_rate,
            settings.seed
        );
        let now = Instant::now();
        Self {
            animator: Animator::new(viewport, settings),
            sink: NativeSink::default(),
            dark: cli.dark,
            started: now,
            next_frame: now,
            scale_factor,
        }
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Window position in logical pixels stands in for the browser's screenX/screenY.
    fn window_metrics(&self, window: &Window) -> WindowMetrics {
        let (screen_x, screen_y) = window
            .outer_position()
            .map(|p| {
                let l = p.to_logical::<f32>(self.scale_factor);
                (l.x, l.y)
            })
            .unwrap_or((0.0, 0.0));
        WindowMetrics {
            screen_x,
            screen_y,
            client_width: self.animator.viewport().width,
        }
    }

    fn start(&mut self, window: &Window) {
        let metrics = self.window_metrics(window);
        self.animator.start(metrics, Some(&mut self.sink));
        self.next_frame = Instant::now();
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.animator.resize(viewport_for(size, self.scale_factor));
        if self.animator.mode() == AnimationMode::Field {
            self.sink.clear();
            self.animator.field().draw(&mut self.sink);
        }
    }

    fn apply(&mut self, command: Command, window: &Window) {
        let metrics = self.window_metrics(window);
        match command {
            Command::ToggleFrameRate => {
                let rate = match self.animator.frame_rate() {
                    FrameRate::Uncapped => FrameRate::Capped30,
                    FrameRate::Capped30 => FrameRate::Uncapped,
                };
                self.animator
                    .set_frame_rate(rate, metrics, Some(&mut self.sink));
                self.next_frame = Instant::now();
            }
            Command::ToggleMode => {
                let mode = match self.animator.mode() {
                    AnimationMode::Field => AnimationMode::Legacy,
                    AnimationMode::Legacy => AnimationMode::Field,
                };
                self.animator.set_mode(mode, metrics, Some(&mut self.sink));
                self.next_frame = Instant::now();
            }
            Command::ToggleDark => {
                self.dark = !self.dark;
                log::info!("dark background: {}", self.dark);
            }
            Command::Help => log_help(),
        }
    }

    fn background(&self) -> wgpu::Color {
        let [r, g, b, a] = if self.dark {
            DARK_BACKGROUND
        } else {
            LIGHT_BACKGROUND
        }
        .to_linear_rgba();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    fn redraw(&mut self, gpu: &mut GpuState<'_>, elwt: &EventLoopWindowTarget<()>) {
        let metrics = self.window_metrics(gpu.window);
        let now = self.now_ms();
        self.animator.frame(now, metrics, Some(&mut self.sink));

        let viewport = self.animator.viewport();
        let instances = self.sink.instances(self.animator.mode());
        match gpu.render([viewport.width, viewport.height], self.background(), &instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("frame skipped: {:?}", e),
        }
    }

    /// Vsync mode redraws back to back; capped mode sleeps until the next 30 fps slot.
    fn schedule(&mut self, window: &Window, elwt: &EventLoopWindowTarget<()>) {
        match self.animator.pacing() {
            Pacing::DisplaySync => {
                elwt.set_control_flow(ControlFlow::Wait);
                window.request_redraw();
            }
            Pacing::Fixed(ms) => {
                let now = Instant::now();
                if now >= self.next_frame {
                    window.request_redraw();
                    self.next_frame = now + Duration::from_secs_f64(ms / 1000.0);
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Balls (native)")
        .with_inner_size(LogicalSize::new(800.0, 600.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App::new(&window, &cli);
    app.start(&window);
    log_help();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                app.resize(size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                app.scale_factor = scale_factor;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(app.scale_factor);
                app.animator.pointer_moved(p.x, p.y);
            }
            WindowEvent::Touch(touch) => {
                let p = touch.location.to_logical::<f32>(app.scale_factor);
                app.animator.pointer_moved(p.x, p.y);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(s) => {
                    if let Some(cmd) = key_command(s.as_str()) {
                        app.apply(cmd, gpu.window);
                    }
                }
                _ => {}
            },
            WindowEvent::RedrawRequested => app.redraw(&mut gpu, elwt),
            _ => {}
        },
        Event::AboutToWait => app.schedule(gpu.window, elwt),
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command("f"), Some(Command::ToggleFrameRate));
        assert_eq!(key_command("O"), Some(Command::ToggleMode));
        assert_eq!(key_command("d"), Some(Command::ToggleDark));
        assert_eq!(key_command("H"), Some(Command::Help));
        assert_eq!(key_command("x"), None);
        assert_eq!(key_command(""), None);
    }

    #[test]
    fn viewport_is_logical() {
        let v = viewport_for(PhysicalSize::new(1600, 1200), 2.0);
        assert_eq!((v.width, v.height, v.device_pixel_ratio), (800.0, 600.0, 2.0));
        assert_eq!(v.device_size(), (1600, 1200));
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::parse_from(["balls-native", "--fps30", "--legacy", "--seed", "7"]);
        assert!(cli.fps30 && cli.legacy && !cli.dark);
        assert_eq!(cli.seed, Some(7));
    }
}
