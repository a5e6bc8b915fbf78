//! Terminal front-end for the Sierpinski tetrahedron viewer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use sier3d_core::{Camera, FractalError, ProjectionMode, RotationState, Spin};

pub mod renderer;
pub mod scene;

pub use renderer::AsciiRenderer;
pub use scene::Scene;

/// Main application struct for the interactive fractal viewer
pub struct TerminalApp {
    scene: Scene,
    rotation: RotationState,
    spin: Spin,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, spin: Spin) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut camera = Camera::new(width as u32, height as u32);
        camera.frame(scene.center(), scene.size());

        Ok(Self {
            scene,
            rotation: RotationState::new(0.3, 0.3, 0.0),
            spin,
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.rotation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.rotation.rotate(0.0, 0.0, -0.1);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.scene.raise_level().map_err(invalid_input)?;
                }
                KeyCode::Char('-') | KeyCode::Char('_') => {
                    self.scene.lower_level().map_err(invalid_input)?;
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let level = c.to_digit(10).unwrap_or(0);
                    self.scene.set_level(level).map_err(invalid_input)?;
                }
                KeyCode::Char('p') => {
                    self.camera.mode = match self.camera.mode {
                        ProjectionMode::Perspective => ProjectionMode::Orthographic,
                        ProjectionMode::Orthographic => ProjectionMode::Perspective,
                    };
                }
                KeyCode::Char('[') => {
                    self.spin.adjust(-Spin::SPEED_STEP);
                }
                KeyCode::Char(']') => {
                    self.spin.adjust(Spin::SPEED_STEP);
                }
                KeyCode::Char(' ') => {
                    self.spin.toggle_pause();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        self.spin.apply(&mut self.rotation);
    }

    fn render(&mut self) -> io::Result<()> {
        let model = self.scene.model_matrix(&self.rotation);

        // Clear renderer
        self.renderer.clear();

        // Render the whole shape group under one model matrix
        self.renderer
            .render_scene(self.scene.shapes(), &model, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let paused = if self.spin.is_paused() { " (paused)" } else { "" };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "SIER3D | Level: {} ({} tetra) | Spin: {:.3}{} | FPS: {:.1} | +/- Depth [ ] Speed Space=Pause Q=Quit",
                self.scene.level(),
                self.scene.shapes().len(),
                self.spin.speed(),
                paused,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn invalid_input(error: FractalError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}
