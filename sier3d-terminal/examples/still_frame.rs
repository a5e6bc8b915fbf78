//! Example: render a single frame of the fractal to stdout
//!
//! Usage: cargo run --example still_frame -- [level]

use std::env;
use std::io::{self, stdout};

use sier3d_core::{Camera, RotationState};
use sier3d_terminal::{AsciiRenderer, Scene};

const WIDTH: usize = 100;
const HEIGHT: usize = 40;

fn main() -> io::Result<()> {
    let level = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    let scene = Scene::new(level, 2.0)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    println!(
        "Rendering level {} ({} tetrahedra)...",
        scene.level(),
        scene.shapes().len()
    );

    let mut camera = Camera::new(WIDTH as u32, HEIGHT as u32);
    camera.frame(scene.center(), scene.size());

    let rotation = RotationState::new(0.4, 0.6, 0.0);
    let model = scene.model_matrix(&rotation);

    let mut renderer = AsciiRenderer::new(WIDTH, HEIGHT);
    renderer.render_scene(scene.shapes(), &model, &camera);
    renderer.draw(&mut stdout())?;

    Ok(())
}
