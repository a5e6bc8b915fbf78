//! SIER3D Terminal Viewer - interactive Sierpinski tetrahedron
//!
//! Controls:
//!   - +/- or digits 0-6: recursion depth
//!   - [ / ]: spin speed, Space: pause
//!   - P: toggle perspective/orthographic projection
//!   - WASD / Arrow Keys: rotate
//!   - E/R: roll rotation
//!   - Q/ESC: quit

use std::io;

use clap::Parser;
use sier3d_core::Spin;
use sier3d_terminal::{Scene, TerminalApp};

#[derive(Parser, Debug)]
#[command(
    name = "sier3d",
    about = "Interactive Sierpinski tetrahedron viewer for the terminal"
)]
struct Args {
    /// Recursion depth of the fractal
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=Scene::MAX_LEVEL as i64)
    )]
    level: u32,

    /// Edge length of the base tetrahedron
    #[arg(short, long, default_value_t = 2.0)]
    size: f32,

    /// Spin speed in radians per frame
    #[arg(long, default_value_t = Spin::DEFAULT_SPEED)]
    speed: f32,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.size.is_finite() || args.size <= 0.0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("--size must be a positive number, got {}", args.size),
        ));
    }

    let scene = Scene::new(args.level, args.size)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    log::info!(
        "starting viewer: level {}, {} tetrahedra",
        scene.level(),
        scene.shapes().len()
    );

    let mut app = TerminalApp::new(scene, Spin::new(args.speed))?;
    app.run()
}
