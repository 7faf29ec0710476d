use std::path::PathBuf;

use clap::Parser;
use easel::{DrawList, EaselModule, Options, Viewer};
use glam::{Mat4, Vec3};

/// Multi-camera 3D viewer.
#[derive(Debug, Parser)]
#[command(name = "easel", version, about)]
struct Args {
    /// TOML options file.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Camera file to load and save instead of the one in the temp dir.
    #[arg(long)]
    cameras: Option<PathBuf>,

    /// Number of camera slots when no camera file exists yet.
    #[arg(long)]
    count: Option<usize>,
}

/// Corners of the demo triangle.
const TRIANGLE_POSITIONS: [Vec3; 3] = [Vec3::ZERO, Vec3::X, Vec3::Y];

/// Corner colors: black, red and green.
const TRIANGLE_COLORS: [[f32; 4]; 3] = [
    [0.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
];

const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Draws a vertex-colored triangle scaled by ten. `T` shows or hides it.
struct TriangleModule {
    visible: bool,
    scale: f32,
}

impl Default for TriangleModule {
    fn default() -> Self {
        Self {
            visible: true,
            scale: 10.0,
        }
    }
}

impl EaselModule for TriangleModule {
    fn name(&self) -> &str {
        "triangle"
    }

    fn draw(&self, list: &mut DrawList) {
        if !self.visible {
            return;
        }
        let previous = list.set_transform(Mat4::from_scale(Vec3::splat(self.scale)));
        list.mesh(&TRIANGLE_POSITIONS, &TRIANGLE_COLORS, &TRIANGLE_INDICES);
        let _ = list.set_transform(previous);
    }

    fn handle_key(&mut self, chord: &str) -> bool {
        if chord == "KeyT" {
            self.visible = !self.visible;
            true
        } else {
            false
        }
    }
}

fn load_options(args: &Args) -> Result<Options, easel::EaselError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(path) = &args.cameras {
        options.camera.camera_file = Some(path.clone());
    }
    if let Some(count) = args.count {
        options.camera.count = count;
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let result = Viewer::builder()
        .with_title("Easel")
        .with_options(options)
        .with_module(Box::<TriangleModule>::default())
        .build()
        .run();
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
