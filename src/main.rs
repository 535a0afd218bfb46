use std::io::{stdout, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use structopt::StructOpt;

use rust_raycast::output::{save_film, write_ppm};
use rust_raycast::parsing::load_scene;
use rust_raycast::renderer::{render, RenderSettings};
use rust_raycast::scene::Scene;
use rust_raycast::shading::DEFAULT_T_MIN;

const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

#[derive(Debug, StructOpt)]
#[structopt(name = "raycast", about = "Renders a scene by casting one ray per pixel")]
struct Opt {
    /// Image width in pixels
    #[structopt(short, long, default_value = "400")]
    width: usize,

    /// Image height in pixels. Defaults to a 16:9 image.
    #[structopt(long)]
    height: Option<usize>,

    /// JSON scene description. Without one the built-in sphere and triangle are rendered.
    #[structopt(short, long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Output image (.ppm, .png or .exr). PPM goes to stdout when omitted.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Worker threads, defaults to the number of logical cores
    #[structopt(short, long)]
    threads: Option<usize>,

    /// Smallest ray parameter that counts as a hit [default: 0.001]
    #[structopt(long)]
    t_min: Option<f64>,

    /// Don't draw the progress bar
    #[structopt(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build the render thread pool")?;

    let width = opt.width;
    let height = opt
        .height
        .unwrap_or_else(|| ((width as f64 / DEFAULT_ASPECT_RATIO) as usize).max(1));

    let (scene, camera_data) = match &opt.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => (Scene::default_scene(), None),
    };
    info!("{} primitives, {} threads", scene.len(), threads);

    let t_min = opt.t_min.unwrap_or(DEFAULT_T_MIN);
    if t_min <= 0.0 {
        warn!("t_min = {} allows hits at the ray origin", t_min);
    }

    let mut settings = RenderSettings::new(width, height);
    settings.t_min = t_min;
    settings.show_progress = !opt.quiet;

    let camera = camera_data
        .unwrap_or_default()
        .build(settings.aspect_ratio());

    let film = render(&scene, &camera, &settings)?;

    match &opt.output {
        Some(path) => save_film(&film, path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_ppm(&film, BufWriter::new(stdout().lock()))
            .context("failed to write image to stdout")?,
    }
    Ok(())
}
