use std::io::Stderr;
use std::sync::Mutex;
use std::time::Instant;

use log::{debug, info};
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::film::Film;
use crate::geometry::Primitive;
use crate::math::RGBColor;
use crate::shading::{ray_color, DEFAULT_T_MIN};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub t_min: f64,
    pub show_progress: bool,
}

impl RenderSettings {
    pub fn new(width: usize, height: usize) -> Self {
        RenderSettings {
            width,
            height,
            t_min: DEFAULT_T_MIN,
            show_progress: false,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Viewport coordinates of the center of film pixel `(x, y)`.
///
/// Film row 0 is the top of the image, which is the top (`v` near 1) of the viewport.
pub fn pixel_uv(x: usize, y: usize, width: usize, height: usize) -> (f64, f64) {
    let j = height - 1 - y;
    (
        (x as f64 + 0.5) / width as f64,
        (j as f64 + 0.5) / height as f64,
    )
}

pub fn render_pixel<P: Primitive + ?Sized>(
    scene: &P,
    camera: &Camera,
    settings: &RenderSettings,
    x: usize,
    y: usize,
) -> RGBColor {
    let (u, v) = pixel_uv(x, y, settings.width, settings.height);
    ray_color(camera.get_ray(u, v), scene, settings.t_min)
}

pub fn render<P: Primitive + Sync + ?Sized>(
    scene: &P,
    camera: &Camera,
    settings: &RenderSettings,
) -> Result<Film<RGBColor>> {
    let (w, h) = (settings.width, settings.height);
    if w == 0 || h == 0 {
        return Err(RenderError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    info!("rendering {}x{} with t_min = {}", w, h, settings.t_min);
    debug!("{:?}", camera);
    let start = Instant::now();

    let progress: Option<Mutex<ProgressBar<Stderr>>> = if settings.show_progress {
        let mut pb = ProgressBar::on(std::io::stderr(), h as u64);
        pb.message("Scanlines ");
        Some(Mutex::new(pb))
    } else {
        None
    };

    let mut film = Film::new(w, h, RGBColor::ZERO);
    film.buffer.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, e) in row.iter_mut().enumerate() {
            *e = render_pixel(scene, camera, settings, x, y);
        }
        if let Some(pb) = &progress {
            // poisoned only if another row panicked
            if let Ok(mut pb) = pb.lock() {
                pb.inc();
            }
        }
    });

    if let Some(pb) = progress {
        if let Ok(mut pb) = pb.into_inner() {
            pb.finish_print("Done.");
        }
    }
    info!(
        "rendered {} pixels in {:.3}s",
        film.total_pixels(),
        start.elapsed().as_secs_f64()
    );
    Ok(film)
}
