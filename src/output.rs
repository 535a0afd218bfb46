use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{RenderError, Result};
use crate::film::Film;
use crate::math::RGBColor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
    Exr,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<OutputFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            "exr" => Ok(OutputFormat::Exr),
            _ => Err(RenderError::UnsupportedFormat(ext)),
        }
    }
}

/// Plain text `P3` image: header, then one `r g b` line per pixel, top row first.
pub fn write_ppm<W: Write>(film: &Film<RGBColor>, mut writer: W) -> Result<()> {
    write!(writer, "P3\n{} {}\n255\n", film.width, film.height)?;
    for pixel in film.buffer.iter() {
        let [r, g, b] = pixel.to_rgb8();
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_png(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    let img = image::RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        image::Rgb(film.at(x as usize, y as usize).to_rgb8())
    });
    img.save(path)?;
    Ok(())
}

pub fn write_exr(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    // linear values, no quantization
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        film.at(x, y).as_f32_tuple()
    })?;
    Ok(())
}

pub fn save_film(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Ppm => {
            let file = File::create(path)?;
            write_ppm(film, BufWriter::new(file))?;
        }
        OutputFormat::Png => write_png(film, path)?,
        OutputFormat::Exr => write_exr(film, path)?,
    }
    info!("wrote {:?} image to {}", format, path.display());
    Ok(())
}
