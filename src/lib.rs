//! One-ray-per-pixel renderer that shades surfaces by their normals.
//!
//! - [`math`] - vectors, rays and colors
//! - [`geometry`] - the [`geometry::Primitive`] contract, spheres and triangles
//! - [`scene`] - closest hit over a list of primitives
//! - [`shading`] - normal coloring and the sky gradient
//! - [`renderer`] - the parallel pixel loop, producing a [`film::Film`]
//! - [`output`] - PPM, PNG and EXR writers
//! - [`parsing`] - JSON scene descriptions

pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod shading;

pub use error::{RenderError, Result};
