//! Software rendering for orrery scenes.
//!
//! [`FrameComposer`] turns a [`Scene`](orrery_core::Scene) and a time step into
//! drawing calls on a [`DrawSurface`]. [`RasterSurface`] rasterizes them into an
//! RGBA image, and a [`FrameSink`] collects the frames in time order, either as an
//! animated GIF or as a numbered PNG sequence.

mod composer;
mod error;
mod sink;
mod surface;

pub use image::RgbaImage;

pub use composer::{FrameComposer, star_color};
pub use error::RenderError;
pub use sink::{FrameSink, GifSink, PngSequenceSink};
pub use surface::{DrawSurface, RasterSurface};
