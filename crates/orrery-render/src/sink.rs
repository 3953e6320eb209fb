//! Frame sinks: consumers of rendered frames, fed in increasing time order.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::RenderError;

/// Receives frames in time order.
pub trait FrameSink {
    /// Append the next frame.
    fn push_frame(&mut self, frame: &RgbaImage) -> Result<(), RenderError>;

    /// Flush any buffered output. Further frames are rejected.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Keeps frames in memory.
impl FrameSink for Vec<RgbaImage> {
    fn push_frame(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        self.push(frame.clone());
        Ok(())
    }
}

/// NeuQuant sampling speed, 1 (best) to 30 (fastest).
const GIF_SPEED: i32 = 10;

enum GifState<W: Write> {
    /// No frame yet: the logical screen size comes from the first frame.
    Pending(W),
    Encoding(gif::Encoder<W>),
    Finished,
}

/// Encodes an infinitely repeating animated GIF.
pub struct GifSink<W: Write> {
    state: GifState<W>,
    /// Frame delay in hundredths of a second.
    delay: u16,
    frames: usize,
}

impl<W: Write> GifSink<W> {
    /// Start an animation with `delay_ms` between frames.
    pub fn new(writer: W, delay_ms: u32) -> Result<Self, RenderError> {
        let delay = u16::try_from(delay_ms.saturating_add(5) / 10).unwrap_or(u16::MAX);
        Ok(Self {
            state: GifState::Pending(writer),
            delay,
            frames: 0,
        })
    }

    /// Frames encoded so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    fn start(writer: W, width: u16, height: u16) -> Result<gif::Encoder<W>, RenderError> {
        let mut encoder = gif::Encoder::new(writer, width, height, &[])?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        Ok(encoder)
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn push_frame(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        let (width, height) = frame.dimensions();
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(RenderError::FrameTooLarge { width, height });
        };
        let mut encoder = match std::mem::replace(&mut self.state, GifState::Finished) {
            GifState::Pending(writer) => Self::start(writer, w, h)?,
            GifState::Encoding(encoder) => encoder,
            GifState::Finished => return Err(RenderError::Finished),
        };

        let mut pixels = frame.as_raw().clone();
        let mut gif_frame = gif::Frame::from_rgba_speed(w, h, &mut pixels, GIF_SPEED);
        gif_frame.delay = self.delay;
        encoder.write_frame(&gif_frame)?;

        self.state = GifState::Encoding(encoder);
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let mut writer = match std::mem::replace(&mut self.state, GifState::Finished) {
            GifState::Pending(writer) => writer,
            GifState::Encoding(encoder) => encoder.into_inner()?,
            GifState::Finished => return Ok(()),
        };
        writer.flush()?;
        log::debug!("Finished GIF with {} frames", self.frames);
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, ... into a directory.
pub struct PngSequenceSink {
    dir: PathBuf,
    next_index: usize,
}

impl PngSequenceSink {
    /// Create the directory if needed.
    pub fn new(dir: &Path) -> Result<Self, RenderError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            next_index: 0,
        })
    }

    /// Path of frame `index`.
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.png"))
    }
}

impl FrameSink for PngSequenceSink {
    fn push_frame(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        let path = self.frame_path(self.next_index);
        frame.save_with_format(&path, image::ImageFormat::Png)?;
        self.next_index += 1;
        Ok(())
    }
}
