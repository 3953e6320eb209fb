//! Fan-out of rendered frames to the configured outputs.

use std::fs::File;
use std::io::BufWriter;

use orrery_config::OutputConfig;
use orrery_render::{FrameSink, GifSink, PngSequenceSink, RenderError, RgbaImage};

/// The GIF plus an optional PNG sequence.
pub struct Outputs {
    gif: GifSink<BufWriter<File>>,
    png: Option<PngSequenceSink>,
}

impl Outputs {
    /// The PNG directory is created before the GIF file.
    pub fn open(config: &OutputConfig, delay_ms: u32) -> Result<Self, RenderError> {
        let png = config
            .png_dir
            .as_deref()
            .map(PngSequenceSink::new)
            .transpose()?;
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = BufWriter::new(File::create(&config.path)?);
        let gif = GifSink::new(file, delay_ms)?;
        Ok(Self { gif, png })
    }
}

impl FrameSink for Outputs {
    fn push_frame(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        self.gif.push_frame(frame)?;
        if let Some(png) = &mut self.png {
            png.push_frame(frame)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.gif.finish()?;
        if let Some(png) = &mut self.png {
            png.finish()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_png_dir_leaves_no_gif() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = OutputConfig {
            path: dir.path().join("system.gif"),
            png_dir: Some(blocker.join("frames")),
        };

        assert!(Outputs::open(&config, 40).is_err());
        assert!(!config.path.exists());
    }
}
