//! Render and encode error types.

/// Errors raised while encoding or writing frames.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Image encoding failed.
    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),

    /// GIF encoding or writing failed.
    #[error("failed to write GIF: {0}")]
    Gif(#[from] gif::EncodingError),

    /// GIF frames are limited to 65535 pixels per side.
    #[error("frame of {width}x{height} is too large for GIF")]
    FrameTooLarge { width: u32, height: u32 },

    /// Filesystem access failed.
    #[error("frame output I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A frame was pushed after the sink was finished.
    #[error("frame sink already finished")]
    Finished,
}
