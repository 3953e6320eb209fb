//! One generate-and-render invocation.

use std::path::PathBuf;

use orrery_config::{CliArgs, Config, ConfigError};
use orrery_core::{generate_scene, scene_rng};
use orrery_render::{FrameComposer, FrameSink, RenderError};
use tracing::{info, warn};

use crate::output::Outputs;

/// Longest seamless loop we agree to render.
pub const MAX_LOOP_FRAMES: u64 = 20_000;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(
        "a seamless loop needs {frames} frames (limit {limit}); \
         try fewer planets or a different seed"
    )]
    LoopTooLong { frames: u64, limit: u64 },
}

/// Resolve the config directory: `--config`, else the platform default.
fn config_dir(args: &CliArgs) -> Option<PathBuf> {
    args.config.clone().or_else(Config::default_dir)
}

/// Load the config file (if a directory is available) and apply CLI overrides.
pub fn load_config(args: &CliArgs) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let dir = config_dir(args);
    let mut config = match &dir {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);
    Ok((config, dir))
}

/// Frame count for this run: the loop length in perfect-loop mode, otherwise the configured count.
pub fn frame_count(config: &Config, loop_frames: u64) -> Result<u64, AppError> {
    if !config.animation.perfect_loop {
        return Ok(u64::from(config.animation.frames));
    }
    if loop_frames > MAX_LOOP_FRAMES {
        return Err(AppError::LoopTooLong {
            frames: loop_frames,
            limit: MAX_LOOP_FRAMES,
        });
    }
    Ok(loop_frames)
}

/// Validate, generate, render, and encode. Nothing is generated for an invalid config.
pub fn run(config: &Config) -> Result<(), AppError> {
    config.validate()?;

    let (mut rng, seed) = scene_rng(config.scene.seed);
    info!(seed, "Generating scene");
    let scene = generate_scene(&config.scene, &mut rng)?;

    let frames = frame_count(config, scene.loop_frame_count())?;
    if frames == 0 {
        warn!("Nothing to render");
        return Ok(());
    }

    let composer = FrameComposer::new(config.animation.trail_length);
    let mut outputs = Outputs::open(&config.output, config.animation.delay_ms)?;
    composer.render_sequence(&scene, frames, &mut outputs)?;
    outputs.finish()?;

    info!(
        frames,
        path = %config.output.path.display(),
        "Wrote animation"
    );
    Ok(())
}
