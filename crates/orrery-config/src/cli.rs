//! Command-line argument parsing for the orrery renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::SunAlignment;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Render a procedurally generated planetary system as a looping GIF")]
pub struct CliArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of frames to render.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Render exactly one common period of all orbits so the animation loops seamlessly.
    #[arg(long)]
    pub perfect_loop: bool,

    /// Fraction of pixels that receive a background star, in [0, 1].
    #[arg(long)]
    pub star_density: Option<f64>,

    /// Number of orbiting planets.
    #[arg(long)]
    pub planets: Option<u32>,

    /// Sun radius in pixels.
    #[arg(long)]
    pub sun_size: Option<u32>,

    /// Sun placement on the canvas.
    #[arg(long, value_enum)]
    pub sun_alignment: Option<SunAlignment>,

    /// Trail divisor: each trail covers 1/N of an orbit. 0 disables trails.
    #[arg(long)]
    pub trail_length: Option<f64>,

    /// Random seed for reproducible scenes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between frames in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u32>,

    /// Output GIF path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write every frame as a numbered PNG into this directory.
    #[arg(long)]
    pub png_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.scene.width = w;
        }
        if let Some(h) = args.height {
            self.scene.height = h;
        }
        if let Some(density) = args.star_density {
            self.scene.star_density = density;
        }
        if let Some(planets) = args.planets {
            self.scene.planets = planets;
        }
        if let Some(size) = args.sun_size {
            self.scene.sun_size = size;
        }
        if let Some(alignment) = args.sun_alignment {
            self.scene.sun_alignment = alignment;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = Some(seed);
        }
        if let Some(frames) = args.frames {
            self.animation.frames = frames;
        }
        if args.perfect_loop {
            self.animation.perfect_loop = true;
        }
        if let Some(trail) = args.trail_length {
            self.animation.trail_length = trail;
        }
        if let Some(delay) = args.delay_ms {
            self.animation.delay_ms = delay;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref dir) = args.png_dir {
            self.output.png_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(800),
            sun_alignment: Some(SunAlignment::Left),
            perfect_loop: true,
            seed: Some(99),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene.width, 800);
        assert_eq!(config.scene.sun_alignment, SunAlignment::Left);
        assert_eq!(config.scene.seed, Some(99));
        assert!(config.animation.perfect_loop);
        // Non-overridden fields retain defaults
        assert_eq!(config.scene.height, 400);
        assert_eq!(config.animation.frames, 200);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "orrery",
            "--planets",
            "4",
            "--sun-alignment",
            "top",
            "--perfect-loop",
            "--trail-length",
            "0",
            "-o",
            "out.gif",
        ])
        .unwrap();
        assert_eq!(args.planets, Some(4));
        assert_eq!(args.sun_alignment, Some(SunAlignment::Top));
        assert!(args.perfect_loop);
        assert_eq!(args.trail_length, Some(0.0));
        assert_eq!(args.output, Some(PathBuf::from("out.gif")));
    }
}
