//! Configuration system for the orrery renderer.
//!
//! Provides scene, animation, and output settings that persist to disk as RON
//! files. Supports CLI overrides via clap, reload change detection, and range
//! validation that reports every violation at once.

mod cli;
mod config;
mod error;
mod validate;

pub use cli::CliArgs;
pub use config::{AnimationConfig, Config, DebugConfig, OutputConfig, SceneConfig, SunAlignment};
pub use error::{ConfigError, ConfigViolation, Violations};
pub use validate::MIN_DIMENSION;
