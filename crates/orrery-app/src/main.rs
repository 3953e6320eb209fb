//! The `orrery` binary: generate a planetary system and render it as an animated GIF.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orrery-app -- --planets 5 --perfect-loop -o system.gif`.

mod output;
mod run;

use clap::Parser;
use orrery_config::{CliArgs, ConfigError};

use crate::run::AppError;

fn main() {
    let args = CliArgs::parse();

    let (config, dir) = match run::load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => exit_with(AppError::Config(e)),
    };

    let log_dir = dir.map(|d| d.join("logs"));
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run::run(&config) {
        exit_with(e);
    }
}

fn exit_with(error: AppError) -> ! {
    match &error {
        AppError::Config(ConfigError::Invalid(violations)) => {
            eprintln!("Invalid configuration:");
            for violation in violations.iter() {
                eprintln!("  {violation}");
            }
        }
        other => eprintln!("orrery: {other}"),
    }
    std::process::exit(1);
}
