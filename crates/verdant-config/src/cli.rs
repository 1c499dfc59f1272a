//! Command-line argument parsing for the `verdant` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Procedural scene enrichment.
///
/// Numeric flags override settings loaded from `verdant.ron`. A generator
/// runs only when its object flag is given.
#[derive(Parser, Debug)]
#[command(name = "verdant", about = "Make procedural scenes")]
pub struct CliArgs {
    /// Input scene.
    #[arg(default_value = "scene.json")]
    pub scene: PathBuf,

    /// Output scene.
    #[arg(short, long, default_value = "out.json")]
    pub output: PathBuf,

    /// Terrain object.
    #[arg(long)]
    pub terrain: Option<String>,

    /// Displacement object.
    #[arg(long)]
    pub displacement: Option<String>,

    /// Hair object, receives the strand mesh.
    #[arg(long, requires = "hairbase")]
    pub hair: Option<String>,

    /// Object whose surface grows hair.
    #[arg(long)]
    pub hairbase: Option<String>,

    /// Grass prototype name pattern; every object whose name contains it is scattered.
    #[arg(long, requires = "grassbase")]
    pub grass: Option<String>,

    /// Object whose surface receives the grass.
    #[arg(long)]
    pub grassbase: Option<String>,

    /// Hair strand count.
    #[arg(long)]
    pub hairnum: Option<usize>,

    /// Hair length.
    #[arg(long)]
    pub hairlen: Option<f32>,

    /// Hair noise strength.
    #[arg(long)]
    pub hairstr: Option<f32>,

    /// Hair gravity.
    #[arg(long)]
    pub hairgrav: Option<f32>,

    /// Hair steps per strand.
    #[arg(long)]
    pub hairstep: Option<u32>,

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
        if let Some(count) = args.hairnum {
            self.hair.count = count;
        }
        if let Some(length) = args.hairlen {
            self.hair.length = length;
        }
        if let Some(strength) = args.hairstr {
            self.hair.strength = strength;
        }
        if let Some(gravity) = args.hairgrav {
            self.hair.gravity = gravity;
        }
        if let Some(steps) = args.hairstep {
            self.hair.steps = steps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
