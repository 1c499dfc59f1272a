//! Configuration for the verdant scene generator.
//!
//! Generator parameters persist to disk as a RON file and can be overridden
//! from the command line. Colours are authored as 0-255 sRGB triples and
//! converted to linear RGB when generator parameters are built.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, DisplacementConfig, GrassConfig, HairConfig, TerrainConfig,
};
pub use error::ConfigError;
