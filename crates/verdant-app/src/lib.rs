//! Scene enrichment pipeline behind the `verdant` binary.

mod error;
mod pipeline;
pub mod platform;
mod startup;

pub use error::AppError;
pub use pipeline::{RunSummary, generate, run};
pub use startup::{ConfigSource, LoadedConfig, load_config};
