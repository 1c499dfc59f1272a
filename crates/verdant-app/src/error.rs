//! Application error types.

use verdant_config::ConfigError;
use verdant_gen::GenError;
use verdant_scene::SceneError;

/// Any failure that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// A generator was selected without the object it works on.
    #[error("--{0} is required")]
    MissingFlag(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Gen(#[from] GenError),
}
