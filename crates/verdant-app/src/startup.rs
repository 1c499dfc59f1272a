//! Config loading for the binary, reported once logging is up.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use verdant_config::{CliArgs, Config, ConfigError};

/// Where the effective config came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from an existing file.
    Loaded(PathBuf),
    /// No file existed; defaults were written to this path.
    Created(PathBuf),
    /// Loading failed and built-in defaults are in use.
    Fallback(ConfigError),
}

/// Effective config plus how it was obtained.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Emit the config source. Call after the subscriber is installed.
    pub fn report(&self) {
        match &self.source {
            ConfigSource::Loaded(path) => info!(path = %path.display(), "Loaded config"),
            ConfigSource::Created(path) => info!(path = %path.display(), "Created default config"),
            ConfigSource::Fallback(e) => warn!(error = %e, "Failed to load config, using defaults"),
        }
    }
}

/// Load `verdant.ron` from `config_dir` (creating it if absent) and apply
/// CLI overrides. Never fails; errors are kept for [`LoadedConfig::report`].
pub fn load_config(config_dir: &Path, args: &CliArgs) -> LoadedConfig {
    let path = Config::path(config_dir);
    let existed = path.exists();
    let (mut config, source) = match Config::load_or_create(config_dir) {
        Ok(config) if existed => (config, ConfigSource::Loaded(path)),
        Ok(config) => (config, ConfigSource::Created(path)),
        Err(e) => (Config::default(), ConfigSource::Fallback(e)),
    };
    config.apply_cli_overrides(args);
    LoadedConfig { config, source }
}
