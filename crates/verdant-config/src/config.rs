//! Generator settings with reference defaults and RON persistence.

use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use verdant_gen::{DisplacementParams, GrassParams, HairParams, RatioPolicy, TerrainParams};
use verdant_scene::srgb8;

use crate::error::ConfigError;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE: &str = "verdant.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generator settings.
    pub terrain: TerrainConfig,
    /// Displacement generator settings.
    pub displacement: DisplacementConfig,
    /// Hair generator settings.
    pub hair: HairConfig,
    /// Grass generator settings.
    pub grass: GrassConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Radius of the radial falloff.
    pub size: f32,
    /// Centre of the radial falloff.
    pub center: [f32; 3],
    /// Maximum displacement.
    pub height: f32,
    /// Noise frequency multiplier.
    pub scale: f32,
    /// Ridge octave count.
    pub octaves: u32,
    /// sRGB colour of the lowest band.
    pub bottom: [u8; 3],
    /// sRGB colour of the middle band.
    pub middle: [u8; 3],
    /// sRGB colour of the highest band.
    pub top: [u8; 3],
    /// Falloff treatment beyond `size`.
    pub falloff: RatioPolicy,
}

/// Displacement generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplacementConfig {
    /// Displacement amplitude.
    pub height: f32,
    /// Noise frequency multiplier.
    pub scale: f32,
    /// Turbulence octave count.
    pub octaves: u32,
    /// sRGB colour of undisplaced vertices.
    pub bottom: [u8; 3],
    /// sRGB colour at full displacement.
    pub top: [u8; 3],
    /// Treatment of magnitudes above `height`.
    pub magnitude: RatioPolicy,
}

/// Hair generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HairConfig {
    /// Number of strands.
    pub count: usize,
    /// Segments per strand.
    pub steps: u32,
    /// Strand length.
    pub length: f32,
    /// Noise frequency multiplier.
    pub scale: f32,
    /// Noise perturbation amplitude.
    pub strength: f32,
    /// Per-step downward pull.
    pub gravity: f32,
    /// sRGB root colour.
    pub bottom: [u8; 3],
    /// sRGB tip colour.
    pub top: [u8; 3],
    /// Line radius.
    pub thickness: f32,
    /// Random stream seed.
    pub seed: u64,
    /// Append sampled roots to the base mesh.
    pub extend_base: bool,
}

/// Grass scatter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GrassConfig {
    /// Number of instances.
    pub count: usize,
    /// Random stream seed, shared by sampling and per-instance draws.
    pub seed: u64,
    /// Uniform scale range.
    pub scale_range: (f32, f32),
    /// Tilt range in radians.
    pub tilt_range: (f32, f32),
    /// Yaw range in radians.
    pub yaw_range: (f32, f32),
    /// Append sampled points to the placement mesh.
    pub extend_base: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 0.1,
            center: [0.0; 3],
            height: 0.1,
            scale: 10.0,
            octaves: 8,
            bottom: [154, 205, 50],
            middle: [205, 133, 63],
            top: [240, 255, 255],
            falloff: RatioPolicy::Extrapolate,
        }
    }
}

impl Default for DisplacementConfig {
    fn default() -> Self {
        Self {
            height: 0.02,
            scale: 50.0,
            octaves: 8,
            bottom: [64, 224, 208],
            top: [244, 164, 96],
            magnitude: RatioPolicy::Extrapolate,
        }
    }
}

impl Default for HairConfig {
    fn default() -> Self {
        Self {
            count: 100_000,
            steps: 1,
            length: 0.02,
            scale: 250.0,
            strength: 0.01,
            gravity: 0.0,
            bottom: [25, 25, 25],
            top: [244, 164, 96],
            thickness: 0.0001,
            seed: 19_873_991,
            extend_base: true,
        }
    }
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            seed: 198_767,
            scale_range: (0.9, 1.0),
            tilt_range: (0.1, 0.2),
            yaw_range: (0.0, TAU),
            extend_base: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Generator parameters ---

impl TerrainConfig {
    /// Terrain generator parameters with colours in linear RGB.
    pub fn params(&self) -> TerrainParams {
        TerrainParams {
            size: self.size,
            center: Vec3::from_array(self.center),
            height: self.height,
            scale: self.scale,
            octaves: self.octaves,
            bottom: srgb8(self.bottom),
            middle: srgb8(self.middle),
            top: srgb8(self.top),
            falloff: self.falloff,
        }
    }
}

impl DisplacementConfig {
    /// Displacement generator parameters with colours in linear RGB.
    pub fn params(&self) -> DisplacementParams {
        DisplacementParams {
            height: self.height,
            scale: self.scale,
            octaves: self.octaves,
            bottom: srgb8(self.bottom),
            top: srgb8(self.top),
            magnitude: self.magnitude,
        }
    }
}

impl HairConfig {
    /// Hair generator parameters with colours in linear RGB.
    pub fn params(&self) -> HairParams {
        HairParams {
            count: self.count,
            steps: self.steps,
            length: self.length,
            scale: self.scale,
            strength: self.strength,
            gravity: self.gravity,
            bottom: srgb8(self.bottom),
            top: srgb8(self.top),
            thickness: self.thickness,
            extend_base: self.extend_base,
        }
    }
}

impl GrassConfig {
    /// Scatter generator parameters.
    pub fn params(&self) -> GrassParams {
        GrassParams {
            count: self.count,
            scale_range: self.scale_range,
            tilt_range: self.tilt_range,
            yaw_range: self.yaw_range,
            extend_base: self.extend_base,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(config_dir);

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            ron::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok(config)
        }
    }

    /// Save config to the given directory as [`CONFIG_FILE`].
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = Self::path(config_dir);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }
}
