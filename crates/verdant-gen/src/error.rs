//! Generator error types.

use verdant_scene::SceneError;

/// Errors raised by the generators.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The surface to sample has no faces or zero total area.
    #[error("cannot sample a surface with zero total area")]
    DegenerateSurface,

    /// The mesh lacks a per-vertex attribute the generator needs.
    #[error("mesh is missing per-vertex {0}")]
    MissingAttribute(&'static str),

    /// A generator parameter is outside its valid domain.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Scattering was requested without any prototype objects.
    #[error("no prototype objects to scatter")]
    NoPrototypes,

    /// A scene lookup failed.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Fail with [`GenError::InvalidParameter`] unless `value` is finite and positive.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), GenError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenError::InvalidParameter {
            name,
            reason: format!("must be finite and positive, got {value}"),
        })
    }
}

/// Fail with [`GenError::InvalidParameter`] unless `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<(), GenError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenError::InvalidParameter {
            name,
            reason: format!("must be finite, got {value}"),
        })
    }
}
