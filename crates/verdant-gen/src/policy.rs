//! How generators treat ratios that are nominally in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Treatment of a nominally unit-range ratio such as a radial falloff or a
/// normalized displacement magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioPolicy {
    /// Use the raw ratio; values outside `[0, 1]` extrapolate.
    #[default]
    Extrapolate,
    /// Clamp the ratio to `[0, 1]`.
    Clamp,
}

impl RatioPolicy {
    /// Apply the policy to a ratio.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Extrapolate => t,
            Self::Clamp => t.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolate_passes_through() {
        assert_eq!(RatioPolicy::Extrapolate.apply(-0.5), -0.5);
        assert_eq!(RatioPolicy::Extrapolate.apply(1.7), 1.7);
    }

    #[test]
    fn test_clamp_limits_range() {
        assert_eq!(RatioPolicy::Clamp.apply(-0.5), 0.0);
        assert_eq!(RatioPolicy::Clamp.apply(0.25), 0.25);
        assert_eq!(RatioPolicy::Clamp.apply(1.7), 1.0);
    }

    #[test]
    fn test_default_is_extrapolate() {
        assert_eq!(RatioPolicy::default(), RatioPolicy::Extrapolate);
    }
}
