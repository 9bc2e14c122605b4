//! Numerical thresholds for the closed-form maps.

use serde::{Deserialize, Serialize};

/// Default angle below which Taylor series replace closed forms.
pub const DEFAULT_SMALL_ANGLE: f64 = 1e-4;

/// Default distance from pi below which `log3` recovers the axis from the
/// symmetric part of the rotation.
pub const DEFAULT_NEAR_PI: f64 = 1e-3;

/// Thresholds that switch the maps between closed forms and their
/// well-conditioned fallbacks.
///
/// # Example
///
/// ```rust
/// use rbm_math::Tolerance;
///
/// let tol = Tolerance { small_angle: 1e-6, ..Tolerance::default() };
/// assert!(tol.small_angle < Tolerance::default().small_angle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Rotation angle (radians) below which series expansions are used.
    pub small_angle: f64,
    /// Distance from pi (radians) below which the near-pi log branch is used.
    pub near_pi: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            small_angle: DEFAULT_SMALL_ANGLE,
            near_pi: DEFAULT_NEAR_PI,
        }
    }
}
