//! The six maps the dispatcher forwards to.
//!
//! [`LieEngine`] has one method per map. The dispatcher never looks inside
//! them: whatever an engine returns, value or error, is handed back to the
//! caller unchanged.
//!
//! [`NativeEngine`] implements the maps with `rbm-math`.

use glam::{DMat3, DMat4, DVec3};
use rbm_core::{Error, Result};
use rbm_math::{exp3_with, exp6_with, log3_with, log6_with, Motion, Vector6, SE3};
use tracing::trace;

use crate::EngineConfig;

/// Exponential and logarithm maps over rigid-body motion types.
///
/// Implementations must be usable from any thread; the dispatcher holds no
/// lock around calls.
pub trait LieEngine: Send + Sync {
    /// Motion -> rigid transform.
    fn exp_motion(&self, motion: &Motion) -> Result<SE3>;

    /// 6-vector twist -> 4x4 homogeneous matrix.
    fn exp_twist(&self, twist: &Vector6) -> Result<DMat4>;

    /// 3-vector rotation generator -> 3x3 rotation matrix.
    fn exp_rotation(&self, generator: DVec3) -> Result<DMat3>;

    /// Rigid transform -> motion.
    fn log_transform(&self, transform: &SE3) -> Result<Motion>;

    /// 4x4 homogeneous matrix -> 6-vector twist.
    fn log_homogeneous(&self, matrix: &DMat4) -> Result<Vector6>;

    /// 3x3 rotation matrix -> 3-vector rotation generator.
    fn log_rotation(&self, rotation: &DMat3) -> Result<DVec3>;
}

/// Closed-form engine backed by `rbm-math`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rbm_explog::{LieEngine, NativeEngine};
///
/// let engine = NativeEngine::default();
/// let r = engine.exp_rotation(DVec3::new(0.0, 0.0, 0.5)).unwrap();
/// let w = engine.log_rotation(&r).unwrap();
/// assert!(w.abs_diff_eq(DVec3::new(0.0, 0.0, 0.5), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine {
    config: EngineConfig,
}

impl NativeEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    fn ensure_finite(&self, finite: bool, what: &'static str) -> Result<()> {
        if self.config.check_finite && !finite {
            return Err(Error::NonFinite { what });
        }
        Ok(())
    }
}

impl LieEngine for NativeEngine {
    fn exp_motion(&self, motion: &Motion) -> Result<SE3> {
        self.ensure_finite(motion.is_finite(), "motion")?;
        trace!("native exp6 from motion");
        Ok(exp6_with(motion, &self.config.tolerance))
    }

    fn exp_twist(&self, twist: &Vector6) -> Result<DMat4> {
        self.ensure_finite(twist.is_finite(), "twist vector")?;
        trace!("native exp6 from vector");
        Ok(exp6_with(&Motion::from(*twist), &self.config.tolerance).to_homogeneous())
    }

    fn exp_rotation(&self, generator: DVec3) -> Result<DMat3> {
        self.ensure_finite(generator.is_finite(), "rotation generator")?;
        trace!("native exp3");
        Ok(exp3_with(generator, &self.config.tolerance))
    }

    fn log_transform(&self, transform: &SE3) -> Result<Motion> {
        self.ensure_finite(transform.is_finite(), "transform")?;
        trace!("native log6 from SE3");
        Ok(log6_with(transform, &self.config.tolerance))
    }

    fn log_homogeneous(&self, matrix: &DMat4) -> Result<Vector6> {
        self.ensure_finite(matrix.is_finite(), "homogeneous matrix")?;
        trace!("native log6 from matrix");
        let transform = SE3::from_homogeneous(matrix);
        Ok(log6_with(&transform, &self.config.tolerance).into())
    }

    fn log_rotation(&self, rotation: &DMat3) -> Result<DVec3> {
        self.ensure_finite(rotation.is_finite(), "rotation matrix")?;
        trace!("native log3");
        Ok(log3_with(rotation, &self.config.tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twist_and_motion_agree() {
        let engine = NativeEngine::default();
        let motion = Motion::new(DVec3::new(0.1, 0.2, 0.3), DVec3::new(-0.5, 0.4, 0.9));
        let from_motion = engine.exp_motion(&motion).unwrap().to_homogeneous();
        let from_twist = engine.exp_twist(&Vector6::from(motion)).unwrap();
        assert_eq!(from_motion, from_twist);
    }

    #[test]
    fn test_log_homogeneous_inverts_exp_twist() {
        let engine = NativeEngine::default();
        let twist = Vector6::from([0.5, -1.0, 2.0, 0.1, 0.2, -0.3]);
        let h = engine.exp_twist(&twist).unwrap();
        let back = engine.log_homogeneous(&h).unwrap();
        for i in 0..6 {
            assert!((back[i] - twist[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_non_finite_passes_by_default() {
        let engine = NativeEngine::default();
        let r = engine.exp_rotation(DVec3::new(f64::NAN, 0.0, 0.0)).unwrap();
        assert!(!r.is_finite());
    }

    #[test]
    fn test_check_finite_rejects() {
        let engine = NativeEngine::new(EngineConfig {
            check_finite: true,
            ..Default::default()
        });
        let err = engine.exp_rotation(DVec3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::NonFinite { what: "rotation generator" }));

        let mut h = DMat4::IDENTITY;
        h.w_axis.x = f64::INFINITY;
        assert!(engine.log_homogeneous(&h).is_err());
        assert!(engine.log_rotation(&DMat3::IDENTITY).is_ok());
    }
}
