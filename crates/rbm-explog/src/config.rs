//! Engine configuration.
//!
//! [`EngineConfig`] is plain data with serde support. Every field has a
//! default, so a config file only lists what it changes:
//!
//! ```yaml
//! tolerance:
//!   small_angle: 1.0e-6
//! check_finite: true
//! ```

use std::path::Path;

use rbm_core::{Error, Result};
use rbm_math::Tolerance;
use serde::{Deserialize, Serialize};

/// Settings for [`NativeEngine`](crate::NativeEngine).
///
/// # Example
///
/// ```rust
/// use rbm_explog::EngineConfig;
///
/// let config = EngineConfig::from_yaml_str("check_finite: true").unwrap();
/// assert!(config.check_finite);
/// assert_eq!(config.tolerance, Default::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Thresholds for series and near-pi fallbacks.
    pub tolerance: Tolerance,
    /// Reject inputs with NaN or infinite entries.
    pub check_finite: bool,
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that tolerances are usable.
    ///
    /// Both thresholds must be finite and positive; `near_pi` must be below
    /// pi/2.
    pub fn validate(&self) -> Result<()> {
        let tol = &self.tolerance;
        if !(tol.small_angle.is_finite() && tol.small_angle > 0.0) {
            return Err(Error::config(format!(
                "tolerance.small_angle must be positive, got {}",
                tol.small_angle
            )));
        }
        if !(tol.near_pi.is_finite() && tol.near_pi > 0.0 && tol.near_pi < std::f64::consts::FRAC_PI_2) {
            return Err(Error::config(format!(
                "tolerance.near_pi must be in (0, pi/2), got {}",
                tol.near_pi
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(!config.check_finite);
        assert_eq!(config.tolerance.small_angle, rbm_math::DEFAULT_SMALL_ANGLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = EngineConfig::from_yaml_str("tolerance:\n  small_angle: 1.0e-6\n").unwrap();
        assert_eq!(config.tolerance.small_angle, 1e-6);
        assert_eq!(config.tolerance.near_pi, rbm_math::DEFAULT_NEAR_PI);
        assert!(!config.check_finite);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(EngineConfig::from_yaml_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_tolerance() {
        let err = EngineConfig::from_yaml_str("tolerance:\n  small_angle: -1.0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let err = EngineConfig::from_yaml_str("tolerance:\n  near_pi: 2.0\n").unwrap_err();
        assert!(err.to_string().contains("near_pi"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = EngineConfig::from_yaml_str("check_finite: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EngineConfig {
            check_finite: true,
            ..Default::default()
        };
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "check_finite: true").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert!(config.check_finite);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::from_file(dir.path().join("engine.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
