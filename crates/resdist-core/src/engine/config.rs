use thiserror::Error;

/// Distance cutoff used when none is configured, in the units of the input coordinates.
pub const DEFAULT_CUTOFF: f64 = 6.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Cutoff must be a finite, non-negative distance (got {0})")]
    InvalidCutoff(f64),
}

/// How the center of mass is obtained for residues whose atoms lack masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassPolicy {
    /// Fail with a missing-mass error.
    #[default]
    Strict,
    /// Use the residue's center of geometry instead, with a warning.
    GeometricFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProximityConfig {
    pub cutoff: f64,
    pub mass_policy: MassPolicy,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            mass_policy: MassPolicy::default(),
        }
    }
}

#[derive(Default)]
pub struct ProximityConfigBuilder {
    cutoff: Option<f64>,
    mass_policy: Option<MassPolicy>,
}

impl ProximityConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn mass_policy(mut self, policy: MassPolicy) -> Self {
        self.mass_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<ProximityConfig, ConfigError> {
        let cutoff = self.cutoff.ok_or(ConfigError::MissingParameter("cutoff"))?;
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(ConfigError::InvalidCutoff(cutoff));
        }
        Ok(ProximityConfig {
            cutoff,
            mass_policy: self.mass_policy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_config_with_given_values() {
        let config = ProximityConfigBuilder::new()
            .cutoff(4.5)
            .mass_policy(MassPolicy::GeometricFallback)
            .build()
            .unwrap();
        assert_eq!(config.cutoff, 4.5);
        assert_eq!(config.mass_policy, MassPolicy::GeometricFallback);
    }

    #[test]
    fn builder_defaults_to_strict_mass_policy() {
        let config = ProximityConfigBuilder::new().cutoff(6.0).build().unwrap();
        assert_eq!(config.mass_policy, MassPolicy::Strict);
    }

    #[test]
    fn builder_requires_cutoff() {
        let result = ProximityConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("cutoff")));
    }

    #[test]
    fn builder_rejects_negative_and_non_finite_cutoffs() {
        assert!(matches!(
            ProximityConfigBuilder::new().cutoff(-1.0).build(),
            Err(ConfigError::InvalidCutoff(_))
        ));
        assert!(matches!(
            ProximityConfigBuilder::new().cutoff(f64::NAN).build(),
            Err(ConfigError::InvalidCutoff(_))
        ));
        assert!(matches!(
            ProximityConfigBuilder::new().cutoff(f64::INFINITY).build(),
            Err(ConfigError::InvalidCutoff(_))
        ));
    }

    #[test]
    fn zero_cutoff_is_allowed() {
        assert!(ProximityConfigBuilder::new().cutoff(0.0).build().is_ok());
    }

    #[test]
    fn default_config_uses_default_cutoff() {
        assert_eq!(ProximityConfig::default().cutoff, DEFAULT_CUTOFF);
    }
}
