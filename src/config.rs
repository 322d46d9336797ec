//! Tuning parameters for the clustering stage.

use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, Result};

/// Default radius for seed density counting, in kilometers.
pub const DEFAULT_NEIGHBOR_RADIUS_KM: f64 = 5.0;
/// Default number of seed candidates examined per trip.
pub const DEFAULT_SEED_SAMPLE_SIZE: usize = 50;
/// Default number of orders examined for density counting and growth.
pub const DEFAULT_NEIGHBOR_SAMPLE_SIZE: usize = 100;

/// How `neighbor_radius_km` affects trip growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Radius only scores seed density; growth reaches any distance that
    /// capacity allows.
    #[default]
    Advisory,
    /// Growth also stops at the first candidate farther than the radius
    /// from the trip centroid.
    HardCutoff,
}

/// Clustering configuration.
///
/// All fields have defaults, so an empty JSON object is a valid config.
///
/// # Examples
///
/// ```
/// use u_allocation::config::{AllocationConfig, RadiusPolicy};
///
/// let cfg = AllocationConfig::default()
///     .with_neighbor_radius_km(2.5)
///     .with_radius_policy(RadiusPolicy::HardCutoff);
/// assert_eq!(cfg.neighbor_radius_km, 2.5);
/// assert_eq!(cfg.seed_sample_size, 50);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Radius used when counting seed neighbors.
    pub neighbor_radius_km: f64,
    /// Seed candidates drawn per trip.
    pub seed_sample_size: usize,
    /// Orders drawn for density counting and for each growth step.
    pub neighbor_sample_size: usize,
    /// Whether the radius also bounds trip growth.
    pub radius_policy: RadiusPolicy,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            neighbor_radius_km: DEFAULT_NEIGHBOR_RADIUS_KM,
            seed_sample_size: DEFAULT_SEED_SAMPLE_SIZE,
            neighbor_sample_size: DEFAULT_NEIGHBOR_SAMPLE_SIZE,
            radius_policy: RadiusPolicy::Advisory,
        }
    }
}

impl AllocationConfig {
    /// Sets the neighbor radius.
    pub fn with_neighbor_radius_km(mut self, km: f64) -> Self {
        self.neighbor_radius_km = km;
        self
    }

    /// Sets the seed sample size.
    pub fn with_seed_sample_size(mut self, n: usize) -> Self {
        self.seed_sample_size = n;
        self
    }

    /// Sets the neighbor sample size.
    pub fn with_neighbor_sample_size(mut self, n: usize) -> Self {
        self.neighbor_sample_size = n;
        self
    }

    /// Sets the radius policy.
    pub fn with_radius_policy(mut self, policy: RadiusPolicy) -> Self {
        self.radius_policy = policy;
        self
    }

    /// Checks that the radius is positive and finite and both sample sizes
    /// are at least 1.
    pub fn validate(&self) -> Result<()> {
        if !self.neighbor_radius_km.is_finite() || self.neighbor_radius_km <= 0.0 {
            return Err(AllocationError::InvalidConfiguration(format!(
                "neighbor_radius_km must be a positive number, got {}",
                self.neighbor_radius_km
            )));
        }
        if self.seed_sample_size == 0 {
            return Err(AllocationError::InvalidConfiguration(
                "seed_sample_size must be at least 1".into(),
            ));
        }
        if self.neighbor_sample_size == 0 {
            return Err(AllocationError::InvalidConfiguration(
                "neighbor_sample_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Checks that a vehicle capacity is positive and finite.
pub fn validate_capacity(vehicle_capacity_kg: f64) -> Result<()> {
    if !vehicle_capacity_kg.is_finite() || vehicle_capacity_kg <= 0.0 {
        return Err(AllocationError::InvalidConfiguration(format!(
            "vehicle_capacity_kg must be a positive number, got {vehicle_capacity_kg}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AllocationConfig::default();
        assert_eq!(cfg.neighbor_radius_km, 5.0);
        assert_eq!(cfg.seed_sample_size, 50);
        assert_eq!(cfg.neighbor_sample_size, 100);
        assert_eq!(cfg.radius_policy, RadiusPolicy::Advisory);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = AllocationConfig::default()
            .with_neighbor_radius_km(1.0)
            .with_seed_sample_size(10)
            .with_neighbor_sample_size(20)
            .with_radius_policy(RadiusPolicy::HardCutoff);
        assert_eq!(cfg.neighbor_radius_km, 1.0);
        assert_eq!(cfg.seed_sample_size, 10);
        assert_eq!(cfg.neighbor_sample_size, 20);
        assert_eq!(cfg.radius_policy, RadiusPolicy::HardCutoff);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            AllocationConfig::default().with_neighbor_radius_km(0.0),
            AllocationConfig::default().with_neighbor_radius_km(-1.0),
            AllocationConfig::default().with_neighbor_radius_km(f64::NAN),
            AllocationConfig::default().with_seed_sample_size(0),
            AllocationConfig::default().with_neighbor_sample_size(0),
        ];
        for cfg in &bad {
            assert!(matches!(
                cfg.validate(),
                Err(AllocationError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(100.0).is_ok());
        assert!(validate_capacity(0.0).is_err());
        assert!(validate_capacity(-5.0).is_err());
        assert!(validate_capacity(f64::INFINITY).is_err());
        assert!(validate_capacity(f64::NAN).is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: AllocationConfig =
            serde_json::from_str(r#"{"neighbor_radius_km": 2.0, "radius_policy": "hard_cutoff"}"#)
                .expect("valid config");
        assert_eq!(cfg.neighbor_radius_km, 2.0);
        assert_eq!(cfg.seed_sample_size, 50);
        assert_eq!(cfg.radius_policy, RadiusPolicy::HardCutoff);

        let empty: AllocationConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(empty, AllocationConfig::default());
    }
}
