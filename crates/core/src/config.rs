//! Tunable engine constants.
//!
//! Every threshold the rules use is a named constant here. [`EngineConfig`]
//! bundles the ones a host may want to override; tests and the API server
//! construct it explicitly, everything else uses [`EngineConfig::default`].

use crate::error::CoreError;
use crate::types::Watts;

/// Motherboard, fans and misc draw added on top of the per-part loads.
pub const BASELINE_OVERHEAD_WATTS: Watts = 50;

/// PSU rating must reach `estimated_power * PSU_HEADROOM_FACTOR` to avoid a
/// headroom warning.
pub const PSU_HEADROOM_FACTOR: f64 = 1.2;

/// Minimum CPU/GPU tier distance that triggers a performance warning.
pub const PERFORMANCE_TIER_GAP: u8 = 2;

/// Engine parameters that may be overridden per host.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub baseline_watts: Watts,
    pub headroom_factor: f64,
    pub performance_tier_gap: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline_watts: BASELINE_OVERHEAD_WATTS,
            headroom_factor: PSU_HEADROOM_FACTOR,
            performance_tier_gap: PERFORMANCE_TIER_GAP,
        }
    }
}

impl EngineConfig {
    /// Reject values that would make the rules meaningless.
    ///
    /// A headroom factor below 1.0 would let the warning threshold fall under
    /// the blocking one; a zero tier gap would flag every build.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.headroom_factor.is_finite() || self.headroom_factor < 1.0 {
            return Err(CoreError::Validation(format!(
                "headroom_factor must be a finite value >= 1.0, got {}",
                self.headroom_factor
            )));
        }
        if self.performance_tier_gap == 0 {
            return Err(CoreError::Validation(
                "performance_tier_gap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
