//! Growth configuration parameters.

use crate::error::GrowVecError;

/// Configuration for a growable sequence.
///
/// Controls the initial slot count and the growth multiplier. Validated
/// when consumed by [`GrowVec::with_config`](crate::GrowVec::with_config);
/// all values are immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Number of slots reserved at construction.
    ///
    /// Default: 8. Must be at least 1; a zero-slot store would make
    /// every multiplicative growth step a no-op.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity on each threshold crossing.
    ///
    /// Default: 2 (doubling, which gives amortized O(1) append).
    /// Must be at least 2; a factor of 1 cannot make progress.
    pub growth_factor: usize,
}

impl GrowthConfig {
    /// Default slot count reserved at construction.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Default growth multiplier (doubling).
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity.
    ///
    /// Uses the default doubling growth factor.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check the configuration against the container invariants.
    pub fn validate(&self) -> Result<(), GrowVecError> {
        if self.initial_capacity < 1 {
            return Err(GrowVecError::InvalidConfig {
                reason: format!(
                    "initial_capacity must be at least 1 (got {})",
                    self.initial_capacity,
                ),
            });
        }
        if self.growth_factor < 2 {
            return Err(GrowVecError::InvalidConfig {
                reason: format!(
                    "growth_factor must be at least 2 (got {})",
                    self.growth_factor,
                ),
            });
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
