use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::MappingConfig;
use crate::error::MappingError;

/// Seed of every dither gate's generator. Fixed so that the same mask,
/// visited in the same order, always produces the same result.
pub const DITHER_SEED: u64 = 0;

/// Condition deciding whether a sample reaches the wrapped mapping.
#[derive(Debug, Clone)]
pub(crate) enum Gate {
    /// Pass at or above the configured threshold.
    Threshold,
    /// Pass with probability rising linearly across the actual mask range.
    DitherActual(ChaCha8Rng),
    /// Pass with probability `value / mask_max`.
    DitherFull(ChaCha8Rng),
}

impl Gate {
    pub(crate) fn threshold() -> Self {
        Gate::Threshold
    }

    pub(crate) fn dithered_actual_range() -> Self {
        Gate::DitherActual(ChaCha8Rng::seed_from_u64(DITHER_SEED))
    }

    pub(crate) fn dithered_full_range() -> Self {
        Gate::DitherFull(ChaCha8Rng::seed_from_u64(DITHER_SEED))
    }

    pub(crate) fn passes(
        &mut self,
        value: u32,
        config: &MappingConfig,
    ) -> Result<bool, MappingError> {
        match self {
            Gate::Threshold => Ok(value >= config.threshold),
            Gate::DitherActual(rng) => {
                let (low, high) = (config.mask_low_value, config.mask_high_value);
                if value >= high {
                    Ok(true)
                } else if value <= low {
                    Ok(false)
                } else {
                    // low < value < high, so the span is positive
                    let draw = rng.gen_range(0..high - low);
                    Ok(value > low + draw)
                }
            }
            Gate::DitherFull(rng) => {
                if value == 0 {
                    return Ok(false);
                }
                let max = config.mask_max_value;
                if max == 0 {
                    return Err(MappingError::InvalidFullRange);
                }
                Ok(value > rng.gen_range(0..max))
            }
        }
    }

    /// Text appended to the wrapped mapping's description.
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            Gate::Threshold => " where mask is at or above threshold",
            Gate::DitherActual(_) => " (dithered from actual mask range)",
            Gate::DitherFull(_) => " (dithered from full mask range)",
        }
    }
}
