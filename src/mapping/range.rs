use crate::error::MappingError;

/// Which mask range a ranged mapping scales from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// The lowest..highest values observed in the mask.
    Actual,
    /// Zero to the mask's declared maximum.
    Full,
}

impl RangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeMode::Actual => "actual",
            RangeMode::Full => "full",
        }
    }
}

/// Scale `value` from `low..=high` onto `0..=max`.
pub fn remap_actual(value: u32, low: u32, high: u32, max: i32) -> Result<i32, MappingError> {
    if high <= low {
        return Err(MappingError::InvalidActualRange { low, high });
    }
    let scaled = (i64::from(value) - i64::from(low)) * i64::from(max)
        / (i64::from(high) - i64::from(low));
    Ok(clamp(scaled, max))
}

/// Scale `value` from `0..=mask_max` onto `0..=max`.
pub fn remap_full(value: u32, mask_max: u32, max: i32) -> Result<i32, MappingError> {
    if mask_max == 0 {
        return Err(MappingError::InvalidFullRange);
    }
    let scaled = i64::from(value) * i64::from(max) / i64::from(mask_max);
    Ok(clamp(scaled, max))
}

fn clamp(scaled: i64, max: i32) -> i32 {
    scaled.clamp(0, i64::from(max.max(0))) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_endpoints() {
        assert_eq!(remap_actual(20, 20, 220, 255).unwrap(), 0);
        assert_eq!(remap_actual(220, 20, 220, 255).unwrap(), 255);
        assert_eq!(remap_actual(120, 20, 220, 255).unwrap(), 127);
    }

    #[test]
    fn test_full_endpoints() {
        assert_eq!(remap_full(0, 65535, 255).unwrap(), 0);
        assert_eq!(remap_full(65535, 65535, 255).unwrap(), 255);
        assert_eq!(remap_full(32768, 65535, 255).unwrap(), 127);
    }

    #[test]
    fn test_results_are_clamped() {
        // samples outside the configured range land on the layer bounds
        assert_eq!(remap_actual(5, 20, 220, 255).unwrap(), 0);
        assert_eq!(remap_actual(400, 20, 220, 255).unwrap(), 255);
        assert_eq!(remap_full(300, 255, 15).unwrap(), 15);
    }

    #[test]
    fn test_wide_values_do_not_overflow() {
        assert_eq!(remap_full(u32::MAX, u32::MAX, i32::MAX).unwrap(), i32::MAX);
        assert_eq!(remap_actual(u32::MAX, 0, u32::MAX, 1000).unwrap(), 1000);
    }

    #[test]
    fn test_degenerate_actual_range() {
        match remap_actual(10, 10, 10, 255) {
            Err(MappingError::InvalidActualRange { low, high }) => {
                assert_eq!((low, high), (10, 10));
            }
            other => panic!("Expected InvalidActualRange, got {:?}", other),
        }
        assert!(remap_actual(10, 12, 3, 255).is_err());
    }

    #[test]
    fn test_degenerate_full_range() {
        assert!(matches!(
            remap_full(1, 0, 255),
            Err(MappingError::InvalidFullRange)
        ));
    }
}
