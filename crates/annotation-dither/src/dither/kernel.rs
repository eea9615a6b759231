//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that have not been processed yet.

/// An error diffusion kernel.
///
/// Each entry is an offset (dx, dy) and a weight. A neighbor receives
/// `error * weight / divisor`; `max_dy` sets how many rows the error buffer
/// must keep (`max_dy + 1`).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries. `dx` is flipped on reversed rows.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8). The
/// dropped quarter keeps flat regions from speckling with distant colors.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
    max_dy: 2,
};

/// Sierra Lite dithering kernel.
///
/// Distributes error to 3 neighbors with 100% propagation (4/4).
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
    max_dy: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_sum(kernel: &Kernel) -> u32 {
        kernel.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }

    #[test]
    fn test_full_propagation_kernels() {
        assert_eq!(weight_sum(&FLOYD_STEINBERG), FLOYD_STEINBERG.divisor as u32);
        assert_eq!(weight_sum(&SIERRA_LITE), SIERRA_LITE.divisor as u32);
    }

    #[test]
    fn test_atkinson_propagates_three_quarters() {
        assert_eq!(weight_sum(&ATKINSON) * 4, ATKINSON.divisor as u32 * 3);
    }

    #[test]
    fn test_max_dy_matches_entries() {
        for kernel in [&FLOYD_STEINBERG, &ATKINSON, &SIERRA_LITE] {
            let max = kernel.entries.iter().map(|&(_, dy, _)| dy).max().unwrap();
            assert_eq!(max as usize, kernel.max_dy);
        }
    }

    #[test]
    fn test_entries_only_reach_unprocessed_pixels() {
        for kernel in [&FLOYD_STEINBERG, &ATKINSON, &SIERRA_LITE] {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy > 0 || dx > 0, "({}, {}) points backwards", dx, dy);
            }
        }
    }
}
