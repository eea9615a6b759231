//! Dithering options and configuration.

/// Configuration options for error diffusion dithering.
///
/// # Defaults
///
/// - Serpentine scanning: enabled
/// - Error clamp: 0.5 (in unit channel range)
///
/// # Example
///
/// ```
/// use annotation_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .serpentine(false)
///     .error_clamp(0.3);
/// assert!(!options.serpentine);
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Enable serpentine scanning (alternating row direction).
    ///
    /// Odd rows are processed right-to-left with the kernel mirrored, which
    /// avoids diagonal streaks in large flat regions.
    ///
    /// Default: `true`
    pub serpentine: bool,

    /// Maximum accumulated error per channel.
    ///
    /// A pixel plus its accumulated error is clamped to
    /// `[-error_clamp, 1.0 + error_clamp]` before matching, so a run of
    /// far-off pixels cannot push its neighbors to an extreme color.
    ///
    /// Default: `0.5`
    pub error_clamp: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            serpentine: true,
            error_clamp: 0.5,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Set the error clamp.
    #[inline]
    pub fn error_clamp(mut self, clamp: f32) -> Self {
        self.error_clamp = clamp;
        self
    }
}
