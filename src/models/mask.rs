use std::fmt;

use crate::error::MaskError;

/// What kind of samples a mask carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// Scalar intensities, e.g. a grayscale heightmap.
    Scalar,
    /// Packed 32-bit ARGB colors.
    Color,
}

impl MaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskKind::Scalar => "scalar",
            MaskKind::Color => "color",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MaskSamples {
    Scalar { data: Vec<u32>, max_value: u32 },
    Argb(Vec<u32>),
}

/// A decoded mask raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    samples: MaskSamples,
}

fn check_len(width: u32, height: u32, actual: usize) -> Result<(), MaskError> {
    let expected = width as usize * height as usize;
    if actual != expected {
        return Err(MaskError::LengthMismatch { expected, actual });
    }
    Ok(())
}

impl Mask {
    /// A scalar mask whose samples lie in `0..=max_value`.
    pub fn scalar(
        width: u32,
        height: u32,
        data: Vec<u32>,
        max_value: u32,
    ) -> Result<Self, MaskError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            samples: MaskSamples::Scalar { data, max_value },
        })
    }

    /// A color mask of packed ARGB pixels.
    pub fn argb(width: u32, height: u32, data: Vec<u32>) -> Result<Self, MaskError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            samples: MaskSamples::Argb(data),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn kind(&self) -> MaskKind {
        match self.samples {
            MaskSamples::Scalar { .. } => MaskKind::Scalar,
            MaskSamples::Argb(_) => MaskKind::Color,
        }
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[u32] {
        match &self.samples {
            MaskSamples::Scalar { data, .. } => data,
            MaskSamples::Argb(data) => data,
        }
    }

    /// Sample at (x, y), `None` outside the mask.
    pub fn sample(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples()[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Declared full range: the scalar maximum, or 0 for color masks.
    pub fn max_value(&self) -> u32 {
        match self.samples {
            MaskSamples::Scalar { max_value, .. } => max_value,
            MaskSamples::Argb(_) => 0,
        }
    }

    /// Lowest and highest sample actually present, `None` for an empty
    /// or color mask.
    pub fn actual_range(&self) -> Option<(u32, u32)> {
        match &self.samples {
            MaskSamples::Scalar { data, .. } => data.iter().fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((low, high)) => Some((low.min(v), high.max(v))),
            }),
            MaskSamples::Argb(_) => None,
        }
    }

    /// Same geometry with the color samples replaced, used after
    /// palette reduction.
    pub fn with_argb(&self, data: Vec<u32>) -> Result<Self, MaskError> {
        Self::argb(self.width, self.height, data)
    }
}
