//! Error types shared by palette, ramp and driver construction.

/// Validation errors for palettes, ramps and driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// No palette entries provided.
    EmptyPalette,

    /// Palette capacity exceeded.
    CapacityExceeded,

    /// Palette entry has zero or non-finite magnitude and cannot be normalized.
    DegenerateColor {
        /// Position of the offending entry.
        index: usize,
    },

    /// Brightness ramp with zero steps.
    ZeroSteps,

    /// Brightness endpoint is NaN or infinite.
    NonFiniteBrightness,

    /// Pixel sink reports zero pixels.
    EmptyStrip,

    /// Strip config and pixel sink disagree on the number of pixels.
    PixelCountMismatch {
        /// Pixel count of the strip config.
        expected: usize,
        /// Pixel count reported by the sink.
        actual: usize,
    },
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::EmptyPalette => {
                write!(f, "palette must have at least one color")
            }
            AnimationError::CapacityExceeded => {
                write!(f, "palette capacity exceeded")
            }
            AnimationError::DegenerateColor { index } => {
                write!(
                    f,
                    "palette color {} has zero or non-finite magnitude and cannot be normalized",
                    index
                )
            }
            AnimationError::ZeroSteps => {
                write!(f, "brightness ramp needs at least one step")
            }
            AnimationError::NonFiniteBrightness => {
                write!(f, "brightness endpoints must be finite")
            }
            AnimationError::EmptyStrip => {
                write!(f, "pixel sink has no pixels")
            }
            AnimationError::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "strip config expects {} pixels but the sink has {}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}
