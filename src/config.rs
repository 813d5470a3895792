//! Strip and animation-cycle configuration.

use crate::types::AnimationError;

/// Number of pixels on the reference strip.
pub const DEFAULT_PIXEL_COUNT: usize = 7;

/// Byte order of the channels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    Rgb,
    Grb,
    Rgbw,
    Grbw,
}

impl ColorOrder {
    /// Bytes each pixel occupies on the wire.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorOrder::Rgb | ColorOrder::Grb => 3,
            ColorOrder::Rgbw | ColorOrder::Grbw => 4,
        }
    }
}

/// Data rate of the strip's bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bitrate {
    /// 800 kHz, WS2812 and most current pixels.
    Khz800,
    /// 400 kHz, WS2811 and early FLORA pixels.
    Khz400,
}

/// Wire format of a strip.
///
/// Only `order` affects this crate, through [`StripBuffer::encode`]. The
/// bitrate is carried for the driver that clocks the bits out.
///
/// [`StripBuffer::encode`]: crate::StripBuffer::encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Protocol {
    pub order: ColorOrder,
    pub bitrate: Bitrate,
}

impl Protocol {
    /// GRBW pixels at 800 kHz (RGBW NeoPixels).
    pub const GRBW_800: Protocol = Protocol {
        order: ColorOrder::Grbw,
        bitrate: Bitrate::Khz800,
    };

    /// GRB pixels at 800 kHz.
    pub const GRB_800: Protocol = Protocol {
        order: ColorOrder::Grb,
        bitrate: Bitrate::Khz800,
    };
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::GRBW_800
    }
}

/// Static description of the attached strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Number of pixels on the strip.
    pub pixel_count: usize,

    /// Data pin or channel the strip is attached to.
    ///
    /// Not read here. The pin is claimed by whoever builds the driver behind
    /// the sink, this field only records it.
    pub pin: u8,

    /// Global brightness cap, 0 (off) to 255 (unscaled).
    pub brightness: u8,

    /// Wire format.
    pub protocol: Protocol,
}

impl StripConfig {
    /// Checks that the strip has at least one pixel.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.pixel_count == 0 {
            return Err(AnimationError::EmptyStrip);
        }
        Ok(())
    }

    /// Checks that a sink with `actual` pixels drives this strip.
    ///
    /// # Errors
    /// * `EmptyStrip` - the sink has no pixels
    /// * `PixelCountMismatch` - the sink length differs from `pixel_count`
    pub fn check_sink(&self, actual: usize) -> Result<(), AnimationError> {
        if actual == 0 {
            return Err(AnimationError::EmptyStrip);
        }
        if actual != self.pixel_count {
            return Err(AnimationError::PixelCountMismatch {
                expected: self.pixel_count,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            pin: 0,
            brightness: 255,
            protocol: Protocol::GRBW_800,
        }
    }
}

/// Timing and brightness parameters of one animation cycle.
///
/// Defaults: sweep at 0.2 brightness with 60 ms per pixel, ramp 0.2 to 1.0
/// over 50 ms, ramp 1.0 to 0.0 over 500 ms, both in 30 steps, then 200 ms of
/// darkness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleConfig {
    /// Brightness of the fill sweep and start of the ramp up.
    pub start_brightness: f32,

    /// Brightness at the top of the ramp.
    pub peak_brightness: f32,

    /// Brightness at the end of the ramp down.
    pub end_brightness: f32,

    /// Delay after each pixel of the fill sweep.
    pub fill_wait_ms: u32,

    /// Number of steps of both ramps.
    pub ramp_steps: u32,

    /// Total duration of the ramp up.
    pub ramp_up_ms: u32,

    /// Total duration of the ramp down.
    pub ramp_down_ms: u32,

    /// Pause after the ramp down.
    pub pause_ms: u32,
}

impl CycleConfig {
    /// Checks the ramp parameters.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.ramp_steps == 0 {
            return Err(AnimationError::ZeroSteps);
        }
        let finite = self.start_brightness.is_finite()
            && self.peak_brightness.is_finite()
            && self.end_brightness.is_finite();
        if !finite {
            return Err(AnimationError::NonFiniteBrightness);
        }
        Ok(())
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            start_brightness: 0.2,
            peak_brightness: 1.0,
            end_brightness: 0.0,
            fill_wait_ms: 60,
            ramp_steps: 30,
            ramp_up_ms: 50,
            ramp_down_ms: 500,
            pause_ms: 200,
        }
    }
}
