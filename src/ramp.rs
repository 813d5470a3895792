//! Linear brightness interpolation.

use crate::types::AnimationError;

/// A validated linear brightness ramp.
///
/// Produces `steps + 1` samples from `begin` to `end`, both endpoints
/// included. Sample `i` is `begin + (end - begin) / steps * i`; the last
/// sample is exactly `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessRamp {
    begin: f32,
    end: f32,
    steps: u32,
}

impl BrightnessRamp {
    /// Creates a ramp.
    ///
    /// # Errors
    /// * `ZeroSteps` - `steps` is zero
    /// * `NonFiniteBrightness` - an endpoint is NaN or infinite
    pub fn new(begin: f32, end: f32, steps: u32) -> Result<Self, AnimationError> {
        if steps == 0 {
            return Err(AnimationError::ZeroSteps);
        }
        if !begin.is_finite() || !end.is_finite() {
            return Err(AnimationError::NonFiniteBrightness);
        }
        Ok(Self { begin, end, steps })
    }

    pub fn begin(&self) -> f32 {
        self.begin
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Number of samples, endpoints included.
    pub fn sample_count(&self) -> u32 {
        self.steps + 1
    }

    /// Brightness change between consecutive samples.
    pub fn step_size(&self) -> f32 {
        (self.end - self.begin) / self.steps as f32
    }

    /// Brightness of sample `i`, or `None` past the last sample.
    pub fn sample(&self, i: u32) -> Option<f32> {
        match i {
            i if i > self.steps => None,
            i if i == self.steps => Some(self.end),
            i => Some(self.begin + self.step_size() * i as f32),
        }
    }

    /// Iterates over every sample in order.
    pub fn samples(&self) -> impl Iterator<Item = f32> + use<> {
        let ramp = *self;
        (0..=ramp.steps).filter_map(move |i| ramp.sample(i))
    }

    /// Per-sample delay in microseconds so the samples span `total_ms`.
    pub fn frame_delay_us(&self, total_ms: u32) -> u32 {
        let total_us = total_ms as u64 * 1000;
        (total_us / self.steps as u64).min(u32::MAX as u64) as u32
    }
}
