//! Blocking animation driver for an addressable strip.
//!
//! Provides [`Animator`], which owns a [`PixelSink`] and a delay provider and
//! runs the fill sweep, the brightness ramps and the palette cycle built from
//! them.

use embedded_hal::delay::DelayNs;

use crate::config::{CycleConfig, StripConfig};
use crate::cycle::{CycleState, Palette};
use crate::ramp::BrightnessRamp;
use crate::sink::PixelSink;
use crate::types::AnimationError;
use crate::vector::ColorVector;
use crate::wire::PackedColor;

/// Drives a strip through palette-cycling fill and ramp animations.
///
/// Every routine blocks: each frame is written in full, then committed, then
/// followed by its delay.
///
/// # Type Parameters
/// * `S` - Pixel sink implementation
/// * `D` - Delay provider
/// * `P` - Palette capacity
pub struct Animator<S: PixelSink, D: DelayNs, const P: usize> {
    pub(crate) sink: S,
    pub(crate) delay: D,
    palette: Palette<P>,
    config: CycleConfig,
    ramp_up: BrightnessRamp,
    ramp_down: BrightnessRamp,
}

impl<S: PixelSink, D: DelayNs, const P: usize> Animator<S, D, P> {
    /// Initializes the strip and creates the driver.
    ///
    /// Turns every pixel off, commits, then applies the global brightness.
    ///
    /// # Errors
    /// * `EmptyStrip` - the sink or strip config has no pixels
    /// * `PixelCountMismatch` - the sink is not as long as the strip config says
    /// * `ZeroSteps` / `NonFiniteBrightness` - invalid cycle config
    pub fn new(
        mut sink: S,
        delay: D,
        palette: Palette<P>,
        strip: StripConfig,
        config: CycleConfig,
    ) -> Result<Self, AnimationError> {
        strip.validate()?;
        config.validate()?;
        strip.check_sink(sink.pixel_count())?;

        let ramp_up =
            BrightnessRamp::new(config.start_brightness, config.peak_brightness, config.ramp_steps)?;
        let ramp_down =
            BrightnessRamp::new(config.peak_brightness, config.end_brightness, config.ramp_steps)?;

        sink.clear();
        sink.commit();
        sink.set_brightness(strip.brightness);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "animator ready: {=usize} pixels, {=usize} colors",
            sink.pixel_count(),
            palette.len()
        );

        Ok(Self {
            sink,
            delay,
            palette,
            config,
            ramp_up,
            ramp_down,
        })
    }

    /// Number of pixels on the strip.
    pub fn pixel_count(&self) -> usize {
        self.sink.pixel_count()
    }

    pub fn palette(&self) -> &Palette<P> {
        &self.palette
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the driver, returning the sink and delay provider.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    /// Lights pixels one by one, starting at index 1.
    ///
    /// Pixel 0 is left untouched. Each pixel is committed and followed by a
    /// `wait_ms` delay.
    pub fn fill_outer(&mut self, color: PackedColor, wait_ms: u32) {
        for index in 1..self.sink.pixel_count() {
            self.sink.set_pixel_color(index, color);
            self.sink.commit();
            self.delay.delay_ms(wait_ms);
        }
    }

    /// Fades the whole strip along a brightness ramp.
    ///
    /// For every sample the full strip is written, committed once, then the
    /// driver sleeps `total_ms / steps`. The commit happens once per
    /// brightness sample, not after every pixel, so a `steps`-step ramp shows
    /// exactly `steps + 1` complete frames and never a partially updated one.
    pub fn ramp_all(&mut self, base: ColorVector, ramp: &BrightnessRamp, total_ms: u32) {
        let frame_us = ramp.frame_delay_us(total_ms);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "ramp {} -> {} in {=u32} steps, {=u32} us per frame",
            ramp.begin(),
            ramp.end(),
            ramp.steps(),
            frame_us
        );

        for brightness in ramp.samples() {
            let color = base.to_packed(&self.sink, brightness);
            self.sink.fill(color);
            self.sink.commit();
            self.delay.delay_us(frame_us);
        }
    }

    /// Validates the ramp parameters, then runs [`ramp_all`](Self::ramp_all).
    ///
    /// # Errors
    /// * `ZeroSteps` - `steps` is zero
    /// * `NonFiniteBrightness` - an endpoint is NaN or infinite
    pub fn ramp_all_with(
        &mut self,
        base: ColorVector,
        steps: u32,
        total_ms: u32,
        brightness_begin: f32,
        brightness_end: f32,
    ) -> Result<(), AnimationError> {
        let ramp = BrightnessRamp::new(brightness_begin, brightness_end, steps)?;
        self.ramp_all(base, &ramp, total_ms);
        Ok(())
    }

    /// Runs one animation cycle and returns the advanced cursor.
    ///
    /// Picks the color under the cursor, normalizes it, sweeps it in at the
    /// start brightness, ramps up to the peak, ramps down to the end
    /// brightness and pauses.
    pub fn run_cycle(&mut self, state: CycleState) -> CycleState {
        let (color, next) = self.palette.select(state);
        let base = color.normalize_or_zero();

        #[cfg(feature = "defmt")]
        defmt::debug!("cycle {=usize}: base {}", state.index(), base);

        let config = self.config;
        let fill = base.to_packed(&self.sink, config.start_brightness);
        self.fill_outer(fill, config.fill_wait_ms);

        let (ramp_up, ramp_down) = (self.ramp_up, self.ramp_down);
        self.ramp_all(base, &ramp_up, config.ramp_up_ms);
        self.ramp_all(base, &ramp_down, config.ramp_down_ms);

        self.delay.delay_ms(config.pause_ms);
        next
    }

    /// Cycles through the palette forever.
    pub fn run_forever(&mut self) -> ! {
        let mut state = CycleState::new();
        loop {
            state = self.run_cycle(state);
        }
    }
}
