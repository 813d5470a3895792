//! Additional strip effects: wipe, white pulse and rainbow variants.

use embedded_hal::delay::DelayNs;

use crate::animator::Animator;
use crate::sink::PixelSink;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::wire::PackedColor;

/// One full turn of the 16-bit color wheel.
const HUE_TURN: u32 = 65536;

/// Times the white segment wraps around before `white_over_rainbow` returns.
const WHITE_OVER_RAINBOW_LOOPS: u32 = 3;

impl<S: PixelSink, D: DelayNs, const P: usize> Animator<S, D, P> {
    /// Lights every pixel one by one, committing and waiting after each.
    ///
    /// The strip is not cleared first.
    pub fn color_wipe(&mut self, color: PackedColor, wait_ms: u32) {
        for index in 0..self.sink.pixel_count() {
            self.sink.set_pixel_color(index, color);
            self.sink.commit();
            self.delay.delay_ms(wait_ms);
        }
    }

    /// Fades the white channel of the whole strip up and back down.
    pub fn pulse_white(&mut self, wait_ms: u32) {
        for level in (0..=255u8).chain((0..=255u8).rev()) {
            self.fill_white(level);
            self.sink.commit();
            self.delay.delay_ms(wait_ms);
        }
    }

    /// Rotates a rainbow along the strip, then pulses white.
    ///
    /// The rainbow fades in over the first of `rainbow_loops` turns and out
    /// over the last. Each of the `white_loops` pulses runs without frame
    /// delays, holding full white for one second.
    pub fn rainbow_fade_to_white(&mut self, wait_ms: u32, rainbow_loops: u16, white_loops: u16) {
        const FADE_MAX: u32 = 100;

        let pixels = self.sink.pixel_count() as u32;
        let total = rainbow_loops as u32 * HUE_TURN;
        let last_turn = (rainbow_loops as u32).saturating_sub(1) * HUE_TURN;
        let mut fade = 0u32;

        let mut first_hue = 0u32;
        while first_hue < total {
            let value = (255 * fade / FADE_MAX) as u8;
            for index in 0..pixels {
                let hue = first_hue + index * HUE_TURN / pixels;
                let color = self.sink.color_hsv(hue as u16, 255, value);
                let color = self.sink.gamma32(color);
                self.sink.set_pixel_color(index as usize, color);
            }
            self.sink.commit();
            self.delay.delay_ms(wait_ms);

            if first_hue < HUE_TURN {
                fade = (fade + 1).min(FADE_MAX);
            } else if first_hue >= last_turn {
                fade = fade.saturating_sub(1);
            } else {
                fade = FADE_MAX;
            }
            first_hue += 256;
        }

        for _ in 0..white_loops {
            for level in 0..=255u8 {
                self.fill_white(level);
                self.sink.commit();
            }
            self.delay.delay_ms(1000);
            for level in (0..=255u8).rev() {
                self.fill_white(level);
                self.sink.commit();
            }
        }

        self.delay.delay_ms(500);
    }

    /// Runs a white segment over a rotating rainbow.
    ///
    /// The segment is `white_length` pixels long, capped at one less than the
    /// strip length. It moves one pixel whenever more than `white_speed_ms`
    /// have passed on `clock`, and the effect ends once its head has wrapped
    /// around three times. Frames are rendered back to back with no delay.
    pub fn white_over_rainbow<I, T>(&mut self, clock: &T, white_speed_ms: u64, white_length: usize)
    where
        I: TimeInstant,
        T: TimeSource<I>,
    {
        let pixels = self.sink.pixel_count();
        let white_length = white_length.min(pixels.saturating_sub(1));
        let white = self.sink.pack_color(0, 0, 0, 255);

        let mut head = white_length as isize - 1;
        let mut tail = 0isize;
        let mut wraps = 0u32;
        let mut last_move = clock.now();
        let mut first_hue = 0u32;

        loop {
            for index in 0..pixels {
                let i = index as isize;
                let in_segment =
                    (i >= tail && i <= head) || (tail > head && (i >= tail || i <= head));
                let color = if in_segment {
                    white
                } else {
                    let hue = first_hue + (index as u32 * HUE_TURN / pixels as u32);
                    self.sink.gamma32(self.sink.color_from_hue(hue as u16))
                };
                self.sink.set_pixel_color(index, color);
            }
            self.sink.commit();

            first_hue = first_hue.wrapping_add(40);

            let now = clock.now();
            if now.duration_since(last_move).as_millis() > white_speed_ms {
                head += 1;
                if head >= pixels as isize {
                    head = 0;
                    wraps += 1;
                    if wraps >= WHITE_OVER_RAINBOW_LOOPS {
                        return;
                    }
                }
                tail += 1;
                if tail >= pixels as isize {
                    tail = 0;
                }
                last_move = now;
            }
        }
    }

    fn fill_white(&mut self, level: u8) {
        let color = self.sink.gamma32(self.sink.pack_color(0, 0, 0, level));
        self.sink.fill(color);
    }
}
