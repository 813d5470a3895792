//! Pixel sink abstraction and an in-memory frame buffer.
//!
//! Provides the [`PixelSink`] trait the animation driver writes through, and
//! [`StripBuffer`], a fixed-size double buffer that implements it and encodes
//! frames into wire bytes.

use crate::config::{ColorOrder, Protocol, StripConfig};
use crate::wire::{self, PackedColor};

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip driver (RMT, SPI, PIO, bit-banged GPIO...)
/// so the animations can drive it. Writes go to a frame buffer and only reach
/// the LEDs on [`commit`](PixelSink::commit).
///
/// Methods cannot fail. Handle transmission errors inside the implementation.
pub trait PixelSink {
    /// Number of addressable pixels.
    fn pixel_count(&self) -> usize;

    /// Sets the global brightness cap, 0 (off) to 255 (unscaled).
    fn set_brightness(&mut self, brightness: u8);

    /// Buffers a color for one pixel. Out-of-range indices are ignored.
    fn set_pixel_color(&mut self, index: usize, color: PackedColor);

    /// Pushes the buffered frame to the LEDs.
    fn commit(&mut self);

    /// Buffers the same color for every pixel.
    fn fill(&mut self, color: PackedColor) {
        for index in 0..self.pixel_count() {
            self.set_pixel_color(index, color);
        }
    }

    /// Buffers black for every pixel.
    fn clear(&mut self) {
        self.fill(PackedColor::OFF);
    }

    /// Packs channel intensities in the sink's color format.
    fn pack_color(&self, red: u8, green: u8, blue: u8, white: u8) -> PackedColor {
        wire::pack_color(red, green, blue, white)
    }

    /// Applies the sink's gamma curve to every channel.
    fn gamma32(&self, color: PackedColor) -> PackedColor {
        wire::gamma32(color)
    }

    /// Converts 16-bit hue, saturation and value to a packed color.
    fn color_hsv(&self, hue: u16, saturation: u8, value: u8) -> PackedColor {
        wire::color_hsv(hue, saturation, value)
    }

    /// Fully saturated, full value color for a 16-bit hue.
    fn color_from_hue(&self, hue: u16) -> PackedColor {
        self.color_hsv(hue, 255, 255)
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn set_brightness(&mut self, brightness: u8) {
        (**self).set_brightness(brightness)
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        (**self).set_pixel_color(index, color)
    }

    fn commit(&mut self) {
        (**self).commit()
    }

    fn pack_color(&self, red: u8, green: u8, blue: u8, white: u8) -> PackedColor {
        (**self).pack_color(red, green, blue, white)
    }

    fn gamma32(&self, color: PackedColor) -> PackedColor {
        (**self).gamma32(color)
    }

    fn color_hsv(&self, hue: u16, saturation: u8, value: u8) -> PackedColor {
        (**self).color_hsv(hue, saturation, value)
    }
}

/// Scales one channel by a global brightness, 255 leaving it unchanged.
#[inline]
pub const fn scale_channel(value: u8, brightness: u8) -> u8 {
    ((value as u16 * (brightness as u16 + 1)) >> 8) as u8
}

/// Double-buffered frame storage for `N` pixels.
///
/// Pixel writes land in the back buffer; [`commit`](PixelSink::commit) copies
/// it to the front buffer, which is what [`encode`](StripBuffer::encode)
/// serializes for the wire.
#[derive(Debug, Clone)]
pub struct StripBuffer<const N: usize> {
    back: [PackedColor; N],
    front: [PackedColor; N],
    brightness: u8,
    protocol: Protocol,
    commits: u32,
}

impl<const N: usize> StripBuffer<N> {
    /// Creates a dark buffer at full brightness.
    pub const fn new(protocol: Protocol) -> Self {
        Self {
            back: [PackedColor::OFF; N],
            front: [PackedColor::OFF; N],
            brightness: 255,
            protocol,
            commits: 0,
        }
    }

    /// Creates a buffer for the configured protocol and brightness.
    ///
    /// The pixel count comes from `N`, not from the config.
    pub fn from_config(config: &StripConfig) -> Self {
        let mut buffer = Self::new(config.protocol);
        buffer.brightness = config.brightness;
        buffer
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of frames committed so far.
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Buffered (not yet committed) color of a pixel.
    pub fn pending(&self, index: usize) -> Option<PackedColor> {
        self.back.get(index).copied()
    }

    /// Committed frame, before brightness scaling.
    pub fn shown(&self) -> &[PackedColor; N] {
        &self.front
    }

    /// Committed color of a pixel with the global brightness applied.
    pub fn scaled(&self, index: usize) -> Option<PackedColor> {
        let [red, green, blue, white] = self.front.get(index)?.channels();
        let b = self.brightness;
        Some(wire::pack_color(
            scale_channel(red, b),
            scale_channel(green, b),
            scale_channel(blue, b),
            scale_channel(white, b),
        ))
    }

    /// Number of bytes a full frame occupies on the wire.
    pub const fn frame_len(&self) -> usize {
        N * self.protocol.order.bytes_per_pixel()
    }

    /// Serializes the committed frame into `out` in wire byte order.
    ///
    /// Returns the number of bytes written, which stops early if `out` is too
    /// short to hold the whole frame.
    pub fn encode(&self, out: &mut [u8]) -> usize {
        let width = self.protocol.order.bytes_per_pixel();
        let mut written = 0;
        for (index, chunk) in out.chunks_exact_mut(width).take(N).enumerate() {
            let color = self.scaled(index).unwrap_or(PackedColor::OFF);
            let [red, green, blue, white] = color.channels();
            match self.protocol.order {
                ColorOrder::Rgb => chunk.copy_from_slice(&[red, green, blue]),
                ColorOrder::Grb => chunk.copy_from_slice(&[green, red, blue]),
                ColorOrder::Rgbw => chunk.copy_from_slice(&[red, green, blue, white]),
                ColorOrder::Grbw => chunk.copy_from_slice(&[green, red, blue, white]),
            }
            written += width;
        }
        written
    }
}

impl<const N: usize> Default for StripBuffer<N> {
    fn default() -> Self {
        Self::new(Protocol::default())
    }
}

impl<const N: usize> PixelSink for StripBuffer<N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        if let Some(slot) = self.back.get_mut(index) {
            *slot = color;
        }
    }

    fn commit(&mut self) {
        self.front = self.back;
        self.commits = self.commits.wrapping_add(1);
    }
}
