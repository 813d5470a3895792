//! Packed color encoding, gamma correction and HSV helpers.
//!
//! These are the reference routines behind the provided methods of
//! [`PixelSink`](crate::PixelSink). Packing follows the classic NeoPixel
//! layout: `0xWWRRGGBB`, white in the most significant byte.

use palette::{FromColor, Hsv, Srgb};

/// A hardware-ready color with red, green, blue and white channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// All channels off.
    pub const OFF: PackedColor = PackedColor(0);

    /// Packs four channel intensities.
    #[inline]
    pub const fn from_rgbw(red: u8, green: u8, blue: u8, white: u8) -> Self {
        PackedColor(
            ((white as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32,
        )
    }

    #[inline]
    pub const fn white(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the channels as `[red, green, blue, white]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.white()]
    }
}

impl From<u32> for PackedColor {
    fn from(raw: u32) -> Self {
        PackedColor(raw)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

/// Packs four channel intensities into a [`PackedColor`].
#[inline]
pub const fn pack_color(red: u8, green: u8, blue: u8, white: u8) -> PackedColor {
    PackedColor::from_rgbw(red, green, blue, white)
}

/// Converts a channel value to a byte the way an integer cast would.
///
/// The value is truncated toward zero and then wrapped modulo 256, so `300.0`
/// becomes `44` and `-1.0` becomes `255`. NaN maps to `0`. No clamping.
#[inline]
pub fn wrap_channel(value: f32) -> u8 {
    value as i32 as u8
}

/// NeoPixel gamma 2.6 lookup table, indexed by linear intensity.
pub const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13,
    14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, 25,
    26, 27, 27, 28, 29, 29, 30, 31, 32, 32, 33, 34, 35, 35, 36, 37, 38, 39, 39, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 50, 50, 51, 52, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 66, 67,
    68, 69, 70, 72, 73, 74, 75, 77, 78, 79, 81, 82, 83, 85, 86, 87, 89, 90, 92, 93, 95, 96, 98,
    99, 101, 102, 104, 105, 107, 109, 110, 112, 114, 115, 117, 119, 120, 122, 124, 126, 127, 129,
    131, 133, 135, 137, 138, 140, 142, 144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167,
    169, 171, 173, 175, 177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210,
    213, 215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// Gamma-corrects a single 8-bit intensity.
#[inline]
pub const fn gamma8(value: u8) -> u8 {
    GAMMA8[value as usize]
}

/// Gamma-corrects every channel of a packed color, white included.
pub fn gamma32(color: PackedColor) -> PackedColor {
    let [red, green, blue, white] = color.channels();
    pack_color(gamma8(red), gamma8(green), gamma8(blue), gamma8(white))
}

/// Creates a packed color from 16-bit hue, saturation and value.
///
/// A full turn of the color wheel spans the whole `u16` range, so hues wrap
/// naturally on overflow. The white channel is left at zero.
pub fn color_hsv(hue: u16, saturation: u8, value: u8) -> PackedColor {
    let degrees = hue as f32 * 360.0 / 65536.0;
    let hsv = Hsv::new(degrees, saturation as f32 / 255.0, value as f32 / 255.0);
    let rgb: Srgb<u8> = Srgb::from_color(hsv).into_format();
    pack_color(rgb.red, rgb.green, rgb.blue, 0)
}
