//! Three-component color vector used for blending and brightness scaling.

use core::ops::{Add, Mul, Neg, Sub};

use palette::Srgb;

use crate::sink::PixelSink;
use crate::wire::{self, PackedColor, wrap_channel};

/// A color as a plain 3-vector of `f32` components.
///
/// Components are nominally in the 0-255 range but nothing enforces it.
/// Palette entries are usually normalized to unit length and then scaled by a
/// brightness in `[0, 1]` when packed, see [`ColorVector::pack`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorVector {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ColorVector {
    /// The zero vector (black).
    pub const ZERO: ColorVector = ColorVector::new(0.0, 0.0, 0.0);

    /// Creates a vector from red, green and blue components.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: ColorVector) -> ColorVector {
        ColorVector::new(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> ColorVector {
        ColorVector::new(self.red * factor, self.green * factor, self.blue * factor)
    }

    /// Flips the sign of every component.
    #[inline]
    pub fn negate(self) -> ColorVector {
        self.scale(-1.0)
    }

    /// Component-wise difference, `self - other`.
    #[inline]
    pub fn subtract(self, other: ColorVector) -> ColorVector {
        self.add(other.negate())
    }

    /// Euclidean length. NaN and infinities propagate.
    #[inline]
    pub fn norm(self) -> f32 {
        libm::sqrtf(self.red * self.red + self.green * self.green + self.blue * self.blue)
    }

    /// Scales the vector to unit length.
    ///
    /// Returns `None` when the length is zero or not finite.
    pub fn try_normalize(self) -> Option<ColorVector> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(self.scale(1.0 / norm))
    }

    /// Like [`try_normalize`](Self::try_normalize) but falls back to black.
    #[inline]
    pub fn normalize_or_zero(self) -> ColorVector {
        self.try_normalize().unwrap_or(ColorVector::ZERO)
    }

    /// Channel bytes for the given brightness, before packing.
    ///
    /// Each component is multiplied by `brightness * 255` and converted with
    /// [`wrap_channel`], so out-of-range values wrap instead of clamping.
    #[inline]
    pub fn channels_at(self, brightness: f32) -> [u8; 3] {
        let m = brightness * 255.0;
        [
            wrap_channel(self.red * m),
            wrap_channel(self.green * m),
            wrap_channel(self.blue * m),
        ]
    }

    /// Packs and gamma-corrects the color using the reference wire routines.
    pub fn pack(self, brightness: f32) -> PackedColor {
        let [red, green, blue] = self.channels_at(brightness);
        wire::gamma32(wire::pack_color(red, green, blue, 0))
    }

    /// Packs and gamma-corrects the color through the sink's own routines.
    pub fn to_packed<S: PixelSink + ?Sized>(self, sink: &S, brightness: f32) -> PackedColor {
        let [red, green, blue] = self.channels_at(brightness);
        sink.gamma32(sink.pack_color(red, green, blue, 0))
    }
}

impl Add for ColorVector {
    type Output = ColorVector;

    fn add(self, rhs: ColorVector) -> ColorVector {
        ColorVector::add(self, rhs)
    }
}

impl Sub for ColorVector {
    type Output = ColorVector;

    fn sub(self, rhs: ColorVector) -> ColorVector {
        self.subtract(rhs)
    }
}

impl Neg for ColorVector {
    type Output = ColorVector;

    fn neg(self) -> ColorVector {
        self.negate()
    }
}

impl Mul<f32> for ColorVector {
    type Output = ColorVector;

    fn mul(self, rhs: f32) -> ColorVector {
        self.scale(rhs)
    }
}

// Srgb components live in 0.0-1.0, vectors in 0-255.
impl From<Srgb> for ColorVector {
    fn from(color: Srgb) -> Self {
        ColorVector::new(color.red * 255.0, color.green * 255.0, color.blue * 255.0)
    }
}

impl From<ColorVector> for Srgb {
    fn from(vector: ColorVector) -> Self {
        Srgb::new(vector.red / 255.0, vector.green / 255.0, vector.blue / 255.0)
    }
}

impl From<[f32; 3]> for ColorVector {
    fn from([red, green, blue]: [f32; 3]) -> Self {
        ColorVector::new(red, green, blue)
    }
}
