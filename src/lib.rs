#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorVector`**: A color as a 3-vector of `f32` with arithmetic, norm and packing
//! - **`PackedColor`**: Hardware-ready `0xWWRRGGBB` color
//! - **`BrightnessRamp`**: Validated linear brightness interpolation over a number of steps
//! - **`Palette`**: Non-empty list of colors to cycle through
//! - **`CycleState`**: Cursor into the palette, passed into and returned from each cycle
//! - **`Animator`**: Blocking driver for the fill sweep, ramps and effects
//! - **`PixelSink`**: Trait to implement for your LED strip driver
//! - **`StripBuffer`**: In-memory double-buffered `PixelSink` with wire encoding
//!
//! Delays go through `embedded_hal::delay::DelayNs`, so any HAL delay or timer
//! works as the driver's clock.

pub mod animator;
pub mod config;
pub mod cycle;
pub mod effects;
pub mod ramp;
pub mod sink;
#[cfg(feature = "smart-leds")]
pub mod smart_leds_sink;
pub mod time;
pub mod types;
pub mod vector;
pub mod wire;

pub use animator::Animator;
pub use config::{Bitrate, ColorOrder, CycleConfig, DEFAULT_PIXEL_COUNT, Protocol, StripConfig};
pub use cycle::{CycleState, DEFAULT_COLORS, Palette};
pub use ramp::BrightnessRamp;
pub use sink::{PixelSink, StripBuffer};
#[cfg(feature = "smart-leds")]
pub use smart_leds_sink::SmartLedsSink;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::AnimationError;
pub use vector::ColorVector;
pub use wire::PackedColor;

/// Palette holding the six reference colors.
pub type DefaultPalette = Palette<6>;

/// Driver over the reference palette.
pub type DefaultAnimator<S, D> = Animator<S, D, 6>;
