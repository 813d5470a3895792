//! Color palette and the cursor that cycles through it.

use heapless::Vec;

use crate::types::AnimationError;
use crate::vector::ColorVector;

/// The six colors of the reference animation.
///
/// The first three are unit primaries, the rest are raw 0-255 triples. Every
/// entry is normalized before use, so only the direction matters.
pub const DEFAULT_COLORS: [ColorVector; 6] = [
    ColorVector::new(1.0, 0.0, 0.0),
    ColorVector::new(0.0, 1.0, 0.0),
    ColorVector::new(0.0, 0.0, 1.0),
    ColorVector::new(215.0, 3.0, 252.0),
    ColorVector::new(255.0, 247.0, 0.0),
    ColorVector::new(0.0, 255.0, 225.0),
];

/// A non-empty, fixed-capacity list of colors to cycle through.
///
/// Every entry has a finite, non-zero magnitude, so it can always be
/// normalized.
///
/// # Type Parameters
/// * `N` - Maximum number of colors
#[derive(Debug, Clone)]
pub struct Palette<const N: usize> {
    colors: Vec<ColorVector, N>,
}

impl<const N: usize> Palette<N> {
    /// Builds a palette from a slice of colors.
    ///
    /// # Errors
    /// * `EmptyPalette` - `colors` is empty
    /// * `CapacityExceeded` - more than `N` colors
    /// * `DegenerateColor` - an entry has zero or non-finite magnitude
    pub fn from_slice(colors: &[ColorVector]) -> Result<Self, AnimationError> {
        if colors.is_empty() {
            return Err(AnimationError::EmptyPalette);
        }

        let mut stored = Vec::new();
        for (index, color) in colors.iter().enumerate() {
            if color.try_normalize().is_none() {
                return Err(AnimationError::DegenerateColor { index });
            }
            stored
                .push(*color)
                .map_err(|_| AnimationError::CapacityExceeded)?;
        }

        Ok(Self { colors: stored })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, palettes hold at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ColorVector> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[ColorVector] {
        &self.colors
    }

    /// Returns the color under the cursor and the advanced cursor.
    ///
    /// A cursor left over from a longer palette is wrapped into range first.
    pub fn select(&self, state: CycleState) -> (ColorVector, CycleState) {
        let len = self.colors.len();
        let index = state.index % len;
        (self.colors[index], CycleState { index }.advance(len))
    }
}

impl Palette<6> {
    /// The reference six-color palette.
    pub fn default_colors() -> Self {
        Self {
            colors: DEFAULT_COLORS.into_iter().collect(),
        }
    }
}

/// Position of the next color to show.
///
/// Passed into each animation cycle and returned advanced, wrapping at the
/// palette length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleState {
    index: usize,
}

impl CycleState {
    /// Cursor at the first palette entry.
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Index of the next color to show.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next entry of a palette with `len` colors.
    pub fn advance(self, len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        Self {
            index: (self.index + 1) % len,
        }
    }
}
