//! Color types for the black/white/red panel
//!
//! This module defines the [`Color`] palette, the [`Plane`] each non-white
//! color lives in, and the [`ColorConverter`] that reduces arbitrary ARGB
//! values to the palette.
//!
//! ## Color Representation
//!
//! Each pixel is one bit in each of two planes. Colors are mutually exclusive:
//!
//! | Color | Black plane | Red plane |
//! |-------|-------------|-----------|
//! | Black | 1           | 0         |
//! | White | 0           | 0         |
//! | Red   | 0           | 1         |
//!
//! ## Example
//!
//! ```
//! use inky_phat::{Color, ColorConverter, Plane};
//!
//! assert_eq!(Color::Black.plane(), Some(Plane::Black));
//! assert_eq!(Color::White.plane(), None);
//!
//! let converter = ColorConverter::new();
//! assert_eq!(converter.convert(0xFF_E0_10_10), Color::Red);
//! assert_eq!(converter.convert(0x00_00_00_00), Color::White);
//! ```

use crate::error::InvalidPalette;

/// Colors supported by the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels (no plane bit set)
    White,
    /// Red pixels
    Red,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb888> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb888) -> Self {
        ColorConverter::new().convert_rgb(color)
    }
}

impl Color {
    /// The bitplane this color is stored in, `None` for white
    pub fn plane(self) -> Option<Plane> {
        match self {
            Self::Black => Some(Plane::Black),
            Self::White => None,
            Self::Red => Some(Plane::Red),
        }
    }

    /// Palette index: 0 white, 1 black, 2 red
    pub fn index(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 1,
            Self::Red => 2,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidPalette;

    /// Decode a palette index (0 white, 1 black, 2 red)
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::White),
            1 => Ok(Self::Black),
            2 => Ok(Self::Red),
            other => Err(InvalidPalette(other)),
        }
    }
}

/// One of the two bitplanes held by the controller RAM
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Plane {
    /// Black pixels, written with `DATA_START_TRANSMISSION_1`
    Black,
    /// Red pixels, written with `DATA_START_TRANSMISSION_2`
    Red,
}

/// Alpha below which a pixel is treated as transparent (white paper)
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 0x80;

/// Palette entries in tie-break order
const PALETTE: [(Color, [u8; 3]); 3] = [
    (Color::White, [0xFF, 0xFF, 0xFF]),
    (Color::Black, [0x00, 0x00, 0x00]),
    (Color::Red, [0xFF, 0x00, 0x00]),
];

/// Reduces arbitrary colors to the panel palette
///
/// The mapping is total and lossy:
///
/// 1. Alpha below the threshold maps to [`Color::White`].
/// 2. Otherwise the nearest palette entry by squared RGB distance wins, with
///    ties resolved White, then Black, then Red.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorConverter {
    alpha_threshold: u8,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl ColorConverter {
    /// Create a converter with the default alpha threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alpha threshold (0 treats every pixel as opaque)
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Current alpha threshold
    pub fn alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Classify a packed `0xAARRGGBB` value
    pub fn convert(&self, argb: u32) -> Color {
        let [alpha, r, g, b] = argb.to_be_bytes();
        if alpha < self.alpha_threshold {
            return Color::White;
        }
        nearest([r, g, b])
    }

    /// Classify an opaque RGB color
    #[cfg(feature = "graphics")]
    pub fn convert_rgb(&self, color: embedded_graphics_core::pixelcolor::Rgb888) -> Color {
        use embedded_graphics_core::pixelcolor::RgbColor;

        nearest([color.r(), color.g(), color.b()])
    }
}

fn nearest(rgb: [u8; 3]) -> Color {
    let mut best = Color::White;
    let mut best_distance = u32::MAX;
    for (color, entry) in PALETTE {
        let distance: u32 = rgb
            .iter()
            .zip(entry)
            .map(|(&a, b)| {
                let d = a.abs_diff(b) as u32;
                d * d
            })
            .sum();
        if distance < best_distance {
            best = color;
            best_distance = distance;
        }
    }
    best
}
