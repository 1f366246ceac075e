//! Error types for the driver
//!
//! This module defines error types for pixel buffer operations ([`BufferError`]),
//! palette decoding ([`InvalidPalette`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BufferError`] - Out-of-range coordinates and malformed pixel grids
//! - [`InvalidPalette`] - A palette index with no representation on the panel
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! None of these are retried internally. Every failure propagates to the caller
//! with the underlying interface error preserved.
//!
//! ## Example
//!
//! ```
//! use inky_phat::{BufferError, Color, Dimensions, PixelBuffer, Rotation};
//!
//! let dims = Dimensions::panel();
//! let mut buffer = PixelBuffer::new(dims, Rotation::Rotate0);
//!
//! let result = buffer.set_pixel(104, 0, Color::Black);
//! assert!(matches!(result, Err(BufferError::OutOfRange { x: 104, y: 0, .. })));
//!
//! assert!(Color::try_from(7u8).is_err());
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// The bus or GPIO lines could not be brought to their initial levels
    ///
    /// Raised by [`Display::new`](crate::Display::new). This points at a wiring
    /// or HAL problem and is not worth retrying.
    Configuration(I::Error),
    /// A command/data transfer or busy-line poll failed
    ///
    /// Raised while a refresh is in flight. The panel may be left mid-update;
    /// no rollback is attempted.
    Transfer(I::Error),
    /// Palette index that has no border register encoding
    InvalidPalette(u8),
    /// Pixel coordinates outside the panel
    OutOfRange {
        /// X coordinate (column)
        x: u32,
        /// Y coordinate (row)
        y: u32,
        /// Logical panel width
        width: u32,
        /// Logical panel height
        height: u32,
    },
    /// Pixel grid whose length does not match its declared size
    GridSize {
        /// Expected pixel count (`width * height`)
        expected: usize,
        /// Provided pixel count
        provided: usize,
    },
    /// Releasing the bus or GPIO lines failed
    ///
    /// The lines may still be held when the display is opened again.
    Release(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Configuration(_) => write!(f, "Display cannot be configured"),
            Self::Transfer(_) => write!(f, "Transfer to display failed"),
            Self::InvalidPalette(index) => {
                write!(f, "Palette index {index} is unsupported as a border")
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(f, "Pixel ({x}, {y}) outside {width}x{height} panel"),
            Self::GridSize { expected, provided } => write!(
                f,
                "Pixel grid size mismatch: expected {expected} pixels, provided {provided}"
            ),
            Self::Release(_) => write!(
                f,
                "Display connection cannot be closed, errors may follow on next open"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::OutOfRange {
                x,
                y,
                width,
                height,
            } => Self::OutOfRange {
                x,
                y,
                width,
                height,
            },
            BufferError::GridSize { expected, provided } => Self::GridSize { expected, provided },
        }
    }
}

impl<I: DisplayInterface> From<InvalidPalette> for Error<I> {
    fn from(err: InvalidPalette) -> Self {
        Self::InvalidPalette(err.0)
    }
}

/// Errors raised by [`PixelBuffer`](crate::PixelBuffer) and
/// [`PixelGrid`](crate::PixelGrid)
///
/// Both are rejected synchronously and leave the target unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BufferError {
    /// Pixel coordinates outside the buffer
    OutOfRange {
        /// X coordinate (column)
        x: u32,
        /// Y coordinate (row)
        y: u32,
        /// Logical width
        width: u32,
        /// Logical height
        height: u32,
    },
    /// Pixel data length does not match the declared grid size
    GridSize {
        /// Expected pixel count
        expected: usize,
        /// Provided pixel count
        provided: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(f, "Pixel ({x}, {y}) outside {width}x{height} buffer"),
            Self::GridSize { expected, provided } => write!(
                f,
                "Pixel grid size mismatch: expected {expected} pixels, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BufferError {}

/// Palette index outside {White, Black, Red}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidPalette(pub u8);

impl core::fmt::Display for InvalidPalette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unsupported palette index {}", self.0)
    }
}

impl core::error::Error for InvalidPalette {}

/// Errors that can occur when building dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid dimensions {rows}x{cols} (both must be non-zero)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
