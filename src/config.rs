//! Display configuration types and builder

use crate::color::Color;
pub use crate::error::BuilderError;

/// Gate lines (rows) wired on the Inky pHAT v2 panel
pub const PANEL_ROWS: u16 = 212;

/// Source lines (columns) wired on the Inky pHAT v2 panel
pub const PANEL_COLS: u16 = 104;

/// Display dimensions in native (unrotated) orientation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to gate outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to source outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// Columns need not be byte-aligned; each row is padded to a whole number
    /// of bytes in the bitplanes.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || cols == 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// The Inky pHAT v2 panel, 104x212 in native orientation
    pub const fn panel() -> Self {
        Self {
            rows: PANEL_ROWS,
            cols: PANEL_COLS,
        }
    }

    /// Bytes per row in a packed bitplane
    pub fn row_stride(&self) -> usize {
        (self.cols as usize).div_ceil(8)
    }

    /// Calculate required bitplane size in bytes
    pub fn buffer_size(&self) -> usize {
        self.row_stride() * self.rows as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Logical dimensions seen by callers for the given native dimensions
    pub fn rotated(self, dims: Dimensions) -> Dimensions {
        match self {
            Self::Rotate0 | Self::Rotate180 => dims,
            Self::Rotate90 | Self::Rotate270 => Dimensions {
                rows: dims.cols,
                cols: dims.rows,
            },
        }
    }
}

/// Display configuration
///
/// The register script is fixed for the panel, so only the caller-facing
/// knobs live here. Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Logical orientation of pixel coordinates
    pub rotation: Rotation,
    /// Border color written on every refresh
    pub border: Color,
}

impl Config {
    /// Native panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::panel()
    }

    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        self.rotation.rotated(self.dimensions())
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use inky_phat::{Builder, Color, Rotation};
///
/// let config = Builder::new()
///     .rotation(Rotation::Rotate90)
///     .border(Color::Black)
///     .build();
/// assert_eq!(config.rotated_dimensions().cols, 212);
/// ```
#[must_use]
pub struct Builder {
    /// Display rotation
    rotation: Rotation,
    /// Initial border color
    border: Color,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            rotation: Rotation::Rotate0,
            border: Color::White,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the initial border color
    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            rotation: self.rotation,
            border: self.border,
        }
    }
}
