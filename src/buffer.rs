//! Two-plane pixel buffer
//!
//! [`PixelBuffer`] holds one packed bitplane per non-white color. Planes are
//! stored in native panel order (row-major, MSB first, rows padded to whole
//! bytes) so they can be streamed to the controller RAM without conversion.
//!
//! ## Example
//!
//! ```
//! use inky_phat::{Color, Dimensions, PixelBuffer, Plane, Rotation};
//!
//! let mut buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate0);
//! buffer.set_pixel(0, 0, Color::Red).unwrap();
//!
//! assert_eq!(buffer.plane(Plane::Red)[0], 0x80);
//! assert_eq!(buffer.plane(Plane::Black)[0], 0x00);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Color, Plane};
use crate::config::{Dimensions, Rotation};
use crate::error::BufferError;
use crate::grid::PixelGrid;
use crate::rotation::apply_rotation;

/// Black and red bitplanes for a fixed-size panel
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    /// Native dimensions
    dimensions: Dimensions,
    /// Orientation of caller coordinates
    rotation: Rotation,
    /// Black plane, set bit = black
    black: Vec<u8>,
    /// Red plane, set bit = red
    red: Vec<u8>,
}

impl PixelBuffer {
    /// Create an all-white buffer
    pub fn new(dimensions: Dimensions, rotation: Rotation) -> Self {
        let size = dimensions.buffer_size();
        Self {
            dimensions,
            rotation,
            black: vec![0; size],
            red: vec![0; size],
        }
    }

    /// Native (unrotated) dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Orientation of caller coordinates
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Logical width
    pub fn width(&self) -> u32 {
        self.rotation.rotated(self.dimensions).cols as u32
    }

    /// Logical height
    pub fn height(&self) -> u32 {
        self.rotation.rotated(self.dimensions).rows as u32
    }

    /// Set a single pixel
    ///
    /// The color's plane bit is set and the other plane's bit cleared. White
    /// clears both.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::OutOfRange` if (x, y) is outside the panel; the
    /// buffer is unchanged.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), BufferError> {
        let (index, bit) = self.locate(x, y)?;
        self.write(index, bit, color);
        Ok(())
    }

    /// Read a single pixel
    ///
    /// # Errors
    ///
    /// Returns `BufferError::OutOfRange` if (x, y) is outside the panel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Color, BufferError> {
        let (index, bit) = self.locate(x, y)?;
        if self.black[index] & bit != 0 {
            Ok(Color::Black)
        } else if self.red[index] & bit != 0 {
            Ok(Color::Red)
        } else {
            Ok(Color::White)
        }
    }

    /// Copy a block of pixels with its top-left corner at (x, y)
    ///
    /// The operation is atomic: if any pixel of the block falls outside the
    /// panel, nothing is written and the first offending pixel in row-major
    /// order is reported.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::OutOfRange` for the first out-of-range pixel.
    pub fn set_image(&mut self, x: u32, y: u32, grid: &PixelGrid) -> Result<(), BufferError> {
        if grid.is_empty() {
            return Ok(());
        }
        let width = self.width();
        let height = self.height();
        let out_of_range = |x, y| BufferError::OutOfRange {
            x,
            y,
            width,
            height,
        };

        if x >= width || y >= height {
            return Err(out_of_range(x, y));
        }
        if x.saturating_add(grid.width()) > width {
            return Err(out_of_range(width, y));
        }
        if y.saturating_add(grid.height()) > height {
            return Err(out_of_range(x, height));
        }

        for (dy, row) in (0u32..).zip(grid.rows()) {
            for (dx, color) in (0u32..).zip(row) {
                let (index, bit) = apply_rotation(x + dx, y + dy, self.dimensions, self.rotation);
                self.write(index, bit, *color);
            }
        }
        Ok(())
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        let (black, red) = match color {
            Color::Black => (0xFF, 0x00),
            Color::White => (0x00, 0x00),
            Color::Red => (0x00, 0xFF),
        };
        self.black.fill(black);
        self.red.fill(red);

        let padding = self.dimensions.cols % 8;
        if padding != 0 {
            let mask = 0xFFu8 << (8 - padding);
            let stride = self.dimensions.row_stride();
            for plane in [&mut self.black, &mut self.red] {
                for row in plane.chunks_mut(stride) {
                    if let Some(last) = row.last_mut() {
                        *last &= mask;
                    }
                }
            }
        }
    }

    /// Packed bitplane in controller transfer order
    ///
    /// Row-major, MSB first, each row padded to a whole number of bytes.
    /// Padding bits are always zero.
    pub fn plane(&self, plane: Plane) -> &[u8] {
        match plane {
            Plane::Black => &self.black,
            Plane::Red => &self.red,
        }
    }

    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), BufferError> {
        let width = self.width();
        let height = self.height();
        if x >= width || y >= height {
            return Err(BufferError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(apply_rotation(x, y, self.dimensions, self.rotation))
    }

    fn write(&mut self, index: usize, bit: u8, color: Color) {
        match color {
            Color::Black => {
                self.black[index] |= bit;
                self.red[index] &= !bit;
            }
            Color::White => {
                self.black[index] &= !bit;
                self.red[index] &= !bit;
            }
            Color::Red => {
                self.black[index] &= !bit;
                self.red[index] |= bit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [Color; 3] = [Color::Black, Color::White, Color::Red];

    fn small(rotation: Rotation) -> PixelBuffer {
        // 10 columns exercise row padding
        PixelBuffer::new(Dimensions::new(3, 10).unwrap(), rotation)
    }

    #[test]
    fn test_set_then_get_every_pixel() {
        for rotation in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            let mut buffer = small(rotation);
            for y in 0..buffer.height() {
                for x in 0..buffer.width() {
                    for color in COLORS {
                        buffer.set_pixel(x, y, color).unwrap();
                        assert_eq!(buffer.pixel(x, y), Ok(color));
                    }
                }
            }
        }
    }

    #[test]
    fn test_black_then_red_clears_black_plane() {
        let mut buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate0);
        buffer.set_pixel(9, 4, Color::Black).unwrap();
        let index = 4 * 13 + 1;
        assert_eq!(buffer.plane(Plane::Black)[index], 0x40);

        buffer.set_pixel(9, 4, Color::Red).unwrap();
        assert_eq!(buffer.pixel(9, 4), Ok(Color::Red));
        assert_eq!(buffer.plane(Plane::Black)[index], 0x00);
        assert_eq!(buffer.plane(Plane::Red)[index], 0x40);
    }

    #[test]
    fn test_white_buffer_planes_are_zero() {
        let buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate0);
        for plane in [Plane::Black, Plane::Red] {
            let data = buffer.plane(plane);
            assert_eq!(data.len(), 13 * 212);
            assert!(data.iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn test_white_clears_both_planes() {
        let mut buffer = small(Rotation::Rotate0);
        buffer.set_pixel(0, 0, Color::Red).unwrap();
        buffer.set_pixel(0, 0, Color::White).unwrap();
        assert_eq!(buffer.plane(Plane::Red)[0], 0);
        assert_eq!(buffer.plane(Plane::Black)[0], 0);
    }

    #[test]
    fn test_out_of_range_leaves_buffer_unchanged() {
        let mut buffer = small(Rotation::Rotate0);
        let before = buffer.clone();
        assert_eq!(
            buffer.set_pixel(10, 0, Color::Black),
            Err(BufferError::OutOfRange {
                x: 10,
                y: 0,
                width: 10,
                height: 3
            })
        );
        assert!(buffer.set_pixel(0, 3, Color::Black).is_err());
        assert!(buffer.pixel(0, 3).is_err());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_last_pixel_is_last_data_bit_of_padded_row() {
        let mut buffer = small(Rotation::Rotate0);
        buffer.set_pixel(9, 2, Color::Black).unwrap();
        let plane = buffer.plane(Plane::Black);
        assert_eq!(plane.len(), 6);
        assert_eq!(plane[5], 0x40);
        assert!(plane[..5].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_set_image_writes_block() {
        let mut buffer = small(Rotation::Rotate0);
        let grid = PixelGrid::from_pixels(
            2,
            2,
            vec![Color::Black, Color::Red, Color::White, Color::Black],
        )
        .unwrap();
        buffer.set_image(7, 1, &grid).unwrap();
        assert_eq!(buffer.pixel(7, 1), Ok(Color::Black));
        assert_eq!(buffer.pixel(8, 1), Ok(Color::Red));
        assert_eq!(buffer.pixel(7, 2), Ok(Color::White));
        assert_eq!(buffer.pixel(8, 2), Ok(Color::Black));
    }

    #[test]
    fn test_set_image_overflow_is_atomic() {
        let mut buffer = small(Rotation::Rotate0);
        let before = buffer.clone();
        let grid = PixelGrid::from_pixels(3, 1, vec![Color::Black; 3]).unwrap();

        let result = buffer.set_image(8, 0, &grid);
        assert_eq!(
            result,
            Err(BufferError::OutOfRange {
                x: 10,
                y: 0,
                width: 10,
                height: 3
            })
        );
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_set_image_overflow_bottom_reports_first_row_out() {
        let mut buffer = small(Rotation::Rotate0);
        let grid = PixelGrid::from_pixels(1, 2, vec![Color::Red; 2]).unwrap();
        let result = buffer.set_image(4, 2, &grid);
        assert!(matches!(result, Err(BufferError::OutOfRange { x: 4, y: 3, .. })));
        assert_eq!(buffer.pixel(4, 2), Ok(Color::White));
    }

    #[test]
    fn test_set_image_origin_outside() {
        let mut buffer = small(Rotation::Rotate0);
        let grid = PixelGrid::new(1, 1);
        let result = buffer.set_image(20, 1, &grid);
        assert!(matches!(result, Err(BufferError::OutOfRange { x: 20, y: 1, .. })));
    }

    #[test]
    fn test_clear() {
        let mut buffer = small(Rotation::Rotate0);
        buffer.clear(Color::Red);
        assert_eq!(buffer.pixel(9, 2), Ok(Color::Red));
        assert!(buffer.plane(Plane::Black).iter().all(|b| *b == 0));
        // Padding bits past column 9 stay clear
        assert_eq!(buffer.plane(Plane::Red), &[0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0]);
        buffer.clear(Color::White);
        assert!(buffer.plane(Plane::Red).iter().all(|b| *b == 0));
    }

    #[test]
    fn test_rotated_logical_size() {
        let buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate90);
        assert_eq!(buffer.width(), 212);
        assert_eq!(buffer.height(), 104);
    }
}
