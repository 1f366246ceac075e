//! Coordinate rotation utilities
//!
//! This module maps logical pixel coordinates onto the native bitplane layout.
//!
//! Bitplanes store pixels row-major with eight horizontal pixels per byte, MSB
//! first, and each row padded to a whole byte. Rotation changes which native
//! (column, row) a logical pixel lands on; the packing itself never changes.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use inky_phat::{rotation::apply_rotation, Dimensions, Rotation};
//!
//! let dims = Dimensions::new(1, 8).unwrap();
//!
//! // Pixel (0,0) is at byte 0, MSB
//! assert_eq!(apply_rotation(0, 0, dims, Rotation::Rotate0), (0, 0x80));
//!
//! // Pixel (7,0) is at byte 0, LSB
//! assert_eq!(apply_rotation(7, 0, dims, Rotation::Rotate0), (0, 0x01));
//! ```

use crate::config::{Dimensions, Rotation};

/// Apply rotation transformation to get buffer index and bit mask
///
/// `x` and `y` are logical coordinates and must already be within
/// `rotation.rotated(dims)`; `dims` are the native dimensions.
///
/// Returns `(byte_index, bit_mask)`.
pub fn apply_rotation(x: u32, y: u32, dims: Dimensions, rotation: Rotation) -> (usize, u8) {
    let cols = dims.cols as u32;
    let rows = dims.rows as u32;

    let (col, row) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (cols - 1 - y, x),
        Rotation::Rotate180 => (cols - 1 - x, rows - 1 - y),
        Rotation::Rotate270 => (y, rows - 1 - x),
    };

    let index = row as usize * dims.row_stride() + (col / 8) as usize;
    let bit = 0x80 >> (col % 8);
    (index, bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: u16, cols: u16) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn test_rotate0() {
        let d = dims(2, 8);
        assert_eq!(apply_rotation(0, 0, d, Rotation::Rotate0), (0, 0x80));
        assert_eq!(apply_rotation(1, 0, d, Rotation::Rotate0), (0, 0x40));
        assert_eq!(apply_rotation(7, 0, d, Rotation::Rotate0), (0, 0x01));
        assert_eq!(apply_rotation(0, 1, d, Rotation::Rotate0), (1, 0x80));
    }

    #[test]
    fn test_rotate0_padded_rows() {
        // 10 columns pad to 2 bytes per row
        let d = dims(2, 10);
        assert_eq!(apply_rotation(9, 0, d, Rotation::Rotate0), (1, 0x40));
        assert_eq!(apply_rotation(0, 1, d, Rotation::Rotate0), (2, 0x80));
    }

    #[test]
    fn test_rotate180() {
        let d = dims(1, 8);
        assert_eq!(apply_rotation(7, 0, d, Rotation::Rotate180), (0, 0x80));
        assert_eq!(apply_rotation(0, 0, d, Rotation::Rotate180), (0, 0x01));
    }

    #[test]
    fn test_rotate90() {
        // Logical origin lands on the last native column of row 0
        let d = dims(16, 16);
        assert_eq!(apply_rotation(0, 0, d, Rotation::Rotate90), (1, 0x01));
    }

    #[test]
    fn test_rotate270() {
        // Logical origin lands on the first column of the last native row
        let d = dims(16, 16);
        assert_eq!(apply_rotation(0, 0, d, Rotation::Rotate270), (30, 0x80));
    }

    #[test]
    fn test_rotate90_non_square() {
        // Native 4 rows x 8 cols, logical 4 wide x 8 tall
        let d = dims(4, 8);
        // Logical (3, 7) -> native col 0, row 3
        assert_eq!(apply_rotation(3, 7, d, Rotation::Rotate90), (3, 0x80));
    }
}
