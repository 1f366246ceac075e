//! Rectangular blocks of palette colors
//!
//! A [`PixelGrid`] is what the converters produce and what
//! [`PixelBuffer::set_image`](crate::PixelBuffer::set_image) consumes.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;
use crate::error::BufferError;

/// Row-major grid of already palette-reduced pixels
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a grid filled with white
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::White; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns `BufferError::GridSize` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::GridSize {
                expected,
                provided: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at (x, y), `None` outside the grid
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.offset(x, y)).copied()
    }

    /// Set the color at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `BufferError::OutOfRange` outside the grid.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<(), BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
        Ok(())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() rejects a zero size; a zero-width grid has no rows to yield
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Nearest-neighbour resample to `width` x `height`
    pub fn resize(&self, width: u32, height: u32) -> Self {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let mut out = Self::new(width, height);
        if self.is_empty() {
            return out;
        }
        for y in 0..height {
            let src_y = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let src_x = (x as u64 * self.width as u64 / width as u64) as u32;
                let offset = out.offset(x, y);
                out.pixels[offset] = self.pixels[self.offset(src_x, src_y)];
            }
        }
        out
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
