//! Graphics support via embedded-graphics
//!
//! [`PixelBuffer`], [`PixelGrid`] and [`Display`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! [`Color`] as their pixel color, so any embedded-graphics primitive, font or
//! image can be drawn into them. Pixels outside the target are clipped.
//!
//! Coordinates are logical: on a rotated [`Display`] the origin is the
//! top-left corner as seen by the user.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use inky_phat::{Color, Dimensions, PixelBuffer, Plane, Rotation};
//!
//! fn badge<D: DrawTarget<Color = Color>>(target: &mut D) -> Result<(), D::Error> {
//!     Rectangle::new(Point::new(0, 0), Size::new(212, 20))
//!         .into_styled(PrimitiveStyle::with_fill(Color::Red))
//!         .draw(target)?;
//!     Circle::new(Point::new(150, 40), 40)
//!         .into_styled(PrimitiveStyle::with_stroke(Color::Black, 2))
//!         .draw(target)?;
//!     Text::new(
//!         "Hello, Inky!",
//!         Point::new(10, 50),
//!         MonoTextStyle::new(&FONT_6X10, Color::Black),
//!     )
//!     .draw(target)?;
//!     Ok(())
//! }
//!
//! // Landscape buffer; a `Display` accepts the same calls
//! let mut buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate90);
//! let Ok(()) = badge(&mut buffer);
//! assert!(buffer.plane(Plane::Red).iter().any(|b| *b != 0));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::display::Display;
use crate::grid::PixelGrid;
use crate::interface::DisplayInterface;

/// Non-negative coordinates, `None` for anything left of or above the origin
fn coordinates(point: Point) -> Option<(u32, u32)> {
    let x = u32::try_from(point.x).ok()?;
    let y = u32::try_from(point.y).ok()?;
    Some((x, y))
}

impl DrawTarget for PixelBuffer {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = coordinates(point) {
                // Clipped
                let _ = self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        PixelBuffer::clear(self, color);
        Ok(())
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl DrawTarget for PixelGrid {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = coordinates(point) {
                let _ = self.set(x, y, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for PixelGrid {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Display::clear(self, color);
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Plane;
    use crate::config::{Dimensions, Rotation};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn test_buffer_size_follows_rotation() {
        let buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate270);
        assert_eq!(buffer.size(), Size::new(212, 104));
    }

    #[test]
    fn test_draw_rectangle_into_buffer() {
        let mut buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate0);
        let Ok(()) = Rectangle::new(Point::new(0, 0), Size::new(8, 2))
            .into_styled(PrimitiveStyle::with_fill(Color::Red))
            .draw(&mut buffer);

        let red = buffer.plane(Plane::Red);
        assert_eq!(red[0], 0xFF);
        assert_eq!(red[13], 0xFF);
        assert_eq!(red[1], 0x00);
        assert!(buffer.plane(Plane::Black).iter().all(|b| *b == 0));
    }

    #[test]
    fn test_out_of_range_pixels_are_clipped() {
        let mut buffer = PixelBuffer::new(Dimensions::panel(), Rotation::Rotate0);
        let Ok(()) = Line::new(Point::new(-5, 0), Point::new(200, 0))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut buffer);

        assert_eq!(buffer.pixel(0, 0), Ok(Color::Black));
        assert_eq!(buffer.pixel(103, 0), Ok(Color::Black));
        assert_eq!(buffer.pixel(0, 1), Ok(Color::White));
    }

    #[test]
    fn test_draw_target_clear() {
        let mut buffer = PixelBuffer::new(Dimensions::new(2, 8).unwrap(), Rotation::Rotate0);
        let Ok(()) = DrawTarget::clear(&mut buffer, Color::Black);
        assert_eq!(buffer.plane(Plane::Black), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_draw_into_grid() {
        let mut grid = PixelGrid::new(4, 4);
        let Ok(()) = Pixel(Point::new(3, 2), Color::Red).draw(&mut grid);
        let Ok(()) = Pixel(Point::new(4, 2), Color::Red).draw(&mut grid);
        assert_eq!(grid.get(3, 2), Some(Color::Red));
        assert_eq!(grid.size(), Size::new(4, 4));
    }
}
