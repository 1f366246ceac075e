//! Image and text rasterization
//!
//! [`ImageConverter`] turns embedded-graphics images and text into
//! [`PixelGrid`]s that can be placed with
//! [`Display::set_image`](crate::Display::set_image).
//!
//! ## Example
//!
//! ```
//! use inky_phat::{Color, ImageConverter};
//!
//! let converter = ImageConverter::new(104, 212);
//! let grid = converter.convert_text("Hi", Color::Red);
//! assert_eq!((grid.width(), grid.height()), (12, 10));
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_graphics::geometry::Dimensions as _;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::image::ImageDrawable;
use embedded_graphics_core::pixelcolor::{PixelColor, Rgb888};
use embedded_graphics_core::Pixel;

use crate::color::{Color, ColorConverter};
use crate::grid::PixelGrid;

/// How a converted image is scaled onto the target area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    /// Keep the source size
    #[default]
    Native,
    /// Largest size that fits the target while keeping the aspect ratio
    Fit,
    /// Exactly the target size
    Stretch,
}

/// Rasterizes images and text into palette colors
#[derive(Clone, Copy, Debug)]
pub struct ImageConverter {
    converter: ColorConverter,
    width: u32,
    height: u32,
    font: &'static MonoFont<'static>,
}

impl ImageConverter {
    /// Converter targeting a `width` x `height` area, usually the logical panel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            converter: ColorConverter::new(),
            width,
            height,
            font: &FONT_6X10,
        }
    }

    /// Use a different palette reduction
    #[must_use]
    pub fn with_color_converter(mut self, converter: ColorConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Use a different font for [`convert_text`](Self::convert_text)
    #[must_use]
    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Target area used by [`Scale::Fit`] and [`Scale::Stretch`]
    pub fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rasterize `image`, reduce it to the palette and scale it
    pub fn convert_image<Img>(&self, image: &Img, scale: Scale) -> PixelGrid
    where
        Img: ImageDrawable,
        Img::Color: Into<Rgb888>,
    {
        let size = image.size();
        let mut raster = Rasterizer {
            grid: PixelGrid::new(size.width, size.height),
            converter: self.converter,
            color: PhantomData,
        };
        let Ok(()) = image.draw(&mut raster);
        let grid = raster.grid;

        match scale {
            Scale::Native => grid,
            Scale::Stretch => grid.resize(self.width, self.height),
            Scale::Fit => {
                let (width, height) = self.fit(grid.width(), grid.height());
                grid.resize(width, height)
            }
        }
    }

    /// Render `text` in `color` on white
    ///
    /// The grid is sized to the text bounding box. Newlines start a new line.
    pub fn convert_text(&self, text: &str, color: Color) -> PixelGrid {
        let style = MonoTextStyle::new(self.font, color);
        let drawable = Text::with_baseline(text, Point::zero(), style, Baseline::Top);
        let bounds = drawable.bounding_box();
        let mut grid = PixelGrid::new(bounds.size.width, bounds.size.height);
        let Ok(_) = drawable.draw(&mut grid);
        grid
    }

    fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (width, height);
        }
        let (w, h) = (u64::from(width), u64::from(height));
        let (tw, th) = (u64::from(self.width), u64::from(self.height));
        // Compare tw/w against th/h without dividing
        if tw * h <= th * w {
            (self.width, ((h * tw) / w).max(1) as u32)
        } else {
            (((w * th) / h).max(1) as u32, self.height)
        }
    }
}

/// Draw target that palette-reduces whatever an image draws into it
struct Rasterizer<C> {
    grid: PixelGrid,
    converter: ColorConverter,
    color: PhantomData<C>,
}

impl<C> DrawTarget for Rasterizer<C>
where
    C: PixelColor + Into<Rgb888>,
{
    type Color = C;
    type Error = Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            let _ = self.grid.set(x, y, self.converter.convert_rgb(color.into()));
        }
        Ok(())
    }
}

impl<C> OriginDimensions for Rasterizer<C> {
    fn size(&self) -> Size {
        Size::new(self.grid.width(), self.grid.height())
    }
}
