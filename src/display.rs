//! Core display operations
//!
//! [`Display`] owns the hardware interface and the [`PixelBuffer`]. Drawing only
//! touches memory; nothing reaches the panel until [`Display::refresh`] streams
//! both bitplanes through the register script in [`crate::sequence`].
//!
//! The driver lifecycle maps onto ownership:
//!
//! - [`Display::new`] configures the lines and yields a ready driver
//! - [`Display::refresh`] holds `&mut self` while the panel updates, so the
//!   buffer cannot change mid-transfer
//! - [`Display::close`] consumes the driver and hands the interface back

use embedded_hal::delay::DelayNs;

use crate::buffer::PixelBuffer;
use crate::color::{Color, ColorConverter};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::grid::PixelGrid;
use crate::interface::DisplayInterface;
use crate::sequence::{Payload, REFRESH_SEQUENCE, Step, border_value};

type DisplayResult<I, T = ()> = core::result::Result<T, Error<I>>;

/// Core display driver
///
/// Generic over any [`DisplayInterface`], so the same driver runs against real
/// SPI hardware or a recording test double.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pending frame
    buffer: PixelBuffer,
    /// Border color sent on the next refresh
    border: Color,
    /// Palette reduction for ARGB input
    converter: ColorConverter,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Drives DC low and RST high, and allocates an all-white buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the interface lines cannot be set.
    pub fn new(mut interface: I, config: Config) -> DisplayResult<I, Self> {
        interface.configure().map_err(Error::Configuration)?;
        let buffer = PixelBuffer::new(config.dimensions(), config.rotation);
        log::debug!(
            "display ready: {}x{} native, {:?}",
            config.dimensions().cols,
            config.dimensions().rows,
            config.rotation
        );
        Ok(Self {
            interface,
            config,
            buffer,
            border: config.border,
            converter: ColorConverter::new(),
        })
    }

    /// Set a single pixel in the buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if (x, y) is outside the panel.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> DisplayResult<I> {
        self.buffer.set_pixel(x, y, color)?;
        Ok(())
    }

    /// Set a single pixel from a packed `0xAARRGGBB` value
    ///
    /// The value is reduced to the palette with the display's
    /// [`ColorConverter`].
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if (x, y) is outside the panel.
    pub fn set_pixel_argb(&mut self, x: u32, y: u32, argb: u32) -> DisplayResult<I> {
        let color = self.converter.convert(argb);
        self.set_pixel(x, y, color)
    }

    /// Read a single pixel from the buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if (x, y) is outside the panel.
    pub fn pixel(&self, x: u32, y: u32) -> DisplayResult<I, Color> {
        Ok(self.buffer.pixel(x, y)?)
    }

    /// Copy a block of pixels with its top-left corner at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` naming the first pixel that does not fit. The
    /// buffer is left unchanged.
    pub fn set_image(&mut self, x: u32, y: u32, grid: &PixelGrid) -> DisplayResult<I> {
        self.buffer.set_image(x, y, grid)?;
        Ok(())
    }

    /// Fill the buffer with one color
    pub fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    /// Set the border color used by the next refresh
    pub fn set_border(&mut self, color: Color) {
        self.border = color;
    }

    /// Set the border from a palette index (0 white, 1 black, 2 red)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPalette` for any other index; the border is
    /// unchanged.
    pub fn set_border_index(&mut self, index: u8) -> DisplayResult<I> {
        self.border = Color::try_from(index)?;
        Ok(())
    }

    /// Border color used by the next refresh
    pub fn border(&self) -> Color {
        self.border
    }

    /// Replace the converter used by [`set_pixel_argb`](Self::set_pixel_argb)
    pub fn set_color_converter(&mut self, converter: ColorConverter) {
        self.converter = converter;
    }

    /// Converter used for ARGB input
    pub fn color_converter(&self) -> ColorConverter {
        self.converter
    }

    /// Pending frame
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Pending frame, mutable
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Get native display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions()
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Logical width after rotation
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Logical height after rotation
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pulse the reset line
    ///
    /// Not part of [`refresh`](Self::refresh), which issues a soft reset. Use
    /// this to recover a controller that stopped answering.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transfer` if the reset line cannot be driven.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("hardware reset");
        self.interface.reset(delay).map_err(Error::Transfer)
    }

    /// Push the buffer and border to the panel and wait for the update
    ///
    /// Blocks until the controller drops its busy line after activation. The
    /// first failed transfer aborts the refresh; nothing after it is sent and
    /// the panel may be left mid-update.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transfer` with the interface error that stopped the
    /// sequence, including a busy-wait timeout.
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("refresh started, border {:?}", self.border);

        for step in &REFRESH_SEQUENCE {
            match *step {
                Step::Command(opcode, payload) => {
                    log::trace!("register {opcode:#04x}");
                    self.send_command(opcode)?;
                    match payload {
                        Payload::None => {}
                        Payload::Fixed(bytes) => self.send_data(bytes)?,
                        Payload::Border => self.send_data(&[border_value(self.border)])?,
                        Payload::Plane(plane) => self
                            .interface
                            .send_data(self.buffer.plane(plane))
                            .map_err(Error::Transfer)?,
                    }
                }
                Step::Data(bytes) => {
                    log::trace!("data {bytes:02x?}");
                    self.send_data(bytes)?;
                }
                Step::AwaitReady => self.interface.busy_wait(delay).map_err(Error::Transfer)?,
            }
        }

        log::debug!("refresh complete");
        Ok(())
    }

    /// Release the lines and hand the interface back
    ///
    /// # Errors
    ///
    /// Returns `Error::Release` if the lines cannot be returned to idle. The
    /// interface is dropped in that case, releasing its peripherals.
    pub fn close(mut self) -> DisplayResult<I, I> {
        match self.interface.release() {
            Ok(()) => {
                log::debug!("display closed");
                Ok(self.interface)
            }
            Err(e) => {
                log::warn!("display release failed, the next open may misbehave: {e:?}");
                Err(Error::Release(e))
            }
        }
    }

    /// Render `text` and place it with its top-left corner at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the rendered text does not fit; the
    /// buffer is unchanged.
    #[cfg(feature = "graphics")]
    pub fn set_text(&mut self, x: u32, y: u32, text: &str, color: Color) -> DisplayResult<I> {
        let grid = self.image_converter().convert_text(text, color);
        self.set_image(x, y, &grid)
    }

    /// Convert `image` and place it with its top-left corner at (x, y)
    ///
    /// `scale` is relative to the logical panel size.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the converted image does not fit; the
    /// buffer is unchanged.
    #[cfg(feature = "graphics")]
    pub fn set_picture<Img>(
        &mut self,
        x: u32,
        y: u32,
        image: &Img,
        scale: crate::image::Scale,
    ) -> DisplayResult<I>
    where
        Img: embedded_graphics_core::image::ImageDrawable,
        Img::Color: Into<embedded_graphics_core::pixelcolor::Rgb888>,
    {
        let grid = self.image_converter().convert_image(image, scale);
        self.set_image(x, y, &grid)
    }

    #[cfg(feature = "graphics")]
    fn image_converter(&self) -> crate::image::ImageConverter {
        crate::image::ImageConverter::new(self.width(), self.height())
            .with_color_converter(self.converter)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Transfer)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Transfer)
    }
}
