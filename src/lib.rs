//! Inky pHAT v2 E-Paper Display Driver
//!
//! A driver for the 104x212 black/white/red Inky pHAT v2 e-paper panel.
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc` for the frame buffer)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Palette reduction of ARGB colors, images and text
//! - Rotation support
//! - Configurable border color
//!
//! ## Usage
//!
//! ```
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::SpiDevice;
//! use inky_phat::{Builder, Color, Display, Error, Interface, Rotation};
//!
//! fn hello<SPI, DC, RST, BUSY, PinErr, D>(
//!     interface: Interface<SPI, DC, RST, BUSY>,
//!     delay: &mut D,
//! ) -> Result<Interface<SPI, DC, RST, BUSY>, Error<Interface<SPI, DC, RST, BUSY>>>
//! where
//!     SPI: SpiDevice,
//!     DC: OutputPin<Error = PinErr>,
//!     RST: OutputPin<Error = PinErr>,
//!     BUSY: InputPin<Error = PinErr>,
//!     PinErr: core::fmt::Debug,
//!     D: DelayNs,
//! {
//!     let config = Builder::new()
//!         .rotation(Rotation::Rotate90)
//!         .border(Color::Black)
//!         .build();
//!
//!     let mut display = Display::new(interface, config)?;
//!     display.set_pixel(0, 0, Color::Red)?;
//!     display.set_border_index(2)?;
//!     display.refresh(delay)?;
//!     display.close()
//! }
//! ```

#![no_std]

extern crate alloc;

/// Two-plane pixel buffer
pub mod buffer;
/// Palette colors and color reduction
pub mod color;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Rectangular blocks of palette colors
pub mod grid;
/// Hardware interface abstraction
pub mod interface;
/// Waveform look-up table
pub mod lut;
/// Coordinate rotation utilities
pub mod rotation;
/// Refresh register script
pub mod sequence;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;
/// Image and text rasterization (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod image;

pub use buffer::PixelBuffer;
pub use color::{Color, ColorConverter, DEFAULT_ALPHA_THRESHOLD, Plane};
pub use config::{Builder, Config, Dimensions, PANEL_COLS, PANEL_ROWS, Rotation};
pub use display::Display;
pub use error::{BufferError, BuilderError, Error, InvalidPalette};
pub use grid::PixelGrid;
pub use interface::InterfaceError;
pub use interface::{DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface, SPI_MODE};

#[cfg(feature = "graphics")]
pub use image::{ImageConverter, Scale};
