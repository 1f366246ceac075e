//! Controller command definitions
//!
//! Opcodes written by the refresh sequence. Commands are sent over SPI with the
//! DC pin low for the opcode and high for its payload.
//!
//! ## Command Structure
//!
//! All register writes follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send opcode byte
//! 3. Set DC high (data mode)
//! 4. Send payload bytes (if any)
//!
//! Swapping the order makes the controller interpret payload as opcodes.
//!
//! ## Example
//!
//! ```
//! use inky_phat::{command, DisplayInterface};
//!
//! fn white_border<I: DisplayInterface>(interface: &mut I) -> Result<(), I::Error> {
//!     interface.send_command(command::BORDER_CONTROL)?;
//!     interface.send_data(&[0xFF])
//! }
//! ```

// System control commands

/// Soft reset command (0x12)
///
/// Resets the controller to default state. Must wait for BUSY to clear after issuing.
pub const RESET: u8 = 0x12;

/// Driver output control command (0x01)
///
/// Sets the number of gate lines and scanning direction.
/// 3 bytes: [rows-1 (LSB), rows-1 (MSB), scanning mode]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Dummy line period command (0x03)
///
/// Opcode used by the validated bring-up sequence for the dummy line period.
/// 1 byte.
pub const DUMMY_LINE_PERIOD: u8 = 0x03;

/// Gate line width command (0x3B)
///
/// 1 byte.
pub const GATE_LINE_WIDTH: u8 = 0x3B;

/// Data entry mode command (0x11)
///
/// Controls the address counter auto-increment direction.
/// 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE: u8 = 0x11;

// RAM and data commands

/// Set RAM X address range command (0x44)
///
/// 2 bytes in byte units: [start, end]
pub const RAM_X_ADDRESS: u8 = 0x44;

/// Set RAM Y address range command (0x45)
///
/// 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const RAM_Y_ADDRESS: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// 1 byte.
pub const RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// 2 bytes: [address_LSB, address_MSB]
pub const RAM_Y_COUNTER: u8 = 0x4F;

/// Write black RAM command (0x24)
///
/// Followed by the black bitplane (one bit per pixel).
pub const DATA_START_TRANSMISSION_1: u8 = 0x24;

/// Write red RAM command (0x26)
///
/// Followed by the red bitplane (one bit per pixel).
pub const DATA_START_TRANSMISSION_2: u8 = 0x26;

// Display update commands

/// Display update control 2 command (0x22)
///
/// Selects the update sequence run on activation. 1 byte.
pub const DISPLAY_UPDATE_SETTING: u8 = 0x22;

/// Master activation command (0x20)
///
/// Triggers the display update sequence. BUSY is asserted during update.
pub const DISPLAY_UPDATE_ACTIVATE: u8 = 0x20;

/// Border waveform control command (0x3C)
///
/// 1 byte, see [`border_value`](crate::sequence::border_value).
pub const BORDER_CONTROL: u8 = 0x3C;

// Power and LUT commands

/// Write LUT command (0x32)
///
/// Loads the waveform table, see [`crate::lut`].
pub const SEND_LUTS: u8 = 0x32;

/// Source driving voltage command (0x04)
///
/// Sets VSH1, VSH2, VSL. 3 bytes.
pub const SOURCE_DRIVING_VOLTAGE: u8 = 0x04;

/// Write VCOM command (0x2C)
///
/// 1 byte.
pub const VCOM_REGISTER: u8 = 0x2C;
