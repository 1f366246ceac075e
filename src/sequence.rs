//! Refresh register script
//!
//! [`REFRESH_SEQUENCE`] is the complete bring-up, RAM load and update sequence
//! run by [`Display::refresh`](crate::Display::refresh). It is a static table;
//! only the border byte and the two bitplanes are injected at run time.
//!
//! The bytes match the sequence the panel was validated against, including the
//! undocumented `0x75, 0x3B` pair and the fifth byte on the first RAM Y window
//! write. Do not change them without re-validating on hardware.

use crate::color::{Color, Plane};
use crate::command::*;
use crate::lut::LUT_RED;

/// Border register value for a white border
pub const BORDER_WHITE: u8 = 0xFF;
/// Border register value for a black border
pub const BORDER_BLACK: u8 = 0x00;
/// Border register value for a red border
pub const BORDER_RED: u8 = 0x33;

/// Border register value for a color
pub const fn border_value(color: Color) -> u8 {
    match color {
        Color::White => BORDER_WHITE,
        Color::Black => BORDER_BLACK,
        Color::Red => BORDER_RED,
    }
}

/// Payload following an opcode
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payload {
    /// No data phase at all
    None,
    /// Fixed bytes
    Fixed(&'static [u8]),
    /// The current border register value
    Border,
    /// A bitplane from the pixel buffer
    Plane(Plane),
}

/// One step of the refresh script
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Opcode with DC low, then its payload with DC high
    Command(u8, Payload),
    /// Bytes with DC high and no preceding opcode
    Data(&'static [u8]),
    /// Block until the busy line reports ready
    AwaitReady,
}

const RAM_WINDOW_RESET: [Step; 4] = [
    Step::Command(RAM_X_ADDRESS, Payload::Fixed(&[0x00, 0x0C])),
    Step::Command(RAM_Y_ADDRESS, Payload::Fixed(&[0x00, 0x00, 0xD3, 0x00])),
    Step::Command(RAM_X_COUNTER, Payload::Fixed(&[0x00])),
    Step::Command(RAM_Y_COUNTER, Payload::Fixed(&[0x00, 0x00])),
];

/// Full refresh script
pub const REFRESH_SEQUENCE: [Step; 27] = [
    Step::Command(RESET, Payload::None),
    Step::AwaitReady,
    // Analog control block
    Step::Data(&[0x74, 0x54]),
    Step::Data(&[0x75, 0x3B]),
    // Panel geometry and scan direction
    Step::Command(DRIVER_OUTPUT_CONTROL, Payload::Fixed(&[0xD3, 0x00, 0x00])),
    Step::Command(DUMMY_LINE_PERIOD, Payload::Fixed(&[0x07])),
    Step::Command(GATE_LINE_WIDTH, Payload::Fixed(&[0x04])),
    Step::Command(DATA_ENTRY_MODE, Payload::Fixed(&[0x03])),
    // RAM window
    Step::Command(RAM_X_ADDRESS, Payload::Fixed(&[0x00, 0x0C])),
    Step::Command(RAM_Y_ADDRESS, Payload::Fixed(&[0x00, 0x00, 0xD3, 0x00, 0x00])),
    // Voltages
    Step::Command(SOURCE_DRIVING_VOLTAGE, Payload::Fixed(&[0x2D, 0xB2, 0x22])),
    Step::Command(VCOM_REGISTER, Payload::Fixed(&[0x3C])),
    Step::Command(BORDER_CONTROL, Payload::Border),
    Step::Command(SEND_LUTS, Payload::Fixed(&LUT_RED)),
    RAM_WINDOW_RESET[0],
    RAM_WINDOW_RESET[1],
    RAM_WINDOW_RESET[2],
    RAM_WINDOW_RESET[3],
    Step::Command(DATA_START_TRANSMISSION_1, Payload::Plane(Plane::Black)),
    RAM_WINDOW_RESET[0],
    RAM_WINDOW_RESET[1],
    RAM_WINDOW_RESET[2],
    RAM_WINDOW_RESET[3],
    Step::Command(DATA_START_TRANSMISSION_2, Payload::Plane(Plane::Red)),
    Step::Command(DISPLAY_UPDATE_SETTING, Payload::Fixed(&[0xC7])),
    Step::Command(DISPLAY_UPDATE_ACTIVATE, Payload::None),
    Step::AwaitReady,
];
