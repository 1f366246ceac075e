//! Waveform look-up table
//!
//! The table is loaded with [`SEND_LUTS`](crate::command::SEND_LUTS) on every
//! refresh. It was tuned against the black/white/red panel and must be sent
//! unmodified.

/// LUT length in bytes
pub const LUT_SIZE: usize = 70;

/// Black/white/red waveform
///
/// Five 7-byte voltage rows (black, white, unused, red, VCOM) followed by seven
/// 5-byte phase timing rows (four durations and a repeat count).
#[rustfmt::skip]
pub const LUT_RED: [u8; LUT_SIZE] = [
    // Phase 0     1     2     3     4     5     6
    0x48, 0xA0, 0x10, 0x10, 0x13, 0x00, 0x00, // LUT0 black
    0x48, 0xA0, 0x80, 0x00, 0x03, 0x00, 0x00, // LUT1 white
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT2 unused
    0x48, 0xA5, 0x00, 0xBB, 0x00, 0x00, 0x00, // LUT3 red
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT4 VCOM

    // A     B     C     D   repeat
    0x40, 0x0C, 0x20, 0x0C, 0x06, // flash
    0x10, 0x08, 0x04, 0x04, 0x06, // clear
    0x04, 0x08, 0x08, 0x10, 0x10, // bring in black
    0x02, 0x02, 0x02, 0x40, 0x20, // bring in red
    0x02, 0x02, 0x02, 0x02, 0x02, // sharpen
    0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00,
];
