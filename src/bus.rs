//! Seams between the relay logic and real hardware.
//!
//! [`Relay`](crate::relay::Relay) is written against these two traits so
//! the transaction can run against scripted doubles in tests and against
//! rppal-backed implementations (see [`rpi`](crate::rpi)) on a Pi.

use std::io;

/// Fixed 7-bit I2C address the peripheral listens on.
///
/// Set by the Arduino sketch; `i2cdetect -y 1` should show the device
/// here, and the Arduino needs a reset if it does not.
pub const PERIPHERAL_ADDR: u16 = 0x04;

/// Selector byte leading every command block.
///
/// A message-type tag for the peripheral's receiver. Fixed at `0x01` —
/// nothing in this version ever varies it.
pub const CMD_TAG: u8 = 0x01;

/// Block-write / byte-read access to the peripheral.
///
/// Both operations block until the bus transaction completes or the
/// driver reports a fault; there is no application-level timeout.
pub trait CommandBus {
    /// Write `payload` to the peripheral, led by the `tag` selector byte.
    ///
    /// For a command `c` the bytes on the wire are exactly
    /// `[tag, ord(c)]`.
    fn write_block(&mut self, tag: u8, payload: &[u8]) -> io::Result<()>;

    /// Read the single response byte from the peripheral.
    fn read_byte(&mut self) -> io::Result<u8>;
}

/// Binary status line raised on a confirmed acknowledgement.
///
/// Held low from the start of each transaction, so low doubles as
/// "transaction in flight / no confirmed success yet".
pub trait Indicator {
    fn set_high(&mut self);
    fn set_low(&mut self);
}
