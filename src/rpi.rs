//! Raspberry Pi hardware backends, built on rppal.
//!
//! Wiring (matches the stock Arduino sketch): Pi SDA → Uno A4, Pi SCL →
//! Uno A5, grounds cross-connected, LED on BCM pin 17. rppal errors are
//! mapped into `io::Error` so the core library stays hardware-agnostic.

use std::io;

use rppal::gpio::{Gpio, OutputPin};
use rppal::i2c::I2c;

use crate::bus::{CommandBus, Indicator};

/// I2C/SMBus link to the peripheral at a fixed 7-bit address.
pub struct PiBus {
    i2c: I2c,
}

impl PiBus {
    /// Open the default I2C bus (`/dev/i2c-1` on current boards) and
    /// target the peripheral at `addr`.
    pub fn open(addr: u16) -> io::Result<Self> {
        let mut i2c = I2c::new().map_err(io::Error::other)?;
        i2c.set_slave_address(addr).map_err(io::Error::other)?;
        Ok(Self { i2c })
    }
}

impl CommandBus for PiBus {
    fn write_block(&mut self, tag: u8, payload: &[u8]) -> io::Result<()> {
        self.i2c.block_write(tag, payload).map_err(io::Error::other)
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        self.i2c.smbus_receive_byte().map_err(io::Error::other)
    }
}

/// Acknowledgement LED on a BCM GPIO pin.
///
/// Claimed as an output driven low. rppal restores the pin to its
/// previous state on drop, so releasing the relay releases the line.
pub struct PiLed {
    pin: OutputPin,
}

impl PiLed {
    pub fn open(bcm_pin: u8) -> io::Result<Self> {
        let pin = Gpio::new()
            .map_err(io::Error::other)?
            .get(bcm_pin)
            .map_err(io::Error::other)?
            .into_output_low();
        Ok(Self { pin })
    }
}

impl Indicator for PiLed {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
