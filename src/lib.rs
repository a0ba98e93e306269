//! Client for a two-board DFPlayer setup: an Arduino drives the DFPlayer
//! Mini MP3 module, and this side relays one-character commands to it over
//! I2C/SMBus, reading back a one-byte acknowledgement per command.
//!
//! The core is hardware-agnostic: [`Relay`] runs the transaction against
//! anything implementing [`CommandBus`] and [`Indicator`]. The `hardware`
//! feature adds Raspberry Pi backends ([`rpi`]) and the operator console
//! binary.

pub mod ack;
pub mod bus;
pub mod command;
pub mod console;
pub mod error;
pub mod relay;
#[cfg(feature = "hardware")]
pub mod rpi;

pub use ack::Ack;
pub use bus::{CMD_TAG, CommandBus, Indicator, PERIPHERAL_ADDR};
pub use command::Command;
pub use error::CommandError;
pub use relay::{Relay, RelayError, SETTLE_DELAY};
