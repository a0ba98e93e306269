//! One command/acknowledgement transaction against the peripheral.
//!
//! Write-then-read with a fixed settling delay in between. There is no
//! ready/busy handshake: the peripheral prepares its response register
//! while we sleep, and a slower peripheral can still lose that race.
//! Transport faults are returned as typed errors, but callers have no
//! recovery policy — the console lets them terminate the process.

use std::fmt;
use std::io;
use std::thread;
use std::time::Duration;

use crate::ack::Ack;
use crate::bus::{CMD_TAG, CommandBus, Indicator};
use crate::command::Command;

/// Wait between the command write and the acknowledgement read.
///
/// The peripheral is itself relaying to a slower downstream audio module;
/// reading earlier races its write of the response register.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Poll interval for the abort check during the settle window.
const ABORT_POLL: Duration = Duration::from_millis(25);

/// Errors from a relay transaction.
#[derive(Debug)]
pub enum RelayError {
    /// Command block write failed (peripheral absent, address NACK).
    Write(io::Error),
    /// Acknowledgement read failed.
    Read(io::Error),
    /// The abort check tripped; no further bus operation was issued.
    Interrupted,
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Write(e) => write!(f, "command write failed: {e}"),
            RelayError::Read(e) => write!(f, "acknowledgement read failed: {e}"),
            RelayError::Interrupted => write!(f, "transaction interrupted"),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Write(e) | RelayError::Read(e) => Some(e),
            RelayError::Interrupted => None,
        }
    }
}

/// Context object owning the bus and indicator handles.
///
/// Synchronous, single-threaded. One [`transact()`](Self::transact) call
/// per operator command; no state is carried between transactions.
///
/// # Example
///
/// ```no_run
/// # #[cfg(feature = "hardware")] {
/// use dfrelay::rpi::{PiBus, PiLed};
/// use dfrelay::{Command, PERIPHERAL_ADDR, Relay};
///
/// let bus = PiBus::open(PERIPHERAL_ADDR)?;
/// let led = PiLed::open(17)?;
/// let mut relay = Relay::new(bus, led);
/// let ack = relay.transact(Command::from_char('A').unwrap())?;
/// println!("{ack}");
/// # }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Relay<B, L> {
    bus: B,
    indicator: L,
    settle: Duration,
    /// Called at the top of `transact()`, after the indicator drops.
    on_send: Option<Box<dyn FnMut(Command)>>,
    /// Called with every acknowledgement before `transact()` returns.
    on_ack: Option<Box<dyn FnMut(Ack)>>,
    /// Consulted before the write and across the settle window.
    abort: Option<Box<dyn FnMut() -> bool>>,
}

impl<B: CommandBus, L: Indicator> Relay<B, L> {
    pub fn new(bus: B, indicator: L) -> Self {
        Self {
            bus,
            indicator,
            settle: SETTLE_DELAY,
            on_send: None,
            on_ack: None,
            abort: None,
        }
    }

    /// Override [`SETTLE_DELAY`]. Tests set this to zero.
    pub fn set_settle(&mut self, settle: Duration) {
        self.settle = settle;
    }

    /// Register a callback invoked at the top of every transaction.
    pub fn set_on_send(&mut self, f: impl FnMut(Command) + 'static) {
        self.on_send = Some(Box::new(f));
    }

    /// Register a callback invoked with every acknowledgement.
    pub fn set_on_ack(&mut self, f: impl FnMut(Ack) + 'static) {
        self.on_ack = Some(Box::new(f));
    }

    /// Register an abort check, consulted before the command write and
    /// repeatedly across the settle window.
    ///
    /// Once it returns `true` the transaction stops with
    /// [`RelayError::Interrupted`] and no further bus operation is
    /// issued — in particular, an interrupt landing during the settle
    /// sleep suppresses the acknowledgement read. The console wires this
    /// to its Ctrl-C flag.
    pub fn set_abort_check(&mut self, f: impl FnMut() -> bool + 'static) {
        self.abort = Some(Box::new(f));
    }

    /// Run one full transaction: drop the indicator, write
    /// `[CMD_TAG, command]`, wait for the peripheral to settle, read the
    /// acknowledgement, and raise the indicator if it was accepted.
    pub fn transact(&mut self, command: Command) -> Result<Ack, RelayError> {
        self.indicator.set_low();
        if self.check_abort() {
            return Err(RelayError::Interrupted);
        }
        if let Some(cb) = self.on_send.as_mut() {
            cb(command);
        }

        self.bus
            .write_block(CMD_TAG, &[command.as_byte()])
            .map_err(RelayError::Write)?;

        self.settle_out()?;

        let byte = self.bus.read_byte().map_err(RelayError::Read)?;
        let ack = Ack::from_byte(byte);
        if ack.is_accepted() {
            self.indicator.set_high();
        }
        if let Some(cb) = self.on_ack.as_mut() {
            cb(ack);
        }
        Ok(ack)
    }

    /// Drive the indicator to its inactive state and release both handles.
    pub fn shutdown(mut self) {
        self.indicator.set_low();
    }

    /// Tear down without touching the indicator, returning the handles.
    pub fn into_parts(self) -> (B, L) {
        (self.bus, self.indicator)
    }

    fn check_abort(&mut self) -> bool {
        self.abort.as_mut().is_some_and(|f| f())
    }

    /// Sleep out the settle window, polling the abort check so an
    /// interrupt mid-sleep never reaches the acknowledgement read.
    fn settle_out(&mut self) -> Result<(), RelayError> {
        if self.abort.is_none() {
            thread::sleep(self.settle);
            return Ok(());
        }

        let mut remaining = self.settle;
        loop {
            if self.check_abort() {
                return Err(RelayError::Interrupted);
            }
            if remaining.is_zero() {
                return Ok(());
            }
            let slice = remaining.min(ABORT_POLL);
            thread::sleep(slice);
            remaining -= slice;
        }
    }
}
