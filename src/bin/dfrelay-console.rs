//! Interactive operator console for the DFPlayer command relay.
//!
//! Prompts for one-character commands, relays each over I2C to the
//! Arduino at address 0x04, and reports the acknowledgement. The LED on
//! BCM pin 17 goes high once a command is confirmed and drops at the
//! start of the next transaction.
//!
//! Usage: cargo run --features hardware --bin dfrelay-console

use std::io;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use dfrelay::command::FIRMWARE_COMMANDS;
use dfrelay::console::prompt_command;
use dfrelay::rpi::{PiBus, PiLed};
use dfrelay::{Command, PERIPHERAL_ADDR, Relay, RelayError};

/// BCM pin driving the acknowledgement LED.
const LED_PIN: u8 = 17;

/// Pause at the end of each transaction before re-prompting.
const CYCLE_DELAY: Duration = Duration::from_millis(500);

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let bus = PiBus::open(PERIPHERAL_ADDR)?;
    let led = PiLed::open(LED_PIN)?;
    let mut relay = Relay::new(bus, led);

    // A Ctrl-C mid-transaction stops it before the next bus operation.
    let flag = Arc::clone(&interrupted);
    relay.set_abort_check(move || flag.load(Ordering::SeqCst));

    // Wire-level trace lines.
    relay.set_on_send(|cmd| println!(">> tag 0x01, payload 0x{:02X} ('{cmd}')", cmd.as_byte()));
    relay.set_on_ack(|ack| println!("<< 0x{:02X}", ack.as_byte()));

    print_menu();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while !interrupted.load(Ordering::SeqCst) {
        let Some(command) = prompt_command(&mut input, &mut io::stdout(), &interrupted)? else {
            break;
        };

        match relay.transact(command) {
            Ok(ack) if ack.is_accepted() => report_accepted(command),
            Ok(ack) => println!("peripheral {ack}"),
            Err(RelayError::Interrupted) => break,
            Err(e) => return Err(e.into()),
        }

        thread::sleep(CYCLE_DELAY);
    }

    relay.shutdown();
    println!("shutting down");
    Ok(())
}

fn report_accepted(command: Command) {
    match command.describe() {
        Some(label) => println!("peripheral accepted '{command}' ({label})"),
        None => println!("peripheral accepted '{command}'"),
    }
}

fn print_menu() {
    println!("DFPlayer relay console (peripheral at 0x{PERIPHERAL_ADDR:02X})");
    println!("commands implemented by the stock firmware:");
    for (ch, label) in FIRMWARE_COMMANDS {
        println!("  {ch}  {label}");
    }
    println!("other whitelisted characters are relayed as-is.");
    println!();
}
