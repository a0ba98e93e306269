//! The operator input loop.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::command::Command;

/// Prompt text written before each read.
pub const PROMPT: &str = "command (A-Z, 0-9, space; Ctrl-C to quit)> ";

/// Prompt until the operator supplies a valid command.
///
/// Invalid input — an empty line, more than one character, a character
/// outside the whitelist — is reported on `output` and re-prompted, with
/// no retry bound. Returns `None` on end of input or once `interrupted`
/// is set.
///
/// `read_line` blocks through SIGINT (the restarted syscall never
/// surfaces it), so the flag is re-checked when the line arrives: a line
/// already typed when the signal landed is discarded unparsed rather than
/// returned as a command.
pub fn prompt_command(
    input: &mut impl BufRead,
    output: &mut impl Write,
    interrupted: &AtomicBool,
) -> io::Result<Option<Command>> {
    let mut line = String::new();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(None);
        }

        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if interrupted.load(Ordering::SeqCst) {
            return Ok(None);
        }

        match Command::parse(&line) {
            Ok(command) => return Ok(Some(command)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
