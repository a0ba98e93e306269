//! Operator command validation.

use std::fmt;

use crate::error::CommandError;

/// Commands the stock Arduino firmware implements, with labels.
///
/// The whitelist is wider than this table; unlisted characters are relayed
/// unmodified and the firmware decides what to do with them.
pub const FIRMWARE_COMMANDS: &[(char, &str)] = &[
    ('A', "play next track"),
    ('B', "play previous track"),
    ('C', "pause playback"),
    ('D', "resume playback"),
    ('E', "volume up"),
    ('F', "volume down"),
];

/// A validated one-character command.
///
/// Allowed characters are `A`-`Z`, `0`-`9`, and space. The relay assigns
/// them no meaning of its own — interpretation is the peripheral
/// firmware's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command(char);

impl Command {
    /// Validate one line of console input.
    ///
    /// A trailing line terminator is ignored; everything else must be
    /// exactly one whitelisted character. Empty and multi-character input
    /// fail the same length check — they are not distinguished.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.strip_suffix('\n').unwrap_or(input);
        let input = input.strip_suffix('\r').unwrap_or(input);

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => Err(CommandError::WrongLength {
                len: input.chars().count(),
            }),
        }
    }

    /// Validate a single character against the whitelist.
    pub fn from_char(ch: char) -> Result<Self, CommandError> {
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == ' ' {
            Ok(Self(ch))
        } else {
            Err(CommandError::NotAllowed { ch })
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// ASCII code transmitted as the command payload.
    pub fn as_byte(self) -> u8 {
        self.0 as u8
    }

    /// Label from [`FIRMWARE_COMMANDS`], if the stock firmware documents
    /// this command.
    pub fn describe(self) -> Option<&'static str> {
        FIRMWARE_COMMANDS
            .iter()
            .find(|&&(ch, _)| ch == self.0)
            .map(|&(_, label)| label)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_whitelist() {
        for ch in ('A'..='Z').chain('0'..='9').chain(std::iter::once(' ')) {
            let cmd = Command::from_char(ch).unwrap();
            assert_eq!(cmd.as_char(), ch);
            assert_eq!(cmd.as_byte(), ch as u8);
        }
    }

    #[test]
    fn rejects_lowercase() {
        assert_eq!(
            Command::parse("a"),
            Err(CommandError::NotAllowed { ch: 'a' })
        );
    }

    #[test]
    fn rejects_punctuation() {
        assert!(Command::from_char('!').is_err());
        assert!(Command::from_char('\t').is_err());
    }

    #[test]
    fn rejects_multi_character() {
        assert_eq!(
            Command::parse("AB"),
            Err(CommandError::WrongLength { len: 2 })
        );
    }

    #[test]
    fn rejects_empty_line() {
        assert_eq!(Command::parse(""), Err(CommandError::WrongLength { len: 0 }));
        assert_eq!(
            Command::parse("\n"),
            Err(CommandError::WrongLength { len: 0 })
        );
    }

    #[test]
    fn strips_line_terminators() {
        assert_eq!(Command::parse("A\n").unwrap().as_byte(), 65);
        assert_eq!(Command::parse("E\r\n").unwrap().as_char(), 'E');
        // A bare space command survives terminator stripping.
        assert_eq!(Command::parse(" \n").unwrap().as_char(), ' ');
    }

    #[test]
    fn describe_covers_stock_firmware() {
        assert_eq!(Command::from_char('E').unwrap().describe(), Some("volume up"));
        assert_eq!(Command::from_char('Z').unwrap().describe(), None);
    }
}
