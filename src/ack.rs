//! The acknowledgement byte read back after every command.

use std::fmt;

/// Byte value the peripheral returns for an accepted command.
pub const ACK_ACCEPTED: u8 = 0x01;

/// Peripheral acknowledgement.
///
/// The peripheral does not distinguish "busy", "rejected", and
/// "malfunctioning" — anything other than `0x01` is a rejection, with the
/// raw byte preserved for the operator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Accepted,
    Rejected(u8),
}

impl Ack {
    pub fn from_byte(b: u8) -> Self {
        if b == ACK_ACCEPTED {
            Self::Accepted
        } else {
            Self::Rejected(b)
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The raw byte as read off the bus.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Accepted => ACK_ACCEPTED,
            Self::Rejected(b) => b,
        }
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected(b) => write!(f, "rejected (0x{b:02X})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_is_accepted() {
        assert_eq!(Ack::from_byte(1), Ack::Accepted);
        for b in [0, 2, 0x7F, 255] {
            assert_eq!(Ack::from_byte(b), Ack::Rejected(b));
            assert!(!Ack::from_byte(b).is_accepted());
        }
    }

    #[test]
    fn raw_byte_round_trip() {
        for b in 0..=255u8 {
            assert_eq!(Ack::from_byte(b).as_byte(), b);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Ack::Accepted.to_string(), "accepted");
        assert_eq!(Ack::Rejected(0xFF).to_string(), "rejected (0xFF)");
    }
}
