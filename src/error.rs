use thiserror::Error;

/// Errors from operator command validation.
///
/// Both variants are recovered locally by re-prompting; they never
/// terminate the process.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("expected exactly one character, got {len}")]
    WrongLength { len: usize },

    #[error("'{ch}' is not a valid command (allowed: A-Z, 0-9, space)")]
    NotAllowed { ch: char },
}
