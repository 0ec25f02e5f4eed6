//! Command decoding.

use crate::common::constants::{
    CMD_COUNT_LONG, CMD_COUNT_SHORT, CMD_QUIT, LONG_COUNT_LIMIT, SHORT_COUNT_LIMIT,
};

/// Action selected by one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the command loop.
    Quit,
    /// Reset the counter and count up to the inclusive limit.
    Count(u32),
    /// Unrecognised character; reported and ignored.
    Unknown(char),
}

impl Command {
    /// Classifies an input character.
    pub const fn from_char(c: char) -> Self {
        match c {
            CMD_QUIT => Self::Quit,
            CMD_COUNT_SHORT => Self::Count(SHORT_COUNT_LIMIT),
            CMD_COUNT_LONG => Self::Count(LONG_COUNT_LIMIT),
            other => Self::Unknown(other),
        }
    }

    /// Counting limit, if this command runs a counting operation.
    pub const fn limit(self) -> Option<u32> {
        match self {
            Self::Count(limit) => Some(limit),
            Self::Quit | Self::Unknown(_) => None,
        }
    }
}

impl From<char> for Command {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}
