//! Program-wide constants.
//!
//! This module collects the fixed values of the lab template:
//! 1. **Commands:** The characters that select an action.
//! 2. **Limits:** Inclusive bounds for the two counting operations.
//! 3. **Console text:** Prompt, headers, and line terminator.
//! 4. **Hardware:** The 8051 system clock used by the simulated clock.

/// Command character that ends the program.
pub const CMD_QUIT: char = 'q';

/// Command character that counts to [`SHORT_COUNT_LIMIT`].
pub const CMD_COUNT_SHORT: char = '1';

/// Command character that counts to [`LONG_COUNT_LIMIT`].
pub const CMD_COUNT_LONG: char = '2';

/// Inclusive bound of the short counting operation.
pub const SHORT_COUNT_LIMIT: u32 = 30;

/// Inclusive bound of the long counting operation.
///
/// Larger than `u8::MAX`, so the counter wraps partway through.
pub const LONG_COUNT_LIMIT: u32 = 300;

/// Line terminator used for all console output.
pub const CRLF: &str = "\r\n";

/// Prompt printed at the start of every command-loop iteration.
pub const PROMPT: &str =
    "Press '1' to count to 30, Press '2' to count to 300, press 'q' to quit: ";

/// Column header printed before each counting operation.
pub const COUNT_HEADER: &str = "Iteration\tCounts (DEC)\tCounts (HEX)\r\n";

/// C8051 system clock frequency in Hz (22.1184 MHz crystal).
pub const SYSCLK_HZ: u64 = 22_118_400;
