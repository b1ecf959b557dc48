//! Raw ANSI escape handling — sequence construction and stripping.
//!
//! Colors are carried through the crate as full escape-sequence strings rather
//! than an RGB type, so user-supplied 256-color codes pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Matches CSI/OSC-style sequences: ESC or the single-byte CSI, private
/// markers, parameter and intermediate bytes, and a final byte, or the 7-bit
/// alternative terminated by BEL.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{1b}\x{9b}][\[\]()#;?]*(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x{7}|(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~])",
    )
    .expect("Invalid ANSI regex")
});

/// The ANSI escape sequence for red.
pub const RED: &str = "\x1b[31m";

/// The ANSI escape sequence for green.
pub const GREEN: &str = "\x1b[32m";

/// The ANSI escape sequence for yellow.
pub const YELLOW: &str = "\x1b[33m";

/// The ANSI escape sequence for blue.
pub const BLUE: &str = "\x1b[34m";

/// The ANSI escape sequence for magenta.
pub const MAGENTA: &str = "\x1b[35m";

/// The ANSI escape sequence for cyan.
pub const CYAN: &str = "\x1b[36m";

/// The ANSI escape sequence for white.
pub const WHITE: &str = "\x1b[37m";

/// Bright black — rendered as gray on most terminals.
pub const GRAY: &str = "\x1b[30;1m";

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Builds a full escape sequence from a bare SGR code.
///
/// No validation — the caller is responsible for a valid code, including
/// 256-color forms like `"38;5;208"`.
#[must_use]
pub fn escape(code: &str) -> String {
    format!("\x1b[{code}m")
}

/// Removes ANSI escape sequences so padding math can work on the visible text
/// alone. Non-matching text passes through untouched.
#[must_use]
pub fn strip(s: &str) -> String {
    ANSI_REGEX.replace_all(s, "").into_owned()
}

/// Byte length of the visible text once escape sequences are removed.
#[must_use]
pub fn visible_len(s: &str) -> usize {
    strip(s).len()
}
