//! Tests for escape-sequence construction and stripping.

use tintlog::fmt::{ansi, escape, strip, visible_len};

#[test]
fn escape_builds_sgr_sequence() {
    assert_eq!(escape("31"), "\x1b[31m");
    assert_eq!(escape("0"), "\x1b[0m");
}

#[test]
fn escape_supports_256_color_codes() {
    assert_eq!(escape("38;5;208"), "\x1b[38;5;208m");
}

#[test]
fn strip_removes_simple_color() {
    assert_eq!(strip("\x1b[36mhello\x1b[0m"), "hello");
}

#[test]
fn strip_removes_multi_parameter_sequences() {
    // Gray is a two-parameter sequence (30;1).
    assert_eq!(strip(&format!("{}dim{}", ansi::GRAY, ansi::RESET)), "dim");
}

#[test]
fn strip_removes_256_color_sequences() {
    let colored = format!("{}orange{}", escape("38;5;208"), ansi::RESET);
    assert_eq!(strip(&colored), "orange");
}

#[test]
fn strip_leaves_plain_text_untouched() {
    let plain = "no escapes here [INFO] 100%";
    assert_eq!(strip(plain), plain);
}

#[test]
fn visible_len_ignores_escape_bytes() {
    let colored = format!("{}hello{}", ansi::CYAN, ansi::RESET);
    assert_eq!(visible_len(&colored), 5);
    assert!(colored.len() > 5);
}
