//! Bootstrap reporter for configuration problems — a default logger built on
//! demand so sink resolution can warn through the normal formatting pipeline
//! before (or without) the caller's own logger existing.
//!
//! Uses `OnceLock` so the fallback is constructed exactly once, even if
//! several resolutions fail while racing.

use crate::logger::Logger;
use std::sync::OnceLock;

static FALLBACK: OnceLock<Logger> = OnceLock::new();

/// Reports a non-fatal configuration problem.
///
/// The default configuration never enables file logging, so constructing the
/// fallback cannot itself fail a file open and recurse back here.
pub(crate) fn warn(msg: &str) {
    FALLBACK.get_or_init(Logger::default).warning(msg);
}
