//! Severity levels that gate which messages reach which sinks.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's severity against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// High-volume instrumentation that would be too noisy outside of development.
    #[default]
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 1,
    /// Normal operational milestones — connection established, config loaded, etc.
    Info = 2,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warning = 3,
    /// Failures that prevent the current operation from completing.
    Error = 4,
    /// The process cannot continue — the write is followed by a non-zero exit.
    Fatal = 5,
    /// The write is followed by an unrecoverable fault carrying the message.
    Panic = 6,
}

/// Severities share sinks in three coarse groups so console streams and log
/// files can be split by importance without seven separate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Trace and Debug.
    Debug,
    /// Info and Warning.
    Info,
    /// Error, Fatal, and Panic.
    Error,
}

impl Severity {
    /// Lowercase because `FromStr` and `Display` follow the common CLI convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Uppercase display text rendered inside the bracketed tags.
    #[must_use]
    pub const fn tag_text(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Which of the three resolved sinks receives messages at this severity.
    #[must_use]
    pub const fn band(self) -> Band {
        match self {
            Self::Trace | Self::Debug => Band::Debug,
            Self::Info | Self::Warning => Band::Info,
            Self::Error | Self::Fatal | Self::Panic => Band::Error,
        }
    }

    /// Convenience for iteration — used by tag precomputation, the reconciler, and tests.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Fatal,
            Self::Panic,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
