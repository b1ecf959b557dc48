//! The complete, self-describing state of a logger.
//!
//! A `Config` carries everything needed to build a `Logger` — no external
//! state, no hidden globals. Defaults come from a pure factory so no two
//! logger instances can share mutable default state.

use crate::fmt::{self, TagFormat, ansi};
use crate::level::Severity;

/// One full ANSI escape sequence per severity, plus the reset sequence.
///
/// Stored as raw strings rather than a color type so user-supplied 256-color
/// sequences from [`ansi::escape`] work unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityColors {
    pub trace: String,
    pub debug: String,
    pub info: String,
    pub warning: String,
    pub error: String,
    pub fatal: String,
    pub panic: String,
    /// Sequence used to close every colored span.
    pub reset: String,
}

impl Default for SeverityColors {
    fn default() -> Self {
        Self {
            trace: ansi::WHITE.to_string(),
            debug: ansi::GREEN.to_string(),
            info: ansi::CYAN.to_string(),
            warning: ansi::YELLOW.to_string(),
            error: ansi::MAGENTA.to_string(),
            fatal: ansi::RED.to_string(),
            panic: ansi::RED.to_string(),
            reset: ansi::RESET.to_string(),
        }
    }
}

impl SeverityColors {
    /// The sequence configured for one severity.
    #[must_use]
    pub fn get(&self, severity: Severity) -> &str {
        match severity {
            Severity::Trace => &self.trace,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
            Severity::Panic => &self.panic,
        }
    }

    /// Empties every sequence, reset included — colored spans become no-ops
    /// and tags generated afterward are plain text.
    pub fn clear(&mut self) {
        self.trace.clear();
        self.debug.clear();
        self.info.clear();
        self.warning.clear();
        self.error.clear();
        self.fatal.clear();
        self.panic.clear();
        self.reset.clear();
    }
}

/// The precomputed display tag for each severity.
///
/// Mutable only through [`TagSet::set`] — the reconciler detects user
/// overrides by structural comparison against a freshly computed default set,
/// so tags are never regenerated behind the user's back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    pub trace: String,
    pub debug: String,
    pub info: String,
    pub warning: String,
    pub error: String,
    pub fatal: String,
    pub panic: String,
}

impl TagSet {
    /// The stored display tag for one severity.
    #[must_use]
    pub fn get(&self, severity: Severity) -> &str {
        match severity {
            Severity::Trace => &self.trace,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
            Severity::Panic => &self.panic,
        }
    }

    /// Replaces one severity's tag. A tag set this way that no longer matches
    /// the default is treated as user-owned by the reconciler.
    pub fn set(&mut self, severity: Severity, tag: String) {
        match severity {
            Severity::Trace => self.trace = tag,
            Severity::Debug => self.debug = tag,
            Severity::Info => self.info = tag,
            Severity::Warning => self.warning = tag,
            Severity::Error => self.error = tag,
            Severity::Fatal => self.fatal = tag,
            Severity::Panic => self.panic = tag,
        }
    }
}

/// Settings for a logger instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mirror lines to stdout/stderr.
    pub console: bool,
    /// Enables the per-band file paths below.
    pub log_to_file: bool,

    /// File receiving TRACE and DEBUG lines; empty disables the band's file.
    pub debug_file: String,
    /// File receiving INFO and WARNING lines; empty disables the band's file.
    pub info_file: String,
    /// File receiving ERROR, FATAL, and PANIC lines; empty disables the band's file.
    pub error_file: String,

    /// Whether each line starts with a formatted timestamp.
    pub print_time: bool,
    /// strftime pattern for the timestamp.
    pub time_pattern: String,
    /// Escape sequence coloring the timestamp.
    pub time_color: String,

    /// Whether each line carries its severity tag.
    pub print_level: bool,

    /// Minimum severity that is written; everything below is dropped.
    pub threshold: Severity,

    /// Bracketing, justification, and padding for generated tags.
    pub tag_format: TagFormat,

    /// Printed after the time and before the tag on every line — useful for
    /// sub-module namespacing.
    pub prefix: String,
    /// Printed at the end of every line — usually a newline.
    pub suffix: String,

    /// Forces all severity colors and the reset sequence to empty on apply.
    pub disable_colors: bool,

    /// Escape sequences per severity.
    pub colors: SeverityColors,
    /// Display tags per severity; precomputed here, user-overridable.
    pub tags: TagSet,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Generates the preferred defaults.
    ///
    /// Tag generation must run after colors and formats are final, so the
    /// `TagSet` is populated as the last step.
    #[must_use]
    pub fn new() -> Self {
        let mut cfg = Self {
            console: true,
            log_to_file: false,

            debug_file: String::new(),
            info_file: String::new(),
            error_file: String::new(),

            print_time: true,
            time_pattern: "[%b %d %Y @ %H:%M:%S%.3f] ".to_string(),
            time_color: ansi::GRAY.to_string(),

            print_level: true,

            threshold: Severity::Trace,

            tag_format: TagFormat::default(),

            prefix: String::new(),
            suffix: "\n".to_string(),

            disable_colors: false,

            colors: SeverityColors::default(),
            tags: TagSet::default(),
        };

        for severity in Severity::all() {
            let tag = cfg.render_tag(severity.tag_text(), cfg.colors.get(severity));
            cfg.tags.set(severity, tag);
        }

        cfg
    }

    /// Renders a tag with this configuration's format and reset sequence.
    ///
    /// Exposed so callers can build prefix tags with custom text and colors,
    /// including 256-color sequences from [`ansi::escape`].
    #[must_use]
    pub fn render_tag(&self, text: &str, color: &str) -> String {
        fmt::generate(text, color, &self.colors.reset, &self.tag_format)
    }
}
