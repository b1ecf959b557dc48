//! The logger is a reified configuration: constructing one resolves the three
//! band sinks, and reconfiguration merges new settings in place while
//! preserving user-supplied tag text.

use crate::config::Config;
use crate::level::{Band, Severity};
use crate::output::{self, Sink};
use chrono::Local;
use std::fmt::Arguments;
use std::io::{self, Write};
use std::process;
use std::sync::{Mutex, PoisonError};

/// A live configuration plus its resolved sinks.
///
/// Every field is populated at creation — a logger is never partially
/// constructed. The emit path is a direct blocking write; the per-band mutex
/// only serializes concurrent callers so a line is written whole.
pub struct Logger {
    config: Config,
    debug_sink: Mutex<Sink>,
    info_sink: Mutex<Sink>,
    error_sink: Mutex<Sink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Logger {
    /// Builds a logger from a caller-supplied configuration, applying the
    /// reconciler once against itself to finalize tags and sinks.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut logger = Self {
            config: config.clone(),
            debug_sink: Mutex::new(Box::new(io::sink())),
            info_sink: Mutex::new(Box::new(io::sink())),
            error_sink: Mutex::new(Box::new(io::sink())),
        };
        logger.apply_config(config);
        logger
    }

    /// Default logger whose line prefix is a generated tag — convenient for
    /// namespacing the output of a sub-module.
    #[must_use]
    pub fn tagged(label: &str, color: &str) -> Self {
        let mut config = Config::default();
        config.prefix = config.render_tag(label, color);
        Self::new(config)
    }

    /// Merges `config` into this logger.
    ///
    /// A stored tag still equal to its default was never customized, so it is
    /// safe to regenerate when its color or the shared formatting changed.
    /// Equality with the untouched default is the only dirtiness signal: a
    /// user tag that happens to match a default (its own or another
    /// severity's) is indistinguishable from one that was never set, and may
    /// be regenerated on the next apply. Known, accepted limitation.
    pub fn apply_config(&mut self, mut config: Config) {
        if config.disable_colors {
            config.colors.clear();
        }

        let defaults = Config::default();
        let formatting_changed = config.tag_format != defaults.tag_format;
        for severity in Severity::all() {
            let untouched = config.tags.get(severity) == defaults.tags.get(severity);
            let color_changed = config.colors.get(severity) != defaults.colors.get(severity);
            if untouched && (color_changed || formatting_changed) {
                let tag = config.render_tag(severity.tag_text(), config.colors.get(severity));
                config.tags.set(severity, tag);
            }
        }

        // Replacing a sink drops the previous one, closing any file it held.
        self.debug_sink = Mutex::new(output::debug_sink(&config));
        self.info_sink = Mutex::new(output::info_sink(&config));
        self.error_sink = Mutex::new(output::error_sink(&config));
        self.config = config;
    }

    /// The active configuration — clone it to derive a new one for
    /// [`Logger::apply_config`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn time_string(&self) -> String {
        if !self.config.print_time {
            return String::new();
        }
        format!(
            "{}{}{}",
            self.config.time_color,
            Local::now().format(&self.config.time_pattern),
            self.config.colors.reset
        )
    }

    /// One formatted line per call, written as a single byte sequence. Sink
    /// errors are swallowed — the logger never crashes its host outside the
    /// fatal and panic paths.
    fn emit(&self, severity: Severity, msg: &str) {
        if severity < self.config.threshold {
            return;
        }

        let tag = if self.config.print_level {
            self.config.tags.get(severity)
        } else {
            ""
        };
        let line = format!(
            "{}{}{tag}{msg}{}",
            self.time_string(),
            self.config.prefix,
            self.config.suffix
        );

        let sink = match severity.band() {
            Band::Debug => &self.debug_sink,
            Band::Info => &self.info_sink,
            Band::Error => &self.error_sink,
        };
        let _ = sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line.as_bytes());
    }

    /// `emit` re-checks the threshold; this early return just skips the
    /// formatting allocation for filtered-out calls.
    fn emit_fmt(&self, severity: Severity, args: Arguments<'_>) {
        if severity < self.config.threshold {
            return;
        }
        self.emit(severity, &args.to_string());
    }

    pub fn trace(&self, msg: &str) {
        self.emit(Severity::Trace, msg);
    }

    pub fn tracef(&self, args: Arguments<'_>) {
        self.emit_fmt(Severity::Trace, args);
    }

    pub fn debug(&self, msg: &str) {
        self.emit(Severity::Debug, msg);
    }

    pub fn debugf(&self, args: Arguments<'_>) {
        self.emit_fmt(Severity::Debug, args);
    }

    pub fn info(&self, msg: &str) {
        self.emit(Severity::Info, msg);
    }

    pub fn infof(&self, args: Arguments<'_>) {
        self.emit_fmt(Severity::Info, args);
    }

    pub fn warning(&self, msg: &str) {
        self.emit(Severity::Warning, msg);
    }

    pub fn warningf(&self, args: Arguments<'_>) {
        self.emit_fmt(Severity::Warning, args);
    }

    /// Alias — both spellings are widespread.
    pub fn warn(&self, msg: &str) {
        self.warning(msg);
    }

    /// Alias — both spellings are widespread.
    pub fn warnf(&self, args: Arguments<'_>) {
        self.warningf(args);
    }

    pub fn error(&self, msg: &str) {
        self.emit(Severity::Error, msg);
    }

    pub fn errorf(&self, args: Arguments<'_>) {
        self.emit_fmt(Severity::Error, args);
    }

    /// Writes the message, then terminates the process with exit code 1.
    pub fn fatal(&self, msg: &str) -> ! {
        self.emit(Severity::Fatal, msg);
        process::exit(1);
    }

    /// Writes the formatted message, then terminates the process with exit code 1.
    pub fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.emit_fmt(Severity::Fatal, args);
        process::exit(1);
    }

    /// Writes the message, then raises an unrecoverable fault carrying it.
    pub fn panic(&self, msg: &str) -> ! {
        self.emit(Severity::Panic, msg);
        panic!("{msg}");
    }

    /// Writes the formatted message, then raises an unrecoverable fault carrying it.
    pub fn panicf(&self, args: Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.emit(Severity::Panic, &msg);
        panic!("{msg}");
    }
}
