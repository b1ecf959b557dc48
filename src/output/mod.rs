//! Sink resolution — turning enable flags and file paths into write targets.
//!
//! Sinks are resolved once at configuration time and reused for every write
//! until the logger is reconfigured. A band always resolves to *some* sink —
//! a discard writer stands in when nothing is configured, so the emit path
//! never needs a null check.

use crate::config::Config;
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// A resolved write target — a console stream, an opened file, a composite of
/// both, or a discard writer.
pub type Sink = Box<dyn Write + Send>;

/// Mirrors every write to two underlying sinks (console and file).
struct Tee {
    first: Sink,
    second: Sink,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Opens a log file for appending, creating it if missing.
fn open_log_file(path: &str) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

/// Combines an optional console sink with an optional file into one sink.
///
/// A failed file open is downgraded to a warning through the bootstrap
/// reporter and the band keeps its console sink — configuration never aborts
/// over an unwritable path.
fn resolve(log_to_file: bool, path: &str, console: Option<Sink>) -> Sink {
    let mut sink = console;

    if log_to_file && !path.is_empty() {
        match open_log_file(path) {
            Ok(file) => {
                let file: Sink = Box::new(file);
                sink = Some(match sink {
                    Some(console) => Box::new(Tee {
                        first: console,
                        second: file,
                    }),
                    None => file,
                });
            }
            Err(_) => {
                internal::warn(&format!("Failed to open log file for writing: {path}"));
            }
        }
    }

    sink.unwrap_or_else(|| Box::new(io::sink()))
}

fn console_stdout(enabled: bool) -> Option<Sink> {
    enabled.then(|| Box::new(io::stdout()) as Sink)
}

/// Sink for TRACE and DEBUG — stdout when console output is on, plus the debug file.
#[must_use]
pub fn debug_sink(cfg: &Config) -> Sink {
    resolve(cfg.log_to_file, &cfg.debug_file, console_stdout(cfg.console))
}

/// Sink for INFO and WARNING — stdout when console output is on, plus the info file.
#[must_use]
pub fn info_sink(cfg: &Config) -> Sink {
    resolve(cfg.log_to_file, &cfg.info_file, console_stdout(cfg.console))
}

/// Sink for ERROR, FATAL, and PANIC — stderr rather than stdout, plus the error file.
#[must_use]
pub fn error_sink(cfg: &Config) -> Sink {
    let console = cfg.console.then(|| Box::new(io::stderr()) as Sink);
    resolve(cfg.log_to_file, &cfg.error_file, console)
}
