//! Tests for the defaults factory and tag precomputation.

use tintlog::fmt::{ansi, generate, strip};
use tintlog::{Config, Severity, TagFormat};

#[test]
fn defaults() {
    let cfg = Config::default();
    assert!(cfg.console);
    assert!(!cfg.log_to_file);
    assert!(cfg.debug_file.is_empty());
    assert!(cfg.info_file.is_empty());
    assert!(cfg.error_file.is_empty());
    assert!(cfg.print_time);
    assert!(cfg.print_level);
    assert!(!cfg.disable_colors);
    assert_eq!(cfg.threshold, Severity::Trace);
    assert_eq!(cfg.time_color, ansi::GRAY);
    assert_eq!(cfg.tag_format, TagFormat::default());
    assert!(cfg.prefix.is_empty());
    assert_eq!(cfg.suffix, "\n");
}

#[test]
fn default_palette() {
    let cfg = Config::default();
    assert_eq!(cfg.colors.trace, ansi::WHITE);
    assert_eq!(cfg.colors.debug, ansi::GREEN);
    assert_eq!(cfg.colors.info, ansi::CYAN);
    assert_eq!(cfg.colors.warning, ansi::YELLOW);
    assert_eq!(cfg.colors.error, ansi::MAGENTA);
    assert_eq!(cfg.colors.fatal, ansi::RED);
    assert_eq!(cfg.colors.panic, ansi::RED);
    assert_eq!(cfg.colors.reset, ansi::RESET);
}

#[test]
fn tags_are_precomputed_for_every_severity() {
    let cfg = Config::default();
    for severity in Severity::all() {
        let expected = generate(
            severity.tag_text(),
            cfg.colors.get(severity),
            ansi::RESET,
            &cfg.tag_format,
        );
        assert_eq!(cfg.tags.get(severity), expected);
    }
}

#[test]
fn default_info_tag_strips_to_padded_bracket_form() {
    let cfg = Config::default();
    assert_eq!(strip(cfg.tags.get(Severity::Info)), "[   INFO] ");
}

#[test]
fn factory_is_pure() {
    // Two computations must be structurally identical — no shared mutable
    // default state between instances.
    assert_eq!(Config::new(), Config::new());
}

#[test]
fn render_tag_uses_the_config_format() {
    let mut cfg = Config::default();
    cfg.tag_format.padding = 12;
    let tag = cfg.render_tag("NET", "");
    assert_eq!(strip(&tag), "  [    NET] ");
}
