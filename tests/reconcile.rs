//! Tests for the configuration reconciler — selective tag regeneration and
//! global color disable.

use tintlog::fmt::{ansi, strip};
use tintlog::{Config, Logger, Severity};

fn quiet(mut cfg: Config) -> Config {
    cfg.console = false;
    cfg
}

#[test]
fn applying_defaults_keeps_default_tags() {
    let logger = Logger::new(quiet(Config::default()));
    assert_eq!(logger.config().tags, Config::default().tags);
}

#[test]
fn reconcile_is_idempotent() {
    let mut cfg = quiet(Config::default());
    cfg.colors.info = ansi::RED.to_string();
    cfg.tag_format.padding = 12;

    let mut logger = Logger::new(cfg);
    let once = logger.config().tags.clone();

    logger.apply_config(logger.config().clone());
    assert_eq!(logger.config().tags, once);
}

#[test]
fn color_change_regenerates_untouched_tag() {
    let mut cfg = quiet(Config::default());
    cfg.colors.info = ansi::RED.to_string();

    let logger = Logger::new(cfg);
    let tag = logger.config().tags.get(Severity::Info);
    assert!(tag.contains(ansi::RED));
    assert_eq!(strip(tag), "[   INFO] ");
}

#[test]
fn unrelated_tags_are_left_alone_by_a_color_change() {
    let mut cfg = quiet(Config::default());
    cfg.colors.info = ansi::RED.to_string();

    let logger = Logger::new(cfg);
    let defaults = Config::default();
    assert_eq!(
        logger.config().tags.get(Severity::Error),
        defaults.tags.get(Severity::Error)
    );
}

#[test]
fn formatting_change_regenerates_all_untouched_tags() {
    let mut cfg = quiet(Config::default());
    cfg.tag_format.padding = 14;

    let logger = Logger::new(cfg);
    for severity in Severity::all() {
        assert_eq!(strip(logger.config().tags.get(severity)).len(), 14);
    }
}

#[test]
fn custom_tag_text_survives_a_color_change() {
    let mut cfg = quiet(Config::default());
    cfg.tags.set(Severity::Info, "[CUSTOM] ".to_string());
    cfg.colors.info = ansi::RED.to_string();

    let logger = Logger::new(cfg);
    assert_eq!(logger.config().tags.get(Severity::Info), "[CUSTOM] ");
}

#[test]
fn custom_tag_text_survives_a_formatting_change() {
    let mut cfg = quiet(Config::default());
    cfg.tags.set(Severity::Warning, "!!".to_string());
    cfg.tag_format.padding = 20;

    let logger = Logger::new(cfg);
    assert_eq!(logger.config().tags.get(Severity::Warning), "!!");
}

#[test]
fn disable_colors_yields_ansi_free_tags() {
    let mut cfg = quiet(Config::default());
    cfg.disable_colors = true;

    let logger = Logger::new(cfg);
    for severity in Severity::all() {
        let tag = logger.config().tags.get(severity);
        assert_eq!(tag.len(), strip(tag).len());
    }
}

#[test]
fn disable_colors_clears_the_palette() {
    let mut cfg = quiet(Config::default());
    cfg.disable_colors = true;

    let logger = Logger::new(cfg);
    for severity in Severity::all() {
        assert!(logger.config().colors.get(severity).is_empty());
    }
    assert!(logger.config().colors.reset.is_empty());
}

#[test]
fn disabled_color_tags_are_stable_across_reapply() {
    let mut cfg = quiet(Config::default());
    cfg.disable_colors = true;

    let mut logger = Logger::new(cfg);
    let once = logger.config().tags.clone();

    logger.apply_config(logger.config().clone());
    assert_eq!(logger.config().tags, once);
}
