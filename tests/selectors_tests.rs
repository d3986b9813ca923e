// Host-side tests for the page's selector contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod selectors {
    include!("../src/selectors.rs");
}

use folio_core::constants::STATS_TRIGGER_CLASS;
use selectors::*;

#[test]
fn reveal_targets_include_the_stats_block() {
    let trigger = format!(".{}", STATS_TRIGGER_CLASS);
    assert!(REVEAL_TARGETS.contains(&trigger.as_str()));
}

#[test]
fn reveal_targets_are_unique_class_selectors() {
    for (i, sel) in REVEAL_TARGETS.iter().enumerate() {
        assert!(sel.starts_with('.'), "{} is not a class selector", sel);
        assert!(!sel.contains(' '), "{} is not a simple selector", sel);
        assert!(!REVEAL_TARGETS[i + 1..].contains(sel), "{} listed twice", sel);
    }
    assert_eq!(REVEAL_TARGETS.len(), 12);
}

#[test]
fn selector_list_joins_with_commas() {
    assert_eq!(selector_list(&["a", "button"]), "a, button");
    assert_eq!(selector_list(&[]), "");
    let all = selector_list(CURSOR_INTERACTIVE);
    assert_eq!(
        all,
        "a, button, .project-card, .skill-tag, .cert-card, .achievement-card"
    );
}

#[test]
fn hover_tween_targets_also_engage_the_cursor() {
    assert!(CURSOR_INTERACTIVE.contains(&SKILL_TAG));
    assert!(CURSOR_INTERACTIVE.contains(&PROJECT_CARD));
}

#[test]
fn animated_flag_is_a_data_attribute() {
    assert!(ANIMATED_ATTR.starts_with("data-"));
}
