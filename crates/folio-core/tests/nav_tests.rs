mod common;

use common::FakeElement;
use folio_core::{highlight_links, ClassList, MenuState, NavController, SectionBounds};

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 900.0),
        SectionBounds::new("about", 900.0, 700.0),
        SectionBounds::new("contact", 1600.0, 500.0),
    ]
}

#[test]
fn only_the_matching_link_is_active() {
    let links = vec![
        FakeElement::link("#home"),
        FakeElement::link("#about"),
        FakeElement::link("#contact"),
    ];
    links[0].add_class("active");

    let nav = NavController::default();
    let update = nav.on_scroll(1000.0, &page());
    highlight_links(&links, update.active.as_deref());

    assert!(!links[0].has_class("active"));
    assert!(links[1].has_class("active"));
    assert!(!links[2].has_class("active"));
}

#[test]
fn no_active_section_clears_every_link() {
    let links = vec![FakeElement::link("#home"), FakeElement::link("#about")];
    links[1].add_class("active");
    highlight_links(&links, None);
    assert!(links.iter().all(|l| !l.has_class("active")));
}

#[test]
fn bare_hash_link_is_active_when_no_section_matches() {
    let sections = vec![SectionBounds::new("about", 1000.0, 600.0)];
    let links = vec![FakeElement::link("#"), FakeElement::link("#about")];

    let nav = NavController::default();
    highlight_links(&links, nav.on_scroll(0.0, &sections).active.as_deref());
    assert!(links[0].has_class("active"));
    assert!(!links[1].has_class("active"));

    highlight_links(&links, nav.on_scroll(900.0, &sections).active.as_deref());
    assert!(!links[0].has_class("active"));
    assert!(links[1].has_class("active"));
}

#[test]
fn scroll_sync_highlights_links_added_after_start() {
    let navbar = FakeElement::with_classes(&["navbar"]);
    let mut links = vec![FakeElement::link("#home")];
    let nav = NavController::default();

    let update = nav.sync_scroll(1000.0, &page(), Some(&navbar), &links);
    assert!(update.scrolled);
    assert!(navbar.has_class("scrolled"));
    assert!(!links[0].has_class("active"));

    links.push(FakeElement::link("#about"));
    nav.sync_scroll(1000.0, &page(), Some(&navbar), &links);
    assert!(links[1].has_class("active"));

    nav.sync_scroll(50.0, &page(), Some(&navbar), &links);
    assert!(!navbar.has_class("scrolled"));
    assert!(links[0].has_class("active"));
    assert!(!links[1].has_class("active"));
}

#[test]
fn scroll_sync_without_navbar_still_highlights() {
    let links = vec![FakeElement::link("#contact")];
    let nav = NavController::default();
    nav.sync_scroll(1500.0, &page(), None::<&FakeElement>, &links);
    assert_eq!(links[0].class_count("active"), 1);
}

#[test]
fn menu_state_is_mirrored_on_toggle_and_list() {
    let toggle = FakeElement::with_classes(&["nav-toggle"]);
    let list = FakeElement::with_classes(&["nav-links"]);
    let mut nav = NavController::default();

    nav.toggle_menu().apply(&[&toggle, &list]);
    assert!(toggle.has_class("active") && list.has_class("active"));

    nav.toggle_menu().apply(&[&toggle, &list]);
    assert!(!toggle.has_class("active") && !list.has_class("active"));
}

#[test]
fn clicking_a_link_to_a_missing_section_closes_menu() {
    let toggle = FakeElement::with_classes(&["nav-toggle"]);
    let list = FakeElement::with_classes(&["nav-links"]);
    let mut nav = NavController::default();
    nav.toggle_menu().apply(&[&toggle, &list]);

    let target = nav.on_link_click(None);
    nav.menu().apply(&[&toggle, &list]);

    assert_eq!(target, None);
    assert_eq!(nav.menu(), MenuState::default());
    assert!(!toggle.has_class("active") && !list.has_class("active"));
}
