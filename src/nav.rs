use crate::dom::{self, DomElement};
use crate::selectors::{NAVBAR, NAV_LINK, NAV_LINK_LIST, NAV_TOGGLE, SECTIONS};
use folio_core::{NavController, NavLink, NavParams, SectionBounds};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct NavParts {
    navbar: Option<DomElement>,
    toggle: Option<DomElement>,
    list: Option<DomElement>,
    /// Links present at start-up; only these get click handlers.
    links: Vec<DomElement>,
}

impl NavParts {
    fn menu_parts(&self) -> Vec<&DomElement> {
        self.toggle.iter().chain(self.list.iter()).collect()
    }
}

/// Sections are re-measured on every scroll, and links re-queried, since the
/// page can change after start-up.
fn measure_sections(document: &web::Document) -> Vec<SectionBounds> {
    dom::query_all(document, SECTIONS)
        .iter()
        .filter_map(|s| {
            let (top, height) = s.offset_box()?;
            Some(SectionBounds::new(s.element().id(), top, height))
        })
        .collect()
}

pub fn init_navigation(document: &web::Document, params: NavParams) {
    let parts = Rc::new(NavParts {
        navbar: dom::query(document, NAVBAR),
        toggle: dom::query(document, NAV_TOGGLE),
        list: dom::query(document, NAV_LINK_LIST),
        links: dom::query_all(document, NAV_LINK),
    });
    let controller = Rc::new(RefCell::new(NavController::new(params)));

    wire_scroll(document, &parts, &controller);
    wire_toggle(&parts, &controller);
    wire_links(document, &parts, &controller);

    log::info!(
        "[nav] navbar={} toggle={} links={}",
        parts.navbar.is_some(),
        parts.toggle.is_some(),
        parts.links.len()
    );
}

fn wire_scroll(
    document: &web::Document,
    parts: &Rc<NavParts>,
    controller: &Rc<RefCell<NavController>>,
) {
    let (doc, parts, controller) = (document.clone(), parts.clone(), controller.clone());
    dom::add_window_listener("scroll", move |_: web::Event| {
        let sections = measure_sections(&doc);
        let links = dom::query_all(&doc, NAV_LINK);
        controller.borrow().sync_scroll(
            dom::scroll_y(),
            &sections,
            parts.navbar.as_ref(),
            links.as_slice(),
        );
    });
}

fn wire_toggle(parts: &Rc<NavParts>, controller: &Rc<RefCell<NavController>>) {
    let Some(toggle) = parts.toggle.clone() else {
        return;
    };
    let (parts, controller) = (parts.clone(), controller.clone());
    toggle.on("click", move |_: web::Event| {
        let menu = controller.borrow_mut().toggle_menu();
        menu.apply(&parts.menu_parts());
    });
}

fn wire_links(
    document: &web::Document,
    parts: &Rc<NavParts>,
    controller: &Rc<RefCell<NavController>>,
) {
    for link in parts.links.iter() {
        let (doc, parts, controller) = (document.clone(), parts.clone(), controller.clone());
        let this = link.clone();
        link.on("click", move |ev: web::Event| {
            ev.prevent_default();
            let target_top = this
                .href()
                .and_then(|href| dom::query(&doc, &href))
                .and_then(|target| target.offset_box())
                .map(|(top, _)| top);
            let scroll_to = controller.borrow_mut().on_link_click(target_top);
            if let (Some(top), Some(window)) = (scroll_to, web::window()) {
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
            controller.borrow().menu().apply(&parts.menu_parts());
        });
    }
}
