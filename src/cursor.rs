use crate::dom::{self, DomElement};
use crate::frame::{self, LoopControl, LoopHandle};
use crate::selectors::{selector_list, CURSOR_DOT, CURSOR_HALO, CURSOR_INTERACTIVE};
use folio_core::{px, CursorFollower, CursorParams, HoverStyle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the smoothed cursor. Returns the frame loop handle, or `None` when
/// either proxy element is missing from the page.
pub fn init_cursor(document: &web::Document, params: CursorParams) -> Option<LoopHandle> {
    let (Some(dot), Some(halo)) = (
        dom::query(document, CURSOR_DOT),
        dom::query(document, CURSOR_HALO),
    ) else {
        log::info!("[cursor] proxies not on page; cursor follower disabled");
        return None;
    };

    let follower = Rc::new(RefCell::new(CursorFollower::new(params)));

    let follower_move = follower.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        follower_move
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    let (dot_frame, halo_frame) = (dot.clone(), halo.clone());
    let handle = frame::start_loop(move || {
        let f = follower.borrow_mut().tick();
        dot_frame.set_style("left", &px(f.dot.x));
        dot_frame.set_style("top", &px(f.dot.y));
        halo_frame.set_style("left", &px(f.halo.x));
        halo_frame.set_style("top", &px(f.halo.y));
        LoopControl::Continue
    });

    let interactive = dom::query_all(document, &selector_list(CURSOR_INTERACTIVE));
    for el in &interactive {
        let (d, h) = (dot.clone(), halo.clone());
        el.on("mouseenter", move |_: web::Event| {
            apply_hover(&d, &h, HoverStyle::ENGAGED)
        });
        let (d, h) = (dot.clone(), halo.clone());
        el.on("mouseleave", move |_: web::Event| {
            apply_hover(&d, &h, HoverStyle::BASELINE)
        });
    }
    log::info!(
        "[cursor] follower running; {} interactive elements",
        interactive.len()
    );
    Some(handle)
}

fn apply_hover(dot: &DomElement, halo: &DomElement, style: HoverStyle) {
    dot.set_style("transform", &style.dot_transform());
    halo.set_style("transform", &style.halo_transform());
    halo.set_style("opacity", &style.halo_opacity_css());
}
