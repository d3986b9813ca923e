use crate::dom::{self, DomElement};
use crate::frame::{self, LoopControl};
use crate::selectors::{PROJECT_CARD, SKILL_TAG, TIMELINE_ITEM};
use folio_core::{timeline_delay, HoverParams, HoverProperty, HoverTweenState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Hover tweens on skill tags and project cards, plus the staggered
/// transition delay on timeline items.
pub fn init_hover_effects(document: &web::Document, params: HoverParams) {
    let tags = dom::query_all(document, SKILL_TAG);
    for tag in &tags {
        wire_hover_tween(tag, HoverProperty::Scale, params.skill_tag_scale, params);
    }

    let cards = dom::query_all(document, PROJECT_CARD);
    for card in &cards {
        wire_hover_tween(card, HoverProperty::TranslateY, params.project_card_lift, params);
    }

    let items = dom::query_all(document, TIMELINE_ITEM);
    for (i, item) in items.iter().enumerate() {
        let delay = timeline_delay(i, params.timeline_stagger_secs);
        item.set_style("transition-delay", &format!("{}s", delay));
    }

    log::info!(
        "[hover] tags={} cards={} timeline={}",
        tags.len(),
        cards.len(),
        items.len()
    );
}

struct HoverAnim {
    el: DomElement,
    state: RefCell<HoverTweenState>,
    running: Cell<bool>,
}

fn wire_hover_tween(el: &DomElement, property: HoverProperty, engaged: f64, params: HoverParams) {
    let anim = Rc::new(HoverAnim {
        el: el.clone(),
        state: RefCell::new(HoverTweenState::new(property)),
        running: Cell::new(false),
    });

    let enter = anim.clone();
    el.on("mouseenter", move |_: web::Event| {
        retarget(&enter, engaged, &params)
    });
    let leave = anim;
    el.on("mouseleave", move |_: web::Event| {
        retarget(&leave, property.rest_value(), &params)
    });
}

fn retarget(anim: &Rc<HoverAnim>, to: f64, params: &HoverParams) {
    anim.state.borrow_mut().retarget(to, params);
    if anim.running.replace(true) {
        // the running loop picks up the new tween
        return;
    }
    let looped = anim.clone();
    let mut last = Instant::now();
    let handle = frame::start_loop(move || {
        let anim = &looped;
        let now = Instant::now();
        let dt = now - last;
        last = now;
        let mut state = anim.state.borrow_mut();
        if let Some(value) = state.advance(dt) {
            anim.el.set_style("transform", &state.property().css(value));
        }
        if state.is_animating() {
            LoopControl::Continue
        } else {
            anim.running.set(false);
            LoopControl::Stop
        }
    });
    if handle.is_stopped() {
        anim.running.set(false);
    }
}
