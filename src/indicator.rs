use crate::dom;
use crate::selectors::SCROLL_INDICATOR;
use folio_core::indicator_opacity;
use web_sys as web;

pub fn init_scroll_indicator(document: &web::Document, threshold: f64) {
    let Some(indicator) = dom::query(document, SCROLL_INDICATOR) else {
        return;
    };
    dom::add_window_listener("scroll", move |_: web::Event| {
        let opacity = indicator_opacity(dom::scroll_y(), threshold);
        indicator.set_style("opacity", &opacity.to_string());
    });
    log::info!("[indicator] wired");
}
