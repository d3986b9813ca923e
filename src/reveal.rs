use crate::dom::{self, DomElement};
use crate::selectors::{selector_list, REVEAL_TARGETS, STAT_NUMBER};
use crate::tween::FrameTweener;
use folio_core::{start_stat_counters, IntersectionEntry, RevealParams, Revealer, StatParams};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Tag reveal targets and observe them entering the viewport.
pub fn init_reveal(
    document: &web::Document,
    params: RevealParams,
    stats: StatParams,
) -> anyhow::Result<()> {
    let targets = dom::query_all(document, &selector_list(REVEAL_TARGETS));
    Revealer::tag(&targets);

    let doc = document.clone();
    let mut revealer = Revealer::new();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let batch = revealer.on_entries(
                entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .map(|e| IntersectionEntry {
                        target: DomElement(e.target()),
                        is_intersecting: e.is_intersecting(),
                    }),
            );
            if batch.stats_triggered() {
                animate_stats(&doc, &stats);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(params.root_margin);
    options.set_threshold(&JsValue::from_f64(params.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for target in &targets {
        observer.observe(target.element());
    }
    log::info!("[reveal] observing {} targets", targets.len());
    Ok(())
}

fn animate_stats(document: &web::Document, params: &StatParams) {
    let stats = dom::query_all(document, STAT_NUMBER);
    start_stat_counters(&stats, &FrameTweener, params);
}
