#![cfg(target_arch = "wasm32")]
use folio_core::FolioConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cursor;
mod dom;
mod frame;
mod hover;
mod indicator;
mod nav;
mod reveal;
mod selectors;
mod tween;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init(FolioConfig::default()) {
        log::error!("init error: {:?}", e);
    }
}

fn init(config: FolioConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The follower loop runs for the page lifetime; the handle is not needed.
    _ = cursor::init_cursor(&document, config.cursor);
    nav::init_navigation(&document, config.nav);
    indicator::init_scroll_indicator(&document, config.nav.indicator_threshold);
    hover::init_hover_effects(&document, config.hover);
    reveal::init_reveal(&document, config.reveal, config.stats)?;

    Ok(())
}
