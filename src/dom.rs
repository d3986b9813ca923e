use folio_core::{ClassList, NavLink, StatTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::selectors::ANIMATED_ATTR;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// First element matching `selector`; invalid selectors count as no match.
#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<DomElement> {
    document.query_selector(selector).ok().flatten().map(DomElement)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<DomElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .map(DomElement)
        .collect()
}

/// Attach a listener for the page lifetime.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        handler(ev.unchecked_into::<E>());
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_window_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

/// Element handle the core logic can drive.
#[derive(Clone, Debug)]
pub struct DomElement(pub web::Element);

impl DomElement {
    #[inline]
    pub fn element(&self) -> &web::Element {
        &self.0
    }

    pub fn on<E>(&self, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: JsCast + 'static,
    {
        add_listener(&self.0, event, handler);
    }

    /// Set one inline style property; a no-op for non-HTML elements.
    pub fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.0.dyn_ref::<web::HtmlElement>() {
            _ = el.style().set_property(property, value);
        }
    }

    /// `offsetTop`/`offsetHeight` in CSS pixels.
    pub fn offset_box(&self) -> Option<(f64, f64)> {
        self.0
            .dyn_ref::<web::HtmlElement>()
            .map(|el| (f64::from(el.offset_top()), f64::from(el.offset_height())))
    }
}

impl ClassList for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }
}

impl NavLink for DomElement {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }
}

impl StatTarget for DomElement {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn is_animated(&self) -> bool {
        self.0.has_attribute(ANIMATED_ATTR)
    }

    fn mark_animated(&self) {
        _ = self.0.set_attribute(ANIMATED_ATTR, "true");
    }
}
