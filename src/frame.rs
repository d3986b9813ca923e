use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a frame callback wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Cancels a running frame loop; the pending frame runs once more and exits.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> bool {
    web::window()
        .and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
        .is_some()
}

/// Run `tick` once per animation frame until it returns `Stop` or the handle
/// is stopped. The closure re-enqueues itself each frame and is dropped when
/// the loop ends.
pub fn start_loop(mut tick: impl FnMut() -> LoopControl + 'static) -> LoopHandle {
    let handle = LoopHandle::default();
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let handle_inner = handle.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_inner.is_stopped() || tick() == LoopControl::Stop {
            handle_inner.stop();
            // breaks the self-reference so the closure can be freed
            _ = slot_inner.borrow_mut().take();
            return;
        }
        let scheduled = slot_inner.borrow().as_ref().map_or(false, request_frame);
        if !scheduled {
            log::warn!("[frame] requestAnimationFrame unavailable; loop ended");
            handle_inner.stop();
            _ = slot_inner.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    let scheduled = slot.borrow().as_ref().map_or(false, request_frame);
    if !scheduled {
        handle.stop();
        _ = slot.borrow_mut().take();
    }
    handle
}
