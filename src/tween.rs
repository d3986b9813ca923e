use crate::frame::{self, LoopControl};
use folio_core::{Tween, Tweener};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Drives tweens from animation frames, sampling by wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTweener;

impl Tweener for FrameTweener {
    fn tween(&self, tween: Tween, on_update: Box<dyn FnMut(f64)>) {
        let on_update = Rc::new(RefCell::new(on_update));
        let sink = on_update.clone();
        let start = Instant::now();
        (on_update.borrow_mut())(tween.value_at(Duration::ZERO));
        let handle = frame::start_loop(move || {
            let elapsed = start.elapsed();
            (sink.borrow_mut())(tween.value_at(elapsed));
            if tween.is_complete(elapsed) {
                LoopControl::Stop
            } else {
                LoopControl::Continue
            }
        });
        if handle.is_stopped() {
            // no frames to animate with: jump straight to the end
            (on_update.borrow_mut())(tween.to);
        }
    }
}
