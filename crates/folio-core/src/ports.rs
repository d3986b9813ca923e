//! Capabilities the browser layer provides to the core logic.
//!
//! DOM handles mutate through shared references, so every method takes
//! `&self`; test doubles use interior mutability.

use crate::tween::Tween;

/// Class membership of one element.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// A navigation entry pointing at an in-page fragment.
pub trait NavLink: ClassList {
    fn href(&self) -> Option<String>;
}

/// An element whose text is a number to count up to.
pub trait StatTarget {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn is_animated(&self) -> bool;
    fn mark_animated(&self);
}

/// Time interpolation.
///
/// Implementations call `on_update` with sampled values until the tween is
/// complete, and always deliver a final update equal to `tween.to`.
pub trait Tweener {
    fn tween(&self, tween: Tween, on_update: Box<dyn FnMut(f64)>);
}

/// One viewport-visibility notification.
#[derive(Clone, Debug)]
pub struct IntersectionEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
}
