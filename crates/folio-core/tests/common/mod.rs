// Test doubles for the DOM-facing ports.

#![allow(dead_code)]
use folio_core::{ClassList, NavLink, StatTarget, Tween, Tweener};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct ElementState {
    classes: Vec<String>,
    href: Option<String>,
    text: String,
    animated: bool,
    history: Vec<String>,
}

/// Cheap shared handle standing in for a DOM element.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        el.0.borrow_mut().classes = classes.iter().map(|c| c.to_string()).collect();
        el
    }

    pub fn link(href: &str) -> Self {
        let el = Self::with_classes(&["nav-link"]);
        el.0.borrow_mut().href = Some(href.to_string());
        el
    }

    pub fn stat(text: &str) -> Self {
        let el = Self::with_classes(&["stat-number"]);
        el.0.borrow_mut().text = text.to_string();
        el
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.0.borrow().classes.iter().filter(|c| *c == class).count()
    }

    pub fn text_writes(&self) -> usize {
        self.0.borrow().history.len()
    }

    pub fn text_history(&self) -> Vec<String> {
        self.0.borrow().history.clone()
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    // DOMTokenList semantics: adding a present class is a no-op
    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }
}

impl NavLink for FakeElement {
    fn href(&self) -> Option<String> {
        self.0.borrow().href.clone()
    }
}

impl StatTarget for FakeElement {
    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        let mut st = self.0.borrow_mut();
        st.text = text.to_string();
        st.history.push(text.to_string());
    }

    fn is_animated(&self) -> bool {
        self.0.borrow().animated
    }

    fn mark_animated(&self) {
        self.0.borrow_mut().animated = true;
    }
}

/// Runs every tween to completion synchronously in fixed frame steps.
pub struct SteppedTweener {
    pub frame: Duration,
    pub started: RefCell<Vec<Tween>>,
}

impl SteppedTweener {
    pub fn at_60hz() -> Self {
        Self {
            frame: Duration::from_micros(16_667),
            started: RefCell::new(Vec::new()),
        }
    }
}

impl Tweener for SteppedTweener {
    fn tween(&self, tween: Tween, mut on_update: Box<dyn FnMut(f64)>) {
        self.started.borrow_mut().push(tween);
        let mut elapsed = Duration::ZERO;
        loop {
            elapsed += self.frame;
            on_update(tween.value_at(elapsed));
            if tween.is_complete(elapsed) {
                break;
            }
        }
    }
}
