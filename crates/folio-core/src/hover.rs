//! Hover tweens for cards and tags, and the timeline stagger.

use crate::config::HoverParams;
use crate::tween::Tween;
use std::time::Duration;

/// Which transform a hover tween drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverProperty {
    Scale,
    TranslateY,
}

impl HoverProperty {
    pub fn rest_value(&self) -> f64 {
        match self {
            HoverProperty::Scale => 1.0,
            HoverProperty::TranslateY => 0.0,
        }
    }

    pub fn css(&self, value: f64) -> String {
        match self {
            HoverProperty::Scale => format!("scale({})", round_css(value)),
            HoverProperty::TranslateY => format!("translateY({}px)", round_css(value)),
        }
    }
}

// Keeps inline styles short; four decimals is well below a device pixel.
#[inline]
fn round_css(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Per-element hover animation.
///
/// Retargeting starts a fresh tween from the last rendered value, so leaving
/// an element mid-animation reverses smoothly instead of jumping.
#[derive(Clone, Debug)]
pub struct HoverTweenState {
    property: HoverProperty,
    current: f64,
    active: Option<(Tween, Duration)>,
}

impl HoverTweenState {
    pub fn new(property: HoverProperty) -> Self {
        Self {
            property,
            current: property.rest_value(),
            active: None,
        }
    }

    pub fn property(&self) -> HoverProperty {
        self.property
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn retarget(&mut self, to: f64, params: &HoverParams) {
        let tween = Tween::new(self.current, to, params.duration).with_easing(params.easing);
        self.active = Some((tween, Duration::ZERO));
    }

    /// Advance by `dt` and return the value to render, or `None` when idle.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        let (tween, elapsed) = self.active.as_mut()?;
        *elapsed += dt;
        let value = tween.value_at(*elapsed);
        let done = tween.is_complete(*elapsed);
        self.current = value;
        if done {
            self.active = None;
        }
        Some(value)
    }
}

/// `transition-delay` of the `index`-th timeline item, in seconds.
#[inline]
pub fn timeline_delay(index: usize, stagger_secs: f64) -> f64 {
    (index as f64 * stagger_secs * 1000.0).round() / 1000.0
}
