use crate::easing::Easing;
use std::time::Duration;

/// Time-based interpolation of one number.
///
/// A tween is sampled by elapsed time rather than stepped, so it can be driven
/// by animation frames of any rate. At or beyond `duration` every sample
/// returns exactly `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
    /// Round intermediate samples to a multiple of this increment.
    pub snap: Option<f64>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            snap: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_snap(mut self, increment: f64) -> Self {
        self.snap = (increment > 0.0).then_some(increment);
        self
    }

    /// Linear progress in \[0, 1\]; zero-length tweens are always complete.
    #[inline]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_complete(elapsed) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(elapsed));
        let value = self.from + (self.to - self.from) * eased;
        match self.snap {
            Some(inc) => (value / inc).round() * inc,
            None => value,
        }
    }
}
