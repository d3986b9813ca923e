//! Count-up animation for numeric stat labels such as `"120+"`.

use crate::config::StatParams;
use crate::constants::STAT_SUFFIX;
use crate::ports::{StatTarget, Tweener};
use crate::tween::Tween;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatLabelError {
    #[error("stat label {0:?} has no leading integer")]
    NoLeadingInteger(String),
}

/// The number a stat counts up to and whether it carries a `+` suffix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatLabel {
    pub value: f64,
    pub plus: bool,
}

impl StatLabel {
    /// Parse the leading integer the way a page script would: leading
    /// whitespace and one sign are allowed, parsing stops at the first
    /// non-digit. Any `+` in the text marks the suffix. Digit runs too long
    /// for an integer type still parse, losing precision.
    pub fn parse(text: &str) -> Result<Self, StatLabelError> {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(StatLabelError::NoLeadingInteger(text.to_string()));
        }
        let magnitude: f64 = rest[..digits_len]
            .parse()
            .map_err(|_| StatLabelError::NoLeadingInteger(text.to_string()))?;
        Ok(Self {
            value: if negative { -magnitude } else { magnitude },
            plus: text.contains(STAT_SUFFIX),
        })
    }

    /// Text for an intermediate value: rounded half up, suffix preserved.
    pub fn render(&self, current: f64) -> String {
        let rounded = (current + 0.5).floor();
        if self.plus {
            format!("{}{}", rounded, STAT_SUFFIX)
        } else {
            rounded.to_string()
        }
    }

    pub fn tween(&self, params: &StatParams) -> Tween {
        Tween::new(0.0, self.value, params.duration)
            .with_easing(params.easing)
            .with_snap(params.snap)
    }
}

impl FromStr for StatLabel {
    type Err = StatLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Start the count-up on every target that has not run yet.
///
/// Each target is flagged before its tween starts, so a second call is a
/// no-op for it. Returns how many counters were started.
pub fn start_stat_counters<T>(targets: &[T], tweener: &dyn Tweener, params: &StatParams) -> usize
where
    T: StatTarget + Clone + 'static,
{
    let mut started = 0;
    for target in targets {
        if target.is_animated() {
            continue;
        }
        let text = target.text();
        let label = match StatLabel::parse(&text) {
            Ok(label) => label,
            Err(e) => {
                log::warn!("[stats] skipping counter: {}", e);
                continue;
            }
        };
        target.mark_animated();
        let sink = target.clone();
        tweener.tween(
            label.tween(params),
            Box::new(move |v| sink.set_text(&label.render(v))),
        );
        started += 1;
    }
    if started > 0 {
        log::info!("[stats] started {} counters", started);
    }
    started
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_suffixed_labels() {
        assert_eq!(
            StatLabel::parse("120+"),
            Ok(StatLabel {
                value: 120.0,
                plus: true
            })
        );
        assert_eq!(
            StatLabel::parse("  42"),
            Ok(StatLabel {
                value: 42.0,
                plus: false
            })
        );
        assert_eq!(
            StatLabel::parse("-7 days"),
            Ok(StatLabel {
                value: -7.0,
                plus: false
            })
        );
    }

    #[test]
    fn stops_at_first_non_digit() {
        let label: StatLabel = "15k+ users".parse().unwrap();
        assert_eq!(label.value, 15.0);
        assert!(label.plus);
    }

    #[test]
    fn rejects_text_without_leading_integer() {
        assert!(matches!(
            StatLabel::parse("many"),
            Err(StatLabelError::NoLeadingInteger(_))
        ));
        assert!(matches!(
            StatLabel::parse("+"),
            Err(StatLabelError::NoLeadingInteger(_))
        ));
    }

    #[test]
    fn oversized_digit_run_still_parses() {
        let label = StatLabel::parse("99999999999999999999999+").unwrap();
        assert!(label.value.is_finite());
        assert!(label.value > i64::MAX as f64);
        assert!(label.plus);
        let t = label.tween(&StatParams::default());
        assert_eq!(t.to, label.value);
    }

    #[test]
    fn renders_rounded_with_suffix() {
        let label = StatLabel {
            value: 120.0,
            plus: true,
        };
        assert_eq!(label.render(0.0), "0+");
        assert_eq!(label.render(59.5), "60+");
        assert_eq!(label.render(120.0), "120+");
        let plain = StatLabel {
            value: 8.0,
            plus: false,
        };
        assert_eq!(plain.render(7.49), "7");
        assert_eq!(plain.render(-0.2), "0");
    }

    #[test]
    fn counter_tween_uses_params() {
        let params = StatParams::default();
        let t = StatLabel::parse("50").unwrap().tween(&params);
        assert_eq!(t.from, 0.0);
        assert_eq!(t.to, 50.0);
        assert_eq!(t.duration, params.duration);
        assert_eq!(t.snap, Some(1.0));
    }
}
