//! Named easing curves.
//!
//! Curves map progress in \[0, 1\] to eased progress in \[0, 1\]. Names follow
//! the tweening vocabulary used by page authors (`power2.out`, `none`), so a
//! curve can be picked from a constant.

use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// `powerN`: degree 1 is quadratic, 2 cubic, 3 quartic, 4 quintic.
    Power { degree: u8, ease: Ease },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EasingParseError {
    #[error("unknown easing curve {0:?}")]
    Unknown(String),
    #[error("power degree {0} out of range 0..=4")]
    Degree(u8),
}

impl Easing {
    pub const POWER2_OUT: Easing = Easing::Power {
        degree: 2,
        ease: Ease::Out,
    };

    /// Apply the curve to a progress value; input is clamped to \[0, 1\].
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power { degree, ease } => {
                let p = i32::from(degree) + 1;
                match ease {
                    Ease::In => t.powi(p),
                    Ease::Out => 1.0 - (1.0 - t).powi(p),
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = EasingParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        let (family, ease) = match name.split_once('.') {
            Some((family, "in")) => (family, Ease::In),
            Some((family, "out")) => (family, Ease::Out),
            Some(_) => return Err(EasingParseError::Unknown(name.to_string())),
            // bare family names ease out
            None => (name, Ease::Out),
        };
        match family {
            "none" | "linear" => Ok(Easing::Linear),
            _ => {
                let degree = family
                    .strip_prefix("power")
                    .and_then(|d| d.parse::<u8>().ok())
                    .ok_or_else(|| EasingParseError::Unknown(name.to_string()))?;
                match degree {
                    0 => Ok(Easing::Linear),
                    1..=4 => Ok(Easing::Power { degree, ease }),
                    _ => Err(EasingParseError::Degree(degree)),
                }
            }
        }
    }
}
