//! Platform-free logic behind the folio page effects.
//!
//! Nothing in this crate touches the browser. The wasm front-end queries the
//! DOM, feeds raw numbers and element handles in, and writes the results back
//! out through the capability traits in [`ports`].

pub mod config;
pub mod constants;
pub mod easing;
pub mod follower;
pub mod hover;
pub mod indicator;
pub mod nav;
pub mod ports;
pub mod reveal;
pub mod stats;
pub mod tween;

pub use config::*;
pub use easing::{Ease, Easing, EasingParseError};
pub use follower::*;
pub use hover::*;
pub use indicator::*;
pub use nav::*;
pub use ports::*;
pub use reveal::*;
pub use stats::*;
pub use tween::*;
