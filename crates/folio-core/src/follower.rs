//! Smoothed cursor follower.
//!
//! Two proxies trail the raw pointer: a tight dot and a looser halo. Each
//! frame both move a fixed fraction of the remaining distance toward the last
//! pointer position (first-order low-pass), so they never overshoot.

use crate::config::CursorParams;
use crate::constants::{DOT_HOVER_SCALE, HALO_HOVER_OPACITY, HALO_HOVER_SCALE};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPoint {
    pub pos: Vec2,
    pub factor: f32,
}

impl SmoothedPoint {
    pub fn new(factor: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            factor,
        }
    }

    /// Move toward `target` by `factor` of the remaining distance.
    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos += (target - self.pos) * self.factor;
        self.pos
    }
}

/// Top-left corners of both proxies for one frame, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerFrame {
    pub dot: Vec2,
    pub halo: Vec2,
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pointer: Vec2,
    dot: SmoothedPoint,
    halo: SmoothedPoint,
    dot_half_size: f32,
    halo_half_size: f32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CursorParams::default())
    }
}

impl CursorFollower {
    pub fn new(params: CursorParams) -> Self {
        Self {
            pointer: Vec2::ZERO,
            dot: SmoothedPoint::new(params.dot_factor),
            halo: SmoothedPoint::new(params.halo_factor),
            dot_half_size: params.dot_half_size,
            halo_half_size: params.halo_half_size,
        }
    }

    /// Record a raw pointer sample. Coordinates are not bounds-checked.
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Smoothed centres of the dot and halo.
    pub fn centres(&self) -> (Vec2, Vec2) {
        (self.dot.pos, self.halo.pos)
    }

    /// Advance both proxies one frame and return where to draw them.
    pub fn tick(&mut self) -> FollowerFrame {
        let dot = self.dot.step(self.pointer);
        let halo = self.halo.step(self.pointer);
        FollowerFrame {
            dot: dot - Vec2::splat(self.dot_half_size),
            halo: halo - Vec2::splat(self.halo_half_size),
        }
    }
}

/// Inline style applied to the proxies while an interactive element is hovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverStyle {
    pub dot_scale: f32,
    pub halo_scale: f32,
    pub halo_opacity: f32,
}

impl HoverStyle {
    pub const ENGAGED: HoverStyle = HoverStyle {
        dot_scale: DOT_HOVER_SCALE,
        halo_scale: HALO_HOVER_SCALE,
        halo_opacity: HALO_HOVER_OPACITY,
    };
    pub const BASELINE: HoverStyle = HoverStyle {
        dot_scale: 1.0,
        halo_scale: 1.0,
        halo_opacity: 1.0,
    };

    pub fn dot_transform(&self) -> String {
        format!("scale({})", self.dot_scale)
    }

    pub fn halo_transform(&self) -> String {
        format!("scale({})", self.halo_scale)
    }

    pub fn halo_opacity_css(&self) -> String {
        self.halo_opacity.to_string()
    }
}

/// Format a pixel coordinate for an inline `left`/`top` style.
#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}
