//! Runtime parameters handed to each initialiser.
//!
//! Defaults come from [`crate::constants`]; callers override individual
//! fields when a page needs different tuning.

use crate::constants::*;
use crate::easing::Easing;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    pub dot_factor: f32,
    pub halo_factor: f32,
    pub dot_half_size: f32,
    pub halo_half_size: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            dot_factor: DOT_FACTOR,
            halo_factor: HALO_FACTOR,
            dot_half_size: DOT_HALF_SIZE_PX,
            halo_half_size: HALO_HALF_SIZE_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavParams {
    pub scrolled_threshold: f64,
    pub section_activation_offset: f64,
    pub scroll_offset: f64,
    pub indicator_threshold: f64,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            scrolled_threshold: NAV_SCROLLED_THRESHOLD_PX,
            section_activation_offset: SECTION_ACTIVATION_OFFSET_PX,
            scroll_offset: NAV_SCROLL_OFFSET_PX,
            indicator_threshold: INDICATOR_HIDE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealParams {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            threshold: REVEAL_VISIBILITY_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatParams {
    pub duration: Duration,
    pub easing: Easing,
    pub snap: f64,
}

impl Default for StatParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(STAT_DURATION_SECS),
            easing: STAT_EASING.parse().unwrap_or(Easing::POWER2_OUT),
            snap: STAT_SNAP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverParams {
    pub duration: Duration,
    pub easing: Easing,
    pub skill_tag_scale: f64,
    pub project_card_lift: f64,
    pub timeline_stagger_secs: f64,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(HOVER_DURATION_SECS),
            easing: HOVER_EASING.parse().unwrap_or(Easing::POWER2_OUT),
            skill_tag_scale: SKILL_TAG_HOVER_SCALE,
            project_card_lift: PROJECT_CARD_HOVER_LIFT_PX,
            timeline_stagger_secs: TIMELINE_STAGGER_SECS,
        }
    }
}

/// Everything the page effects can be tuned with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FolioConfig {
    pub cursor: CursorParams,
    pub nav: NavParams,
    pub reveal: RevealParams,
    pub stats: StatParams,
    pub hover: HoverParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_constants() {
        let cfg = FolioConfig::default();
        assert_eq!(cfg.cursor.dot_factor, 0.2);
        assert_eq!(cfg.cursor.halo_factor, 0.1);
        assert_eq!(cfg.nav.scrolled_threshold, 100.0);
        assert_eq!(cfg.stats.duration, Duration::from_secs(2));
        assert_eq!(cfg.stats.easing, Easing::POWER2_OUT);
        assert_eq!(cfg.hover.duration, Duration::from_millis(300));
    }
}
