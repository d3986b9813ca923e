// Shared tuning constants for the page effects.

// Cursor follower
pub const DOT_FACTOR: f32 = 0.2; // fraction of the remaining distance covered per frame
pub const HALO_FACTOR: f32 = 0.1;
pub const DOT_HALF_SIZE_PX: f32 = 6.0; // 12x12 proxy
pub const HALO_HALF_SIZE_PX: f32 = 20.0; // 40x40 proxy

// Cursor hover emphasis
pub const DOT_HOVER_SCALE: f32 = 2.0;
pub const HALO_HOVER_SCALE: f32 = 1.5;
pub const HALO_HOVER_OPACITY: f32 = 0.5;

// Navigation
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 100.0;
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0;
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0; // fixed navbar height

// Scroll indicator
pub const INDICATOR_HIDE_THRESHOLD_PX: f64 = 200.0;

// Reveal observer
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Stat counters
pub const STAT_DURATION_SECS: f64 = 2.0;
pub const STAT_EASING: &str = "power2.out";
pub const STAT_SNAP: f64 = 1.0;

// Hover tweens
pub const HOVER_DURATION_SECS: f64 = 0.3;
pub const HOVER_EASING: &str = "power2.out";
pub const SKILL_TAG_HOVER_SCALE: f64 = 1.1;
pub const PROJECT_CARD_HOVER_LIFT_PX: f64 = -10.0;
pub const TIMELINE_STAGGER_SECS: f64 = 0.1;

// Class names the logic reads or writes
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_CLASS: &str = "reveal";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const STATS_TRIGGER_CLASS: &str = "about-content";
pub const STAT_SUFFIX: char = '+';
