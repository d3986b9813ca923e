// DOM contract of the portfolio page: every selector the effects query.

// Cursor
pub const CURSOR_DOT: &str = ".cursor";
pub const CURSOR_HALO: &str = ".cursor-follower";
pub const CURSOR_INTERACTIVE: &[&str] = &[
    "a",
    "button",
    ".project-card",
    ".skill-tag",
    ".cert-card",
    ".achievement-card",
];

// Navigation
pub const NAVBAR: &str = ".navbar";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LINK_LIST: &str = ".nav-links";
pub const NAV_LINK: &str = ".nav-link";
pub const SECTIONS: &str = "section[id]";

// Scroll indicator
pub const SCROLL_INDICATOR: &str = ".scroll-indicator";

// Reveal targets, in the order they are tagged
pub const REVEAL_TARGETS: &[&str] = &[
    ".section-title",
    ".about-content",
    ".skill-category",
    ".cert-card",
    ".project-card",
    ".timeline-item",
    ".achievement-card",
    ".contact-content",
    ".game-dev-content",
    ".artwork-card",
    ".notebook-card",
    ".skill-item",
];

// Stat counters
pub const STAT_NUMBER: &str = ".stat-number";
pub const ANIMATED_ATTR: &str = "data-animated";

// Hover tweens
pub const SKILL_TAG: &str = ".skill-tag";
pub const PROJECT_CARD: &str = ".project-card";
pub const TIMELINE_ITEM: &str = ".timeline-item";

/// Join selectors into one selector list for `querySelectorAll`.
pub fn selector_list(selectors: &[&str]) -> String {
    selectors.join(", ")
}
